// src/backend/services/csv_service.rs
use crate::error::CatalogError;
use crate::models::{CreateItemRequest, Item};

/// Column order for exports. Attachments are storage keys and stay out of
/// the spreadsheet view.
const EXPORT_HEADERS: [&str; 11] = [
    "id",
    "vertical",
    "exam",
    "subject",
    "contentType",
    "contentSubcategory",
    "status",
    "verificationLink",
    "externalVideoId",
    "createdBy",
    "createdAt",
];

/// Parses an uploaded CSV into create requests. Column names match the JSON
/// wire names; absent columns fall back to empty fields. A structurally
/// malformed file is rejected as a whole.
pub fn parse_rows(data: &[u8]) -> Result<Vec<CreateItemRequest>, CatalogError> {
    let mut reader = csv::Reader::from_reader(data);
    let mut rows = Vec::new();
    for record in reader.deserialize::<CreateItemRequest>() {
        let row =
            record.map_err(|err| CatalogError::InvalidInput(format!("malformed CSV: {}", err)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Serializes items into the export CSV.
pub fn write_csv(items: &[Item]) -> Result<String, CatalogError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|err| CatalogError::StoreUnavailable(format!("CSV export failed: {}", err)))?;
    for item in items {
        writer
            .write_record([
                item.id.as_str(),
                item.vertical.as_str(),
                item.exam.as_str(),
                item.subject.as_str(),
                item.content_type.as_str(),
                item.content_subcategory.as_str(),
                item.status.as_str(),
                item.verification_link.as_str(),
                item.external_video_id.as_deref().unwrap_or(""),
                item.created_by.as_str(),
                item.created_at.as_str(),
            ])
            .map_err(|err| CatalogError::StoreUnavailable(format!("CSV export failed: {}", err)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CatalogError::StoreUnavailable(format!("CSV export failed: {}", err)))?;
    String::from_utf8(bytes)
        .map_err(|err| CatalogError::StoreUnavailable(format!("CSV export failed: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fills_missing_columns_with_defaults() {
        let csv = "vertical,contentType,exam,status\nSSC,Shorts,CGL,Uploaded\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].vertical, "SSC");
        assert_eq!(rows[0].subject, "");
        assert_eq!(rows[0].verification_link, "");
    }

    #[test]
    fn parse_rejects_malformed_files() {
        let csv = "vertical,contentType\nSSC,Shorts,extra-column\n";
        assert!(matches!(
            parse_rows(csv.as_bytes()),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn write_emits_header_and_quoted_fields() {
        let item = Item {
            id: "id-1".to_string(),
            email: String::new(),
            verification_link: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            external_video_id: Some("dQw4w9WgXcQ".to_string()),
            content_type: "Shorts".to_string(),
            vertical: "SSC".to_string(),
            exam: "CGL".to_string(),
            subject: "Maths, Advanced".to_string(),
            status: "Uploaded".to_string(),
            content_subcategory: String::new(),
            files: Vec::new(),
            created_by: "creator@adda247.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        };

        let csv = write_csv(&[item]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap().split(',').count(), 11);
        // The comma inside the subject must be quoted, not split.
        assert!(lines.next().unwrap().contains("\"Maths, Advanced\""));
    }
}
