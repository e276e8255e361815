// src/backend/services/catalog_service.rs
use crate::error::CatalogError;
use crate::models::{
    common::Identity, CreateItemRequest, Item, ItemFilter, UpdateItemRequest, VideoId,
};
use crate::services::csv_service;
use crate::storage::{attachment_key, ItemRepository};
use crate::utils::guards::ensure_owner;
use crate::utils::time::{now_epoch_secs, now_iso};
use crate::utils::youtube::extract_video_id;
use validator::Validate;

/// Business logic over the item repository: input validation, duplicate
/// detection policy, ownership-aware mutation, attachments, bulk CSV.
#[derive(Clone)]
pub struct CatalogService {
    repo: ItemRepository,
}

/// Maps `validator` failures into the catalog's 400 error.
fn validate_request<T: Validate>(request: &T) -> Result<(), CatalogError> {
    request
        .validate()
        .map_err(|err| CatalogError::InvalidInput(err.to_string()))
}

impl CatalogService {
    pub fn new(repo: ItemRepository) -> Self {
        CatalogService { repo }
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repo
    }

    /// Validates the request, runs duplicate detection when the candidate
    /// carries an external video id, then creates the item.
    ///
    /// A supplied-but-unrecognized `verificationLink` is rejected outright;
    /// items without a link get a null video id and skip duplicate
    /// detection.
    pub async fn create_item(
        &self,
        request: CreateItemRequest,
        acting: &Identity,
    ) -> Result<Item, CatalogError> {
        let draft = self.prepare_draft(request, acting)?;

        if let Some(video_id) = draft.external_video_id.clone() {
            if let Some(existing) = self.find_duplicate(&video_id).await? {
                return Err(CatalogError::Duplicate {
                    video_id,
                    created_by: existing.created_by,
                });
            }
        }

        self.repo.create_item(draft).await
    }

    /// Linear scan of the index for a matching external video id;
    /// case-sensitive, first match in insertion order wins.
    pub async fn find_duplicate(&self, video_id: &str) -> Result<Option<Item>, CatalogError> {
        let index = self.repo.get_index().await?;
        Ok(index.find_video(video_id).cloned())
    }

    /// Items from the index matching every supplied criterion, in index
    /// order.
    pub async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, CatalogError> {
        let index = self.repo.get_index().await?;
        if filter.is_empty() {
            return Ok(index.items);
        }
        Ok(index
            .items
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect())
    }

    pub async fn get_item(&self, id: &str) -> Result<Item, CatalogError> {
        self.repo.get_item(id).await
    }

    pub async fn update_item(
        &self,
        id: &str,
        patch: UpdateItemRequest,
        acting: &Identity,
    ) -> Result<Item, CatalogError> {
        validate_request(&patch)?;
        self.repo.update_item(id, &patch, acting).await
    }

    pub async fn delete_item(&self, id: &str, acting: &Identity) -> Result<(), CatalogError> {
        self.repo.delete_item(id, acting).await
    }

    /// Stores an uploaded attachment under the item and records its key.
    /// Owner-only, like every other mutation.
    pub async fn attach_file(
        &self,
        id: &str,
        acting: &Identity,
        filename: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Item, CatalogError> {
        let mut item = self.repo.get_item(id).await?;
        ensure_owner(&item, acting)?;

        let key = attachment_key(acting, id, now_epoch_secs(), filename);
        self.repo.store().put_bytes(&key, body, content_type).await?;

        item.files.push(key);
        item.updated_at = Some(now_iso());
        self.repo.persist_item(&item).await?;
        Ok(item)
    }

    /// Fetches attachment bytes by storage key.
    pub async fn download_file(&self, key: &str) -> Result<Vec<u8>, CatalogError> {
        self.repo
            .store()
            .get_raw(key)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("file {}", key)))
    }

    /// Bulk CSV import. Rows that fail validation or hit a duplicate
    /// (against the catalog or earlier rows in the same file) are skipped;
    /// the index is written once at the end.
    pub async fn import_items(
        &self,
        csv_bytes: &[u8],
        acting: &Identity,
    ) -> Result<Vec<Item>, CatalogError> {
        let rows = csv_service::parse_rows(csv_bytes)?;

        let snapshot = self.repo.get_index().await?;
        let mut seen: Vec<VideoId> = snapshot
            .items
            .iter()
            .filter_map(|item| item.external_video_id.clone())
            .collect();

        let mut created = Vec::new();
        for row in rows {
            let draft = match self.prepare_draft(row, acting) {
                Ok(draft) => draft,
                Err(_) => continue,
            };
            if let Some(video_id) = &draft.external_video_id {
                if seen.iter().any(|known| known == video_id) {
                    continue;
                }
                seen.push(video_id.clone());
            }
            created.push(self.repo.stamp_and_store(draft).await?);
        }

        if !created.is_empty() {
            let batch = created.clone();
            self.repo
                .with_index(move |index| index.items.extend(batch))
                .await?;
        }
        Ok(created)
    }

    /// Filtered CSV export of the current index.
    pub async fn export_csv(&self, filter: &ItemFilter) -> Result<String, CatalogError> {
        let items = self.list_items(filter).await?;
        csv_service::write_csv(&items)
    }

    /// Trims and checks required fields, derives the external video id,
    /// and builds the unsaved item.
    fn prepare_draft(
        &self,
        request: CreateItemRequest,
        acting: &Identity,
    ) -> Result<Item, CatalogError> {
        validate_request(&request)?;

        let vertical = request.vertical.trim().to_string();
        let content_type = request.content_type.trim().to_string();
        let exam = request.exam.trim().to_string();
        let status = request.status.trim().to_string();
        if vertical.is_empty() || content_type.is_empty() || exam.is_empty() || status.is_empty() {
            return Err(CatalogError::InvalidInput(
                "Missing required fields".to_string(),
            ));
        }

        let verification_link = request.verification_link.trim().to_string();
        let external_video_id = if verification_link.is_empty() {
            None
        } else {
            match extract_video_id(&verification_link) {
                Some(video_id) => Some(video_id),
                None => {
                    return Err(CatalogError::InvalidInput(
                        "verificationLink is not a recognized video URL".to_string(),
                    ))
                }
            }
        };

        let email = request.email.trim();
        Ok(Item {
            id: String::new(),
            email: if email.is_empty() {
                acting.as_str().to_string()
            } else {
                email.to_string()
            },
            verification_link,
            external_video_id,
            content_type,
            vertical,
            exam,
            subject: request.subject.trim().to_string(),
            status,
            content_subcategory: request.content_subcategory.trim().to_string(),
            files: Vec::new(),
            created_by: acting.as_str().to_string(),
            created_at: String::new(),
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::BlobStore;

    fn service() -> CatalogService {
        CatalogService::new(ItemRepository::new(BlobStore::memory()))
    }

    fn request(link: &str) -> CreateItemRequest {
        CreateItemRequest {
            vertical: "SSC".to_string(),
            content_type: "Shorts".to_string(),
            exam: "CGL".to_string(),
            status: "Uploaded".to_string(),
            verification_link: link.to_string(),
            subject: "Maths".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_extracts_video_id_and_registers_duplicate() {
        let service = service();
        let creator = Identity::from("creator@adda247.com");
        let created = service
            .create_item(request("https://youtu.be/dQw4w9WgXcQ"), &creator)
            .await
            .unwrap();
        assert_eq!(created.external_video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(created.created_by, "creator@adda247.com");
        assert_eq!(created.email, "creator@adda247.com");

        let duplicate = service.find_duplicate("dQw4w9WgXcQ").await.unwrap();
        assert_eq!(duplicate.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn second_create_with_same_video_id_conflicts_and_persists_once() {
        let service = service();
        let creator = Identity::from("creator@adda247.com");
        service
            .create_item(request("https://youtu.be/dQw4w9WgXcQ"), &creator)
            .await
            .unwrap();

        let err = service
            .create_item(
                request("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
                &Identity::from("other@adda247.com"),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate {
                video_id: "dQw4w9WgXcQ".to_string(),
                created_by: "creator@adda247.com".to_string(),
            }
        );

        let index = service.repository().get_index().await.unwrap();
        assert_eq!(index.items.len(), 1);
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let service = service();
        let mut incomplete = request("");
        incomplete.status = "   ".to_string();
        let err = service
            .create_item(incomplete, &Identity::anonymous())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidInput("Missing required fields".to_string())
        );
    }

    #[tokio::test]
    async fn unrecognized_link_is_rejected_but_no_link_is_accepted() {
        let service = service();
        let err = service
            .create_item(request("https://example.com/clip"), &Identity::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        let created = service
            .create_item(request(""), &Identity::anonymous())
            .await
            .unwrap();
        assert_eq!(created.external_video_id, None);
    }

    #[tokio::test]
    async fn list_items_applies_conjunctive_filters() {
        let service = service();
        let creator = Identity::anonymous();
        let mut bank = request("");
        bank.vertical = "Bank Pre".to_string();
        service.create_item(request(""), &creator).await.unwrap();
        service.create_item(bank, &creator).await.unwrap();

        let all = service.list_items(&ItemFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let filter = ItemFilter {
            vertical: Some("SSC".to_string()),
            // Empty string means "no filter", not "must be empty".
            exam: Some(String::new()),
            ..Default::default()
        };
        let ssc = service.list_items(&filter).await.unwrap();
        assert_eq!(ssc.len(), 1);
        assert_eq!(ssc[0].vertical, "SSC");
    }

    #[tokio::test]
    async fn attach_file_records_key_and_stores_bytes() {
        let service = service();
        let creator = Identity::from("creator@adda247.com");
        let created = service.create_item(request(""), &creator).await.unwrap();

        let updated = service
            .attach_file(&created.id, &creator, "clip.mp4", b"bytes".to_vec(), "video/mp4")
            .await
            .unwrap();
        assert_eq!(updated.files.len(), 1);
        assert!(updated.files[0].starts_with(&format!(
            "files/creator@adda247.com/{}/",
            created.id
        )));
        assert_eq!(
            service.download_file(&updated.files[0]).await.unwrap(),
            b"bytes".to_vec()
        );

        let err = service
            .attach_file(
                &created.id,
                &Identity::from("other@adda247.com"),
                "clip.mp4",
                Vec::new(),
                "video/mp4",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotAuthorized(_)));
    }

    #[tokio::test]
    async fn import_skips_invalid_and_duplicate_rows() {
        let service = service();
        let creator = Identity::from("bulk@adda247.com");
        service
            .create_item(request("https://youtu.be/AAAAAAAAAAA"), &creator)
            .await
            .unwrap();

        let csv = "\
vertical,contentType,exam,status,verificationLink,subject\n\
SSC,Shorts,CGL,Uploaded,https://youtu.be/BBBBBBBBBBB,Maths\n\
SSC,Shorts,CGL,Uploaded,https://youtu.be/AAAAAAAAAAA,Maths\n\
SSC,Shorts,,Uploaded,,Maths\n\
Bank Pre,Shorts,SBI PO,Uploaded,,English\n";

        let created = service.import_items(csv.as_bytes(), &creator).await.unwrap();
        assert_eq!(created.len(), 2);

        let index = service.repository().get_index().await.unwrap();
        assert_eq!(index.items.len(), 3);
    }

    #[tokio::test]
    async fn export_produces_one_row_per_matching_item() {
        let service = service();
        service
            .create_item(request("https://youtu.be/dQw4w9WgXcQ"), &Identity::anonymous())
            .await
            .unwrap();

        let csv = service.export_csv(&ItemFilter::default()).await.unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("id,vertical,exam"));
        let row = lines.next().unwrap();
        assert!(row.contains("dQw4w9WgXcQ"));
        assert!(lines.next().is_none());
    }
}
