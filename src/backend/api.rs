// src/backend/api.rs
//
// HTTP surface: routing, CORS, header identity, payload ceiling. Everything
// below this layer speaks CatalogError; the mapping to status codes lives
// here and nowhere else.

use crate::error::CatalogError;
use crate::models::common::Identity;
use crate::models::{CreateItemRequest, ItemFilter, UpdateItemRequest};
use crate::services::CatalogService;
use crate::taxonomy::Taxonomy;
use futures::StreamExt;
use hyper::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::http::response::Builder;
use hyper::{Body, Method, Request, Response, StatusCode};
use serde_json::json;
use std::sync::Arc;

/// Hard ceiling on any request payload (items are shorts, not full videos).
pub const MAX_PAYLOAD_BYTES: u64 = 20 * 1024 * 1024;

const IDENTITY_HEADER: &str = "x-user-email";

pub struct AppState {
    service: Option<CatalogService>,
    taxonomy: Taxonomy,
}

impl AppState {
    /// `service` is None when the object store is not configured; data
    /// routes then answer 500 while `/options` keeps working.
    pub fn new(service: Option<CatalogService>, taxonomy: Taxonomy) -> Self {
        AppState { service, taxonomy }
    }

    fn service(&self) -> Result<&CatalogService, CatalogError> {
        self.service.as_ref().ok_or_else(|| {
            CatalogError::StoreUnavailable("object store is not configured".to_string())
        })
    }
}

/// Top-level hyper handler. Never fails: every error becomes a JSON
/// response with CORS headers.
pub async fn handle_request(
    state: Arc<AppState>,
    req: Request<Body>,
) -> Result<Response<Body>, hyper::Error> {
    if req.method() == Method::OPTIONS {
        let response = with_cors(Response::builder().status(StatusCode::OK))
            .body(Body::empty())
            .unwrap_or_else(|_| Response::new(Body::empty()));
        return Ok(response);
    }

    Ok(route(state, req).await.unwrap_or_else(error_response))
}

async fn route(
    state: Arc<AppState>,
    req: Request<Body>,
) -> Result<Response<Body>, CatalogError> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();
    let acting = identity_from(req.headers());
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (&method, segments.as_slice()) {
        (&Method::POST, ["items"]) => {
            let body = read_body(req).await?;
            let request: CreateItemRequest = parse_json(&body)?;
            let item = state.service()?.create_item(request, &acting).await?;
            Ok(json_response(StatusCode::CREATED, json!({ "item": item })))
        }
        (&Method::GET, ["items"]) => {
            let filter = filter_from_query(&query);
            let items = state.service()?.list_items(&filter).await?;
            Ok(json_response(StatusCode::OK, json!({ "items": items })))
        }
        (&Method::GET, ["items", id]) => {
            let item = state.service()?.get_item(id).await?;
            Ok(json_response(StatusCode::OK, json!({ "item": item })))
        }
        (&Method::PUT, ["items", id]) => {
            let id = id.to_string();
            let body = read_body(req).await?;
            let patch: UpdateItemRequest = parse_json(&body)?;
            let item = state.service()?.update_item(&id, patch, &acting).await?;
            Ok(json_response(StatusCode::OK, json!({ "item": item })))
        }
        (&Method::DELETE, ["items", id]) => {
            state.service()?.delete_item(id, &acting).await?;
            Ok(json_response(StatusCode::OK, json!({ "message": "Item deleted" })))
        }
        (&Method::POST, ["items", id, "files", filename]) => {
            let id = id.to_string();
            let filename = filename.to_string();
            let content_type = req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("application/octet-stream")
                .to_string();
            let body = read_body(req).await?;
            let item = state
                .service()?
                .attach_file(&id, &acting, &filename, body, &content_type)
                .await?;
            Ok(json_response(StatusCode::OK, json!({ "item": item })))
        }
        (&Method::GET, ["files", rest @ ..]) if !rest.is_empty() => {
            let key = format!("files/{}", rest.join("/"));
            let bytes = state.service()?.download_file(&key).await?;
            let response = with_cors(Response::builder().status(StatusCode::OK))
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(Body::from(bytes))
                .unwrap_or_else(|_| Response::new(Body::empty()));
            Ok(response)
        }
        (&Method::GET, ["duplicate", video_id]) => {
            match state.service()?.find_duplicate(video_id).await? {
                Some(item) => Ok(json_response(
                    StatusCode::OK,
                    json!({
                        "exists": true,
                        "message": format!("Video already exists! Uploaded by: {}", item.created_by),
                        "item": item,
                    }),
                )),
                None => Ok(json_response(
                    StatusCode::OK,
                    json!({ "exists": false, "message": "Video not found in database" }),
                )),
            }
        }
        (&Method::GET, ["options"]) => Ok(options_response(&state.taxonomy)),
        (&Method::GET, ["export"]) => {
            let filter = filter_from_query(&query);
            let csv = state.service()?.export_csv(&filter).await?;
            let response = with_cors(Response::builder().status(StatusCode::OK))
                .header(CONTENT_TYPE, "text/csv")
                .header("Content-Disposition", "attachment; filename=export.csv")
                .body(Body::from(csv))
                .unwrap_or_else(|_| Response::new(Body::empty()));
            Ok(response)
        }
        (&Method::POST, ["import"]) => {
            let body = read_body(req).await?;
            let items = state.service()?.import_items(&body, &acting).await?;
            Ok(json_response(
                StatusCode::CREATED,
                json!({ "items_created": items.len(), "items": items }),
            ))
        }
        _ => Ok(json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Not found" }),
        )),
    }
}

/// Caller identity from the `X-User-Email` header; blank or absent falls
/// back to the anonymous identity.
fn identity_from(headers: &HeaderMap) -> Identity {
    headers
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(Identity::from)
        .unwrap_or_else(Identity::anonymous)
}

fn filter_from_query(query: &str) -> ItemFilter {
    let mut filter = ItemFilter::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "vertical" => filter.vertical = Some(value),
            "exam" => filter.exam = Some(value),
            "subject" => filter.subject = Some(value),
            "contentType" => filter.content_type = Some(value),
            _ => {}
        }
    }
    filter
}

/// Reads the request body, enforcing the payload ceiling from the
/// Content-Length header before reading and again while streaming chunks.
async fn read_body(req: Request<Body>) -> Result<Vec<u8>, CatalogError> {
    if let Some(declared) = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
    {
        if declared > MAX_PAYLOAD_BYTES {
            return Err(CatalogError::PayloadTooLarge {
                max_bytes: MAX_PAYLOAD_BYTES,
            });
        }
    }

    let mut body = req.into_body();
    let mut buffer: Vec<u8> = Vec::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk
            .map_err(|err| CatalogError::InvalidInput(format!("failed to read body: {}", err)))?;
        if (buffer.len() + chunk.len()) as u64 > MAX_PAYLOAD_BYTES {
            return Err(CatalogError::PayloadTooLarge {
                max_bytes: MAX_PAYLOAD_BYTES,
            });
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(body)
        .map_err(|err| CatalogError::InvalidInput(format!("invalid JSON body: {}", err)))
}

fn options_response(taxonomy: &Taxonomy) -> Response<Body> {
    let verticals = taxonomy.verticals();
    let categories_by_vertical: serde_json::Map<String, serde_json::Value> = verticals
        .iter()
        .map(|v| (v.clone(), json!(taxonomy.exams_for(v))))
        .collect();
    let subjects_by_vertical: serde_json::Map<String, serde_json::Value> = verticals
        .iter()
        .map(|v| (v.clone(), json!(taxonomy.subjects_for(v))))
        .collect();

    json_response(
        StatusCode::OK,
        json!({
            "verticals": verticals,
            "categories_by_vertical": categories_by_vertical,
            "subjects_by_vertical": subjects_by_vertical,
            "content_subcategories": taxonomy.content_subcategories(),
        }),
    )
}

fn with_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        )
        .header("Access-Control-Allow-Headers", "Content-Type, X-User-Email")
}

fn json_response(status: StatusCode, value: serde_json::Value) -> Response<Body> {
    with_cors(Response::builder().status(status))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(value.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("response build failed")))
}

fn error_response(err: CatalogError) -> Response<Body> {
    let status = match &err {
        CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CatalogError::Duplicate { .. } => StatusCode::CONFLICT,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::NotAuthorized(_) => StatusCode::FORBIDDEN,
        CatalogError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        CatalogError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed");
    }
    json_response(status, json!({ "error": err.to_string() }))
}
