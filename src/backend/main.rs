// src/backend/main.rs
use anyhow::Context;
use catalog_backend::api::{self, AppState};
use catalog_backend::services::CatalogService;
use catalog_backend::storage::{ItemRepository, StoreConfig};
use catalog_backend::taxonomy::Taxonomy;
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store = StoreConfig::from_env().build()?;
    let service = store.map(|store| CatalogService::new(ItemRepository::new(store)));
    if service.is_none() {
        tracing::warn!("object store not configured; data routes will answer 500");
    }
    let state = Arc::new(AppState::new(service, Taxonomy::builtin()));

    let addr: SocketAddr = std::env::var("CATALOG_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("parsing CATALOG_BIND_ADDR")?;

    let make_svc = make_service_fn(move |_conn| {
        let state = state.clone();
        async move {
            Ok::<_, hyper::Error>(service_fn(move |req| {
                api::handle_request(state.clone(), req)
            }))
        }
    });

    tracing::info!(%addr, "catalog backend listening");
    Server::bind(&addr)
        .serve(make_svc)
        .await
        .context("server error")?;
    Ok(())
}
