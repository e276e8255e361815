// src/backend/services/mod.rs

pub mod catalog_service;
pub mod csv_service;

pub use catalog_service::CatalogService;
