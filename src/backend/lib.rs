// src/backend/lib.rs

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod taxonomy;
pub mod utils;
