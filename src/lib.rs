pub mod engine;
pub mod models;
pub mod storage;
pub mod types;
