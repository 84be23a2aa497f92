pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, Backend};
pub use error::ApiError;
