pub mod api_client;
pub mod auth_service;
pub mod error;

pub use api_client::{ApiClient, EmployeeDirectory};
pub use auth_service::{auth_header, auth_header_for_key, Headers};
pub use error::ApiError;
