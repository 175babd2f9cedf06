// API layer - HTTP endpoints
pub mod health;
pub mod requests;

pub use health::HealthApi;
pub use requests::RequestsApi;
