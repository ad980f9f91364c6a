/// Cursor-based pagination over list endpoints
pub mod pagination;
/// Per-entity services for projects, samples and uploads
pub mod services;
