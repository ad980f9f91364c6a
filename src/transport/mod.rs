/// HTTP client trait and implementation with status-to-error mapping
pub mod http_client;
