/// Authentication manager performing login and token refresh
pub mod auth;
/// Session types and the authenticator trait
pub mod interface;
