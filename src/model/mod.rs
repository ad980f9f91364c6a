/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration and backoff policy for timed-out requests
pub mod retry;
