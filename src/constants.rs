/// Default number of items to request per page in list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 200;
/// Default timeout in seconds for a single REST request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default base URL for the Gencove API
pub const DEFAULT_HOST: &str = "https://api.gencove.com";
/// User agent string used in HTTP requests to identify this client to the Gencove API
pub const USER_AGENT: &str = "gencove-client/0.1.0";
/// Endpoint exchanging email/password for a JWT pair
pub const JWT_CREATE_PATH: &str = "api/v2/jwt-create/";
/// Endpoint exchanging a refresh token for a new access token
pub const JWT_REFRESH_PATH: &str = "api/v2/jwt-refresh/";
/// Scheme prefix of logical upload paths (`gncv://batch1/sample_R1.fastq.gz`)
pub const GNCV_SCHEME: &str = "gncv://";
/// Default maximum number of attempts for timed-out requests
pub const DEFAULT_MAX_RETRY_ATTEMPTS: u32 = 5;
/// Default base delay in milliseconds between retry attempts; doubles per attempt
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
/// Default cap in seconds on the total time spent retrying a single call
pub const DEFAULT_RETRY_MAX_ELAPSED_SECS: u64 = 120;
