pub const UPLOAD_ENDPOINT: &str = "/api/upload-visiting-card";
pub const USERS_ENDPOINT: &str = "/api/users";
pub const UPLOAD_FIELD_NAME: &str = "visitingCard";

pub struct Env {
    pub api_base_url: String,
    pub page_size: u32,
    pub search_debounce_ms: u64,
    pub max_upload_bytes: u64,
    pub request_timeout_secs: u64,
}

impl Env {
    fn new() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let page_size = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .expect("PAGE_SIZE must be a positive u32 integer");

        let search_debounce_ms = std::env::var("SEARCH_DEBOUNCE_MS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .expect("SEARCH_DEBOUNCE_MS must be a valid u64 integer");

        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (5 * 1024 * 1024).to_string())
            .parse::<u64>()
            .expect("MAX_UPLOAD_BYTES must be a valid u64 integer");

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64 integer");

        Env { api_base_url, page_size, search_debounce_ms, max_upload_bytes, request_timeout_secs }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
