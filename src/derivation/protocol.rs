use serde::{Deserialize, Serialize};

pub const ENDPOINT_SEARCH_BY_SCHEME: &str = "/api/search/by-scheme";
pub const ENDPOINT_ROOT_DERIVATIVES: &str = "/api/search/roots/:root/derivatives";
pub const ENDPOINT_FREQUENCIES: &str = "/api/frequencies";
pub const ENDPOINT_FREQUENCIES_UPLOAD: &str = "/api/frequencies/upload";

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordFrequencyRequest {
    pub root: String,
    pub word: String,
    pub count: u64,
}
