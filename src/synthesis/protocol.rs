use serde::{Deserialize, Serialize};

pub const ENDPOINT_GENERATE_WORD: &str = "/api/generate/word";
pub const ENDPOINT_GENERATE_FAMILY: &str = "/api/generate/family";
pub const ENDPOINT_GENERATE_BY_SCHEME: &str = "/api/generate/by-scheme";

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateWordRequest {
    pub root: String,
    pub scheme: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateFamilyRequest {
    pub root: String,
}

/// Body of every request keyed by a single pattern name.
#[derive(Debug, Serialize, Deserialize)]
pub struct SchemeRequest {
    pub scheme: String,
}
