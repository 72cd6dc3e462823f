use serde::{Deserialize, Serialize};

pub const ENDPOINT_VALIDATE_CHECK: &str = "/api/validate/check";
pub const ENDPOINT_VALIDATE_DECOMPOSE: &str = "/api/validate/decompose";
pub const ENDPOINT_VALIDATE_FIND_ROOTS: &str = "/api/validate/find-roots";
pub const ENDPOINT_CORPUS_INGEST: &str = "/api/corpus/ingest";

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub word: String,
    pub root: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordRequest {
    pub word: String,
}
