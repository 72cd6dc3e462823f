//! Lexicon HTTP endpoints and DTOs.

use super::types::{Root, RootType, explain};

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

pub const ENDPOINT_ROOTS: &str = "/api/roots";
pub const ENDPOINT_ROOT: &str = "/api/roots/:root";
pub const ENDPOINT_ROOTS_UPLOAD: &str = "/api/roots/upload";
pub const ENDPOINT_ROOT_ANALYZE: &str = "/api/roots/analyze/:root";
pub const ENDPOINT_SCHEMES: &str = "/api/schemes";
pub const ENDPOINT_SCHEME: &str = "/api/schemes/:name";
pub const ENDPOINT_SCHEMES_UPLOAD: &str = "/api/schemes/upload";

// --- Data Transfer Objects ---

#[derive(Debug, Default, Deserialize)]
pub struct ListRootsParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddRootRequest {
    pub root: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPatternRequest {
    pub name: String,
    pub rule: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePatternRequest {
    pub rule: String,
}

/// A root with its morphological classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootInfo {
    pub root: Root,
    pub letters: [char; 3],
    pub root_type: RootType,
    pub root_type_name: &'static str,
    pub description: &'static str,
    pub explanation: String,
    pub contains_hamza: bool,
}

impl From<&Root> for RootInfo {
    fn from(root: &Root) -> Self {
        let root_type = root.root_type();
        Self {
            root: root.clone(),
            letters: root.letters(),
            root_type,
            root_type_name: root_type.arabic_name(),
            description: root_type.description(),
            explanation: explain(root),
            contains_hamza: root.contains_hamza(),
        }
    }
}
