use serde::{Deserialize, Serialize};

/// Key order is the order the metadata document is written in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StackMetadata {
    pub description: String,
    pub release: String,
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// The three rendered artifacts of a stack package.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStack {
    pub script: String,
    pub readme: String,
    pub metadata: String,
}
