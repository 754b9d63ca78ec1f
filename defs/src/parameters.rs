use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_PROVIDER: &str = "aws";
pub const DEFAULT_TIMEOUT: u64 = 600;
pub const DEFAULT_TF_RUNTIME: &str = "tofu:1.9.1";
pub const DEFAULT_DEST_DIR: &str = ".";
pub const DEFAULT_RELEASE: &str = "0.0.1";
pub const DEFAULT_AUTHOR: &str = "anonymous";
pub const DEFAULT_STACK_TAGS: &str = "config0,evaluate";

/// Timeout as written by the operator, either `600` or `"600"`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TimeoutValue {
    Seconds(u64),
    Text(String),
}

/// Generation parameters exactly as provided, from a config file or from prompts.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawConfig {
    pub tf_variables_file: Option<String>,
    pub execgroup: Option<String>,
    pub resource_type: Option<String>,
    pub resource_name: Option<String>,
    pub provider: Option<String>,
    pub timeout: Option<TimeoutValue>,
    pub tf_runtime: Option<String>,
    pub stack_name: Option<String>,
    pub dest_dir: Option<String>,
    pub description: Option<String>,
    pub release: Option<String>,
    pub author: Option<String>,
    pub stack_tags: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    pub tf_variables_file: Option<PathBuf>,
    pub execgroup: String,
    pub resource_type: String,
    pub resource_name: Option<String>,
    pub provider: String,
    pub timeout: u64,
    pub tf_runtime: String,
    pub stack_name: String,
    pub dest_dir: PathBuf,
    pub description: String,
    pub release: String,
    pub author: String,
    pub stack_tags: String,
}

impl GenerationParameters {
    /// Applies defaults and checks required fields. Blank values count as unset.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let execgroup =
            non_blank(raw.execgroup).ok_or(ConfigError::MissingRequiredField("execgroup"))?;
        let resource_type = non_blank(raw.resource_type)
            .ok_or(ConfigError::MissingRequiredField("resource_type"))?;
        let stack_name =
            non_blank(raw.stack_name).ok_or(ConfigError::MissingRequiredField("stack_name"))?;

        let timeout = match raw.timeout {
            None => DEFAULT_TIMEOUT,
            Some(TimeoutValue::Seconds(seconds)) => seconds,
            Some(TimeoutValue::Text(text)) if text.trim().is_empty() => DEFAULT_TIMEOUT,
            Some(TimeoutValue::Text(text)) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(text.clone()))?,
        };

        let description = non_blank(raw.description)
            .unwrap_or_else(|| format!("Stack for creating {} resources", resource_type));

        Ok(GenerationParameters {
            tf_variables_file: non_blank(raw.tf_variables_file).map(PathBuf::from),
            execgroup,
            resource_name: non_blank(raw.resource_name),
            provider: non_blank(raw.provider).unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            timeout,
            tf_runtime: non_blank(raw.tf_runtime)
                .unwrap_or_else(|| DEFAULT_TF_RUNTIME.to_string()),
            stack_name,
            dest_dir: PathBuf::from(
                non_blank(raw.dest_dir).unwrap_or_else(|| DEFAULT_DEST_DIR.to_string()),
            ),
            description,
            release: non_blank(raw.release).unwrap_or_else(|| DEFAULT_RELEASE.to_string()),
            author: non_blank(raw.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            stack_tags: non_blank(raw.stack_tags)
                .unwrap_or_else(|| DEFAULT_STACK_TAGS.to_string()),
            resource_type,
        })
    }

    /// Splits the comma separated tag list, trimming entries and dropping empty ones.
    pub fn tag_list(&self) -> Vec<String> {
        self.stack_tags
            .split(',')
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(|tag| tag.to_string())
            .collect()
    }

    pub fn stack_dir(&self) -> PathBuf {
        self.dest_dir.join(&self.stack_name)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
