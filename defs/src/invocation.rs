use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FUNCTION_NAME: &str = "config0-iac";
pub const DEFAULT_INVOCATION_TIMEOUT: u64 = 900;
pub const MAX_INVOCATION_TIMEOUT: u64 = 900;

fn default_sparse() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvocationRequest {
    pub function_name: Option<String>,
    /// Command phases, e.g. `{"prebuild": {"cmds": [...]}, "build": {"cmds": [...]}}`.
    pub cmds: serde_json::Value,
    #[serde(default)]
    pub init_env_vars: IndexMap<String, String>,
    #[serde(default)]
    pub build_env_vars: IndexMap<String, Option<String>>,
    pub build_timeout: Option<serde_json::Value>,
    #[serde(default = "default_sparse")]
    pub sparse: bool,
}

impl InvocationRequest {
    pub fn new(cmds: serde_json::Value) -> Self {
        InvocationRequest {
            function_name: None,
            cmds,
            init_env_vars: IndexMap::new(),
            build_env_vars: IndexMap::new(),
            build_timeout: None,
            sparse: default_sparse(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationPayload {
    pub function_name: String,
    pub invocation_type: String,
    pub log_type: String,
    /// JSON document with `cmds_b64` and `env_vars_b64`.
    pub payload: String,
    pub timeout: u64,
}
