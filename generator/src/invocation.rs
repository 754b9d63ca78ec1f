use std::io;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use stack_defs::{
    InvocationPayload, InvocationRequest, DEFAULT_FUNCTION_NAME, DEFAULT_INVOCATION_TIMEOUT,
    MAX_INVOCATION_TIMEOUT,
};

/// Never forwarded to the function.
const SKIPPED_ENV_VARS: &[&str] = &["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"];

/// The only build env vars forwarded in sparse mode.
const SPARSE_ENV_VARS: &[&str] = &["STATEFUL_ID", "REMOTE_STATEFUL_BUCKET", "TMPDIR", "APP_DIR"];

/// Reserved by the Lambda runtime.
const RESERVED_PREFIX: &str = "AWS_LAMBDA_";

/// JSON in the layout the function side produces and expects: `", "` and `": "`
/// separators, non-ASCII characters as `\uXXXX` escapes.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

pub fn to_spaced_json(value: &Value) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Strings are encoded as they are, anything else as spaced JSON.
pub fn b64_encode_json(value: &Value) -> serde_json::Result<String> {
    match value {
        Value::String(s) => Ok(STANDARD.encode(s.as_bytes())),
        other => Ok(STANDARD.encode(to_spaced_json(other)?)),
    }
}

/// Whole seconds from a number or numeric string, capped at the function maximum.
/// Anything unusable falls back to the maximum.
pub fn clamp_timeout(raw: Option<&Value>) -> u64 {
    let seconds = match raw {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    seconds
        .unwrap_or(DEFAULT_INVOCATION_TIMEOUT)
        .min(MAX_INVOCATION_TIMEOUT)
}

pub fn init_env_vars(method: &str, ssm_name: Option<&str>) -> IndexMap<String, String> {
    let mut env_vars = IndexMap::new();
    env_vars.insert("TMPDIR".to_string(), "/tmp".to_string());
    env_vars.insert("TF_PATH".to_string(), "/tmp/terraform".to_string());
    env_vars.insert("METHOD".to_string(), method.to_string());

    if let Some(ssm_name) = ssm_name {
        env_vars.insert("SSM_NAME".to_string(), ssm_name.to_string());
    }

    env_vars
}

pub fn filter_env_vars(
    init: &IndexMap<String, String>,
    build: &IndexMap<String, Option<String>>,
    sparse: bool,
) -> IndexMap<String, String> {
    let mut env_vars = init.clone();
    let mut added: Vec<&str> = vec![];

    for (key, value) in build {
        let value = match value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!("env var {} is empty/None - skipping", key);
                continue;
            }
        };

        if SKIPPED_ENV_VARS.contains(&key.as_str()) {
            continue;
        }
        if sparse && !SPARSE_ENV_VARS.contains(&key.as_str()) {
            continue;
        }
        if key.starts_with(RESERVED_PREFIX) {
            continue;
        }
        if added.contains(&key.as_str()) {
            continue;
        }

        added.push(key);
        env_vars.insert(key.clone(), value.to_string());
    }

    env_vars
}

pub fn build_invocation_payload(request: &InvocationRequest) -> anyhow::Result<InvocationPayload> {
    let env_vars = filter_env_vars(
        &request.init_env_vars,
        &request.build_env_vars,
        request.sparse,
    );

    let payload = serde_json::json!({
        "cmds_b64": b64_encode_json(&request.cmds)?,
        "env_vars_b64": b64_encode_json(&serde_json::to_value(&env_vars)?)?,
    });

    Ok(InvocationPayload {
        function_name: request
            .function_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FUNCTION_NAME.to_string()),
        invocation_type: "RequestResponse".to_string(),
        log_type: "Tail".to_string(),
        payload: serde_json::to_string(&payload)?,
        timeout: clamp_timeout(request.build_timeout.as_ref()),
    })
}
