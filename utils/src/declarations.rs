use std::fs;
use std::path::Path;

use log::debug;
use stack_defs::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Hcl,
    Json,
}

impl DeclarationFormat {
    /// `*.json` (including `*.tf.json`) is JSON, everything else is HCL.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DeclarationFormat::Json,
            _ => DeclarationFormat::Hcl,
        }
    }
}

/// Parses declarations into a raw tree. The tree is returned as the parser produced it.
pub fn parse_declarations(
    contents: &str,
    format: DeclarationFormat,
    origin: &str,
) -> Result<serde_json::Value, ParseError> {
    match format {
        DeclarationFormat::Hcl => {
            hcl::from_str::<serde_json::Value>(contents).map_err(|err| ParseError::Hcl {
                path: origin.to_string(),
                message: err.to_string(),
            })
        }
        DeclarationFormat::Json => {
            serde_json::from_str::<serde_json::Value>(contents).map_err(|err| ParseError::Json {
                path: origin.to_string(),
                message: err.to_string(),
            })
        }
    }
}

pub fn parse_declaration_file(path: &Path) -> Result<serde_json::Value, ParseError> {
    let origin = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: origin.clone(),
        source,
    })?;

    let format = DeclarationFormat::from_path(path);
    debug!("Parsing {} as {:?}", origin, format);
    parse_declarations(&contents, format, &origin)
}
