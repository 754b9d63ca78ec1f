use std::path::Path;

use log::debug;
use stack_defs::{ConfigError, GenerationParameters, RawConfig};

use crate::prompt_raw_config;

pub fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MissingConfigFile(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|err| ConfigError::InvalidConfig(format!("{}: {}", path.display(), err)))?;
    let raw: RawConfig = serde_yaml::from_str(&contents)
        .map_err(|err| ConfigError::InvalidConfig(format!("{}: {}", path.display(), err)))?;

    debug!("Read config {} as {:?}", path.display(), raw);
    Ok(raw)
}

/// Reads parameters from the config file when one is given, otherwise prompts for them.
pub fn load_parameters(config: Option<&Path>) -> Result<GenerationParameters, ConfigError> {
    let raw = match config {
        Some(path) => read_config_file(path)?,
        None => prompt_raw_config()?,
    };
    GenerationParameters::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stack_defs::TimeoutValue;

    #[test]
    fn test_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.yml");
        std::fs::write(
            &path,
            r#"
execgroup: config0-publish:::aws_networking::vpc
resource_type: vpc
stack_name: vpc_stack
timeout: 900
stack_tags: networking, aws
"#,
        )
        .unwrap();

        let raw = read_config_file(&path).unwrap();
        assert_eq!(raw.timeout, Some(TimeoutValue::Seconds(900)));
        assert_eq!(raw.stack_tags.as_deref(), Some("networking, aws"));
        assert_eq!(raw.resource_name, None);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yml");
        assert!(matches!(
            read_config_file(&path),
            Err(ConfigError::MissingConfigFile(_))
        ));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.yml");
        std::fs::write(&path, "execgroup: [unclosed\n").unwrap();
        assert!(matches!(
            read_config_file(&path),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_parameters_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.yml");
        std::fs::write(&path, "execgroup: eg1\nstack_name: vpc_stack\n").unwrap();
        assert!(matches!(
            load_parameters(Some(&path)),
            Err(ConfigError::MissingRequiredField("resource_type"))
        ));
    }
}
