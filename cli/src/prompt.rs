use inquire::Text;
use stack_defs::{
    ConfigError, RawConfig, TimeoutValue, DEFAULT_AUTHOR, DEFAULT_DEST_DIR, DEFAULT_PROVIDER,
    DEFAULT_RELEASE, DEFAULT_STACK_TAGS, DEFAULT_TF_RUNTIME, DEFAULT_TIMEOUT,
};

fn ask(message: &str, default: Option<&str>) -> Result<Option<String>, ConfigError> {
    let mut prompt = Text::new(message);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    let answer = prompt
        .prompt()
        .map_err(|err| ConfigError::Prompt(err.to_string()))?;
    Ok(Some(answer))
}

/// Asks for every generation parameter. Blank answers fall back to the defaults.
pub fn prompt_raw_config() -> Result<RawConfig, ConfigError> {
    let timeout_default = DEFAULT_TIMEOUT.to_string();

    Ok(RawConfig {
        tf_variables_file: ask("Terraform variables file (blank for none):", None)?,
        execgroup: ask("Execution group:", None)?,
        resource_type: ask("Resource type:", None)?,
        resource_name: ask("Resource name (blank to fill in later):", None)?,
        provider: ask("Provider:", Some(DEFAULT_PROVIDER))?,
        timeout: ask("Timeout in seconds:", Some(timeout_default.as_str()))?
            .map(TimeoutValue::Text),
        tf_runtime: ask("Terraform runtime:", Some(DEFAULT_TF_RUNTIME))?,
        stack_name: ask("Stack name:", None)?,
        dest_dir: ask("Destination directory:", Some(DEFAULT_DEST_DIR))?,
        description: ask("Description (blank for default):", None)?,
        release: ask("Release:", Some(DEFAULT_RELEASE))?,
        author: ask("Author:", Some(DEFAULT_AUTHOR))?,
        stack_tags: ask("Tags (comma separated):", Some(DEFAULT_STACK_TAGS))?,
    })
}
