use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file {0} does not exist")]
    MissingConfigFile(String),

    #[error("Config file could not be read: {0}")]
    InvalidConfig(String),

    #[error("Missing required config field \"{0}\"")]
    MissingRequiredField(&'static str),

    #[error("Timeout must be a whole number of seconds, got \"{0}\"")]
    InvalidTimeout(String),

    #[error("Prompt was aborted: {0}")]
    Prompt(String),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read variables file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse HCL in {path}: {message}")]
    Hcl { path: String, message: String },

    #[error("Failed to parse JSON in {path}: {message}")]
    Json { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write stack package: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render metadata: {0}")]
    Metadata(String),

    #[error("Failed to render {name}: {message}")]
    Template { name: String, message: String },
}
