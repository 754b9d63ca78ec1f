mod config;
mod prompt;

pub use config::{load_parameters, read_config_file};
pub use prompt::prompt_raw_config;
