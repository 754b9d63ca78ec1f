mod declarations;
mod literal;
mod logging;
mod package;
mod variables;

pub use declarations::{parse_declaration_file, parse_declarations, DeclarationFormat};
pub use literal::{is_null_like, quote_str, stringify_value};
pub use logging::setup_logging;
pub use package::{
    write_stack_package, DOCUMENTATION_DIR, MAIN_DIR, METADATA_FILE, README_FILE, SCRIPT_FILE,
};
pub use variables::{extract_variables, resolve_type};
