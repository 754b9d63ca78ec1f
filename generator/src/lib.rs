mod docs;
mod invocation;
mod pipeline;
mod script;

pub use docs::{build_metadata, generate_metadata, generate_readme};
pub use invocation::{
    b64_encode_json, build_invocation_payload, clamp_timeout, filter_env_vars, init_env_vars,
    to_spaced_json,
};
pub use pipeline::{generate_stack, load_variables, render_stack, run_generation};
pub use script::{generate_script, RESOURCE_NAME_PLACEHOLDER};
