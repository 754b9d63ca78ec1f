use std::path::PathBuf;

use log::{info, warn};
use stack_defs::{GeneratedStack, GenerationParameters, GeneratorError, VariableMap};
use stack_utils::{extract_variables, parse_declaration_file, write_stack_package};

use crate::{generate_metadata, generate_readme, generate_script};

pub fn load_variables(params: &GenerationParameters) -> Result<VariableMap, GeneratorError> {
    let path = match &params.tf_variables_file {
        Some(path) => path,
        None => {
            info!("No variables file set, generating a stack without variables");
            return Ok(VariableMap::new());
        }
    };

    let tree = parse_declaration_file(path)?;
    let variables = extract_variables(&tree);
    if variables.is_empty() {
        warn!("No variables found in {}", path.display());
    } else {
        info!("Found {} variables in {}", variables.len(), path.display());
    }

    Ok(variables)
}

pub fn render_stack(
    params: &GenerationParameters,
    variables: &VariableMap,
) -> Result<GeneratedStack, GeneratorError> {
    if params.resource_name.is_none() {
        warn!("No resource name set, the generated script needs it filled in before use");
    }

    Ok(GeneratedStack {
        script: generate_script(params, variables)?,
        readme: generate_readme(params, variables)?,
        metadata: generate_metadata(params)?,
    })
}

pub fn generate_stack(params: &GenerationParameters) -> Result<GeneratedStack, GeneratorError> {
    let variables = load_variables(params)?;
    render_stack(params, &variables)
}

/// Generates the stack and writes it, returning the stack directory.
pub fn run_generation(params: &GenerationParameters) -> Result<PathBuf, GeneratorError> {
    let stack = generate_stack(params)?;
    let stack_dir = write_stack_package(&params.dest_dir, &params.stack_name, &stack)?;
    Ok(stack_dir)
}
