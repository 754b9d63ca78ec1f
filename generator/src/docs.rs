use serde_json::{json, Value};
use stack_defs::{
    GenerationParameters, GeneratorError, StackMetadata, VariableDeclaration, VariableMap,
};
use stack_utils::stringify_value;
use tera::{Context, Tera};

use crate::script::template_error;

const README_TEMPLATE: &str = "readme.md";

fn default_display(variable: &VariableDeclaration) -> String {
    match &variable.default {
        None => "Required".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(other) => stringify_value(other),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

pub fn generate_readme(
    params: &GenerationParameters,
    variables: &VariableMap,
) -> Result<String, GeneratorError> {
    let mut tera = Tera::default();
    tera.add_raw_template(README_TEMPLATE, include_str!("../templates/readme.md"))
        .map_err(|err| template_error(README_TEMPLATE, err))?;

    let rows: Vec<Value> = variables
        .values()
        .map(|variable| {
            json!({
                "name": escape_cell(&variable.name),
                "target": variable._type.as_tag(),
                "required": if variable.is_required() { "Yes" } else { "No" },
                "default": escape_cell(&default_display(variable)),
                "description": escape_cell(&variable.description),
            })
        })
        .collect();

    let mut context = Context::new();
    context.insert("stack_name", &params.stack_name);
    context.insert("description", &params.description);
    context.insert("rows", &rows);

    tera.render(README_TEMPLATE, &context)
        .map_err(|err| template_error(README_TEMPLATE, err))
}

/// Categories and tags are the same list.
pub fn build_metadata(params: &GenerationParameters) -> StackMetadata {
    let tags = params.tag_list();
    StackMetadata {
        description: params.description.clone(),
        release: params.release.clone(),
        author: params.author.clone(),
        categories: tags.clone(),
        tags,
    }
}

pub fn generate_metadata(params: &GenerationParameters) -> Result<String, GeneratorError> {
    serde_yaml::to_string(&build_metadata(params))
        .map_err(|err| GeneratorError::Metadata(err.to_string()))
}
