use serde_json::Value;
use stack_defs::{GenerationParameters, GeneratorError, VariableDeclaration, VariableMap};
use stack_utils::{is_null_like, quote_str, stringify_value};
use tera::{Context, Tera};

pub const RESOURCE_NAME_PLACEHOLDER: &str = "FIX ME";

const INDENT: &str = "        ";
const BASE_TAGS: &str = "tfvar,db";
const EXECGROUP_ALIAS: &str = "tf_execgroup";
const SUBSTACK: &str = "config0-publish:::tf_executor";

/// Tags added on top of the base tags, keyed by exact variable name.
const EXTRA_TAGS: &[(&str, &str)] = &[("aws_default_region", "resource")];

const SCRIPT_TEMPLATE: &str = "stack_script.py";

/// One call with every argument after the first aligned under the opening parenthesis.
fn render_call(callee: &str, args: &[String]) -> String {
    let head = format!("{}{}(", INDENT, callee);
    let separator = format!(",\n{}", " ".repeat(head.len()));
    format!("{}{})\n", head, args.join(&separator))
}

fn variable_tags(name: &str) -> String {
    EXTRA_TAGS
        .iter()
        .filter(|(variable, _)| *variable == name)
        .fold(BASE_TAGS.to_string(), |mut tags, (_, extra)| {
            tags.push(',');
            tags.push_str(extra);
            tags
        })
}

fn render_default(variable: &VariableDeclaration) -> String {
    let default = match &variable.default {
        Some(default) if !is_null_like(default) => default,
        _ => return quote_str("null"),
    };

    if variable._type.is_string() {
        match default {
            Value::String(s) => quote_str(s),
            other => quote_str(&stringify_value(other)),
        }
    } else {
        stringify_value(default)
    }
}

fn render_variable(variable: &VariableDeclaration) -> String {
    let key = format!("key={}", quote_str(&variable.name));
    let tags = format!("tags={}", quote_str(&variable_tags(&variable.name)));
    let types = format!("types={}", quote_str(variable._type.as_tag()));

    if variable.is_required() {
        render_call("self.parse.add_required", &[key, tags, types])
    } else {
        let default = format!("default={}", render_default(variable));
        render_call("self.parse.add_optional", &[key, default, tags, types])
    }
}

fn render_constructor(params: &GenerationParameters) -> String {
    let resource_name = quote_str(
        params
            .resource_name
            .as_deref()
            .unwrap_or(RESOURCE_NAME_PLACEHOLDER),
    );

    render_call(
        "tf = TFConstructor",
        &[
            "stack=self.stack".to_string(),
            format!("execgroup_name=self.stack.{}.name", EXECGROUP_ALIAS),
            format!("provider={}", quote_str(&params.provider)),
            format!("tf_runtime={}", quote_str(&params.tf_runtime)),
            format!("resource_name={}", resource_name),
            format!("resource_type={}", quote_str(&params.resource_type)),
        ],
    )
}

/// Renders the stack script. Section order is fixed by the template: variables,
/// execgroup, substack, init calls, timeout, constructor, insert, return.
pub fn generate_script(
    params: &GenerationParameters,
    variables: &VariableMap,
) -> Result<String, GeneratorError> {
    let mut tera = Tera::default();
    tera.add_raw_template(SCRIPT_TEMPLATE, include_str!("../templates/stack_script.py"))
        .map_err(|err| template_error(SCRIPT_TEMPLATE, err))?;

    let directives: Vec<String> = variables.values().map(render_variable).collect();

    let mut context = Context::new();
    context.insert("directives", &directives);
    context.insert(
        "execgroup_call",
        &render_call(
            "self.stack.add_execgroup",
            &[quote_str(&params.execgroup), quote_str(EXECGROUP_ALIAS)],
        ),
    );
    context.insert(
        "substack_call",
        &render_call("self.stack.add_substack", &[quote_str(SUBSTACK)]),
    );
    context.insert("timeout", &params.timeout);
    context.insert("resource_name_missing", &params.resource_name.is_none());
    context.insert("constructor", &render_constructor(params));
    context.insert(
        "insert_call",
        &render_call(
            "self.stack.tf_executor.insert",
            &["display=True".to_string(), "**tf.get()".to_string()],
        ),
    );

    tera.render(SCRIPT_TEMPLATE, &context)
        .map_err(|err| template_error(SCRIPT_TEMPLATE, err))
}

pub(crate) fn template_error(name: &str, err: tera::Error) -> GeneratorError {
    GeneratorError::Template {
        name: name.to_string(),
        message: err.to_string(),
    }
}
