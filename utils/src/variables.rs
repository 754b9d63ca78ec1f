use log::{debug, warn};
use serde_json::{Map, Value};
use stack_defs::{TargetType, VariableDeclaration, VariableMap};

/// Keyword → tag, checked in order. Mapping keywords come first, so any type
/// that mentions a map or object is a dict (`list(map(string))` included).
const TYPE_KEYWORDS: &[(&str, TargetType)] = &[
    ("map", TargetType::Dict),
    ("object", TargetType::Dict),
    ("list", TargetType::List),
    ("set", TargetType::List),
    ("bool", TargetType::Bool),
    ("number", TargetType::Str),
];

pub fn resolve_type(declared: &Value) -> TargetType {
    let declared = match declared.as_str() {
        Some(s) => s.to_lowercase(),
        None => return TargetType::Str,
    };

    TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| declared.contains(keyword))
        .map(|(_, target)| *target)
        .unwrap_or(TargetType::Str)
}

/// The two shapes a `variable` section comes in, depending on the parser:
/// `{"name": {...}, ...}` or `[{"name": {...}}, ...]`.
enum VariableSection<'a> {
    Mapping(&'a Map<String, Value>),
    Entries(&'a [Value]),
}

impl<'a> VariableSection<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(VariableSection::Mapping(map)),
            Value::Array(entries) => Some(VariableSection::Entries(entries)),
            _ => None,
        }
    }

    fn definitions(&self) -> Vec<(&'a str, &'a Value)> {
        match *self {
            VariableSection::Mapping(map) => {
                map.iter().map(|(name, def)| (name.as_str(), def)).collect()
            }
            VariableSection::Entries(entries) => entries
                .iter()
                .filter_map(|entry| match entry.as_object() {
                    Some(map) => Some(map),
                    None => {
                        warn!("Skipping variable entry that is not a mapping: {}", entry);
                        None
                    }
                })
                .flat_map(|map| map.iter().map(|(name, def)| (name.as_str(), def)))
                .collect(),
        }
    }
}

fn top_level_blocks(tree: &Value) -> Vec<&Map<String, Value>> {
    match tree {
        Value::Object(map) => vec![map],
        Value::Array(blocks) => blocks.iter().filter_map(|block| block.as_object()).collect(),
        _ => vec![],
    }
}

fn strip_interpolation(declared: Value) -> Value {
    match declared {
        Value::String(s) if s.starts_with("${") && s.ends_with('}') => Value::String(
            s.trim_start_matches("${")
                .trim_end_matches('}')
                .to_string(),
        ),
        other => other,
    }
}

fn to_declaration(name: &str, attrs: &Map<String, Value>) -> VariableDeclaration {
    let declared_type = attrs
        .get("type")
        .cloned()
        .map(strip_interpolation)
        .unwrap_or(Value::String("string".to_string()));

    VariableDeclaration {
        name: name.to_string(),
        _type: resolve_type(&declared_type),
        description: attrs
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        default: attrs.get("default").cloned(),
    }
}

fn insert_definition(variables: &mut VariableMap, name: &str, definition: &Value) {
    match definition {
        Value::Object(attrs) => {
            let declaration = to_declaration(name, attrs);
            debug!("Parsing variable block {:?} as {:?}", attrs, declaration);
            if variables.contains_key(name) {
                debug!("Variable {} declared again, keeping the latest declaration", name);
            }
            // IndexMap::insert keeps the original position of an existing key
            variables.insert(name.to_string(), declaration);
        }
        // Repeated labels can come back as a list of bodies
        Value::Array(bodies) => {
            for body in bodies {
                insert_definition(variables, name, body);
            }
        }
        other => warn!("Skipping variable {} with unexpected definition {}", name, other),
    }
}

/// Normalizes a raw parsed tree into name → declaration, in first-seen order.
/// A tree without any `variable` section yields an empty map.
pub fn extract_variables(tree: &Value) -> VariableMap {
    let mut variables = VariableMap::new();

    for block in top_level_blocks(tree) {
        let section = match block.get("variable").and_then(VariableSection::from_value) {
            Some(section) => section,
            None => continue,
        };
        for (name, definition) in section.definitions() {
            insert_definition(&mut variables, name, definition);
        }
    }

    variables
}
