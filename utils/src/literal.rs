use serde_json::Value;

/// Renders a value the way it reads as a Python literal in the stack script.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => single_quote(s),
        Value::Array(items) => format!(
            "[{}]",
            items
                .iter()
                .map(stringify_value)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}: {}", single_quote(k), stringify_value(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Double quoted string literal.
pub fn quote_str(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Null and the empty string both stand for "no value" in generated defaults.
pub fn is_null_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify_value(&json!(true)), "True");
        assert_eq!(stringify_value(&json!(false)), "False");
        assert_eq!(stringify_value(&json!(0)), "0");
        assert_eq!(stringify_value(&json!(1.5)), "1.5");
        assert_eq!(stringify_value(&json!(null)), "None");
        assert_eq!(stringify_value(&json!("it's")), "'it\\'s'");
    }

    #[test]
    fn test_stringify_collections_keep_order() {
        let value = json!({"zone": "b", "azs": ["a", 2], "enabled": false});
        assert_eq!(
            stringify_value(&value),
            "{'zone': 'b', 'azs': ['a', 2], 'enabled': False}"
        );
    }

    #[test]
    fn test_quote_str_escapes() {
        assert_eq!(quote_str("plain"), "\"plain\"");
        assert_eq!(quote_str("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_null_like() {
        assert!(is_null_like(&json!(null)));
        assert!(is_null_like(&json!("")));
        assert!(!is_null_like(&json!(0)));
        assert!(!is_null_like(&json!(false)));
        assert!(!is_null_like(&json!([])));
    }
}
