use std::fmt;

use indexmap::IndexMap;

/// Normalized variables keyed by name, in first-seen order.
pub type VariableMap = IndexMap<String, VariableDeclaration>;

/// Type tags understood by the stack execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Str,
    Bool,
    List,
    Dict,
}

impl TargetType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            TargetType::Str => "str",
            TargetType::Bool => "bool",
            TargetType::List => "list",
            TargetType::Dict => "dict",
        }
    }

    pub fn is_string(&self) -> bool {
        *self == TargetType::Str
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub _type: TargetType,
    pub description: String,
    /// `None` when the declaration has no `default` attribute at all.
    /// An explicit `default = null` is `Some(Value::Null)`.
    pub default: Option<serde_json::Value>,
}

impl VariableDeclaration {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn declaration(default: Option<serde_json::Value>) -> VariableDeclaration {
        VariableDeclaration {
            name: "instance_count".to_string(),
            _type: TargetType::Str,
            description: "".to_string(),
            default,
        }
    }

    #[test]
    fn test_required_only_without_default() {
        assert_eq!(declaration(None).is_required(), true);
        assert_eq!(declaration(Some(serde_json::json!(0))).is_required(), false);
        assert_eq!(declaration(Some(serde_json::json!(""))).is_required(), false);
        assert_eq!(
            declaration(Some(serde_json::Value::Null)).is_required(),
            false
        );
    }

    #[test]
    fn test_target_type_tags() {
        assert_eq!(TargetType::Dict.to_string(), "dict");
        assert_eq!(TargetType::List.as_tag(), "list");
        assert_eq!(TargetType::Bool.is_string(), false);
        assert_eq!(TargetType::Str.is_string(), true);
    }
}
