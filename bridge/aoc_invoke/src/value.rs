//! Dynamically typed values passed to and returned from exports.
//!
//! Heap variants are `Arc`-backed so cloning a value, or a list of them, never
//! copies the payload. Values cross task boundaries freely.

use std::fmt;
use std::sync::Arc;

/// Argument or result of an exported function.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<[Value]>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl Into<Arc<[Value]>>) -> Self {
        Value::List(items.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => {
                #[expect(clippy::cast_precision_loss, reason = "Int to float widening")]
                let widened = *n as f64;
                Some(widened)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(&**items),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Name of the value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Parse a command-line style literal.
    ///
    /// `nil`, `true`, `false`, integers and floats are recognised; anything
    /// else becomes a string. Surrounding double quotes force a string.
    pub fn parse_literal(text: &str) -> Self {
        if let Some(inner) = text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Value::string(inner);
        }
        match text {
            "nil" => Value::Nil,
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => {
                if let Ok(n) = text.parse::<i64>() {
                    Value::Int(n)
                } else if let Ok(f) = text.parse::<f64>() {
                    Value::Float(f)
                } else {
                    Value::string(text)
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Value::Str(s) => write!(f, "{s:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Nil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_literal() {
        assert_eq!(Value::parse_literal("nil"), Value::Nil);
        assert_eq!(Value::parse_literal("true"), Value::Bool(true));
        assert_eq!(Value::parse_literal("-42"), Value::Int(-42));
        assert_eq!(Value::parse_literal("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse_literal("abc"), Value::string("abc"));
        assert_eq!(Value::parse_literal("\"42\""), Value::string("42"));
    }

    #[test]
    fn test_display() {
        let list = Value::from(vec![Value::Int(1), Value::from("a"), Value::Float(1.0)]);
        assert_eq!(list.to_string(), "[1, \"a\", 1.0]");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), Some(3.0));
        assert_eq!(Value::from("x").as_int(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(vec![Value::Nil]).as_list().map(<[Value]>::len), Some(1));
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert!(Value::default().is_nil());
    }

    #[test]
    fn test_clone_shares_payload() {
        let original = Value::from(vec![Value::Int(1), Value::Int(2)]);
        let copy = original.clone();
        let (Value::List(a), Value::List(b)) = (&original, &copy) else {
            panic!("expected lists");
        };
        assert!(Arc::ptr_eq(a, b));
    }
}
