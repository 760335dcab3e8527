/*!
# JSON Value

Defines the value tree produced by the parser: a recursively-owned tagged
union over the six JSON shapes accepted by this grammar. Object members keep
their insertion order, and a duplicate key overwrites the earlier entry.
*/
use indexmap::IndexMap;
use std::fmt;

/// Primary JSON value definition
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Represents a JSON null value
    Null,
    /// Represents a JSON Boolean value
    Bool(bool),
    /// Represents a JSON integer value
    Int(i64),
    /// Represents a JSON string value
    Str(String),
    /// Represents a JSON array containing values of any shape
    Array(Vec<Value>),
    /// Represents a JSON object with string keys, insertion order preserved
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Compute the depth of the JSON document.
    pub fn depth(&self) -> usize {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Str(_) => 1,
            Value::Array(arr) => {
                let inner_depth = arr.iter().map(Value::depth).max().unwrap_or(0);
                1 + inner_depth
            }
            Value::Object(map) => {
                let inner_depth =
                    map.values().map(Value::depth).max().unwrap_or(0);
                1 + inner_depth
            }
        }
    }

    /// A short name for the shape of this value, used in reports and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Write a string with the two characters the lexer's shallow decoding can
/// produce unescaped (`"` and `\`) re-escaped, so the output lexes back to
/// the same token.
fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            _ => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for Value {
    /// Compact re-encoding in the accepted grammar. Re-parsing the output
    /// yields a structurally-equal tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write_escaped(f, s),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{val}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
