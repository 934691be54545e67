//! Untyped values, classified into ranges by shape.

use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// Untyped value of any kind.
///
/// Ranges are not tagged; a list is a range if it has the right shape (see
/// [`crate::shape`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision floating-point number.
    Number(f64),
    /// Boolean.
    Bool(bool),
    /// Sequence of Unicode characters.
    String(String),
    /// No value.
    Null,
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Mapping from string keys to values.
    Object(BTreeMap<String, Value>),
}

/// Type of a [`Value`], ignoring its contents other than list length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Type {
    /// Number.
    Number,
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Null.
    Null,
    /// List of a specific length.
    List(usize),
    /// Object.
    Object,
}
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Bool => write!(f, "boolean"),
            Self::String => write!(f, "string"),
            Self::Null => write!(f, "null"),
            Self::List(len) => write!(f, "list of length {}", len),
            Self::Object => write!(f, "object"),
        }
    }
}

impl Value {
    /// Returns an empty list, which is also the empty range.
    pub fn empty_list() -> Self {
        Self::List(vec![])
    }

    /// Returns the type of the value.
    pub fn ty(&self) -> Type {
        match self {
            Self::Number(_) => Type::Number,
            Self::Bool(_) => Type::Bool,
            Self::String(_) => Type::String,
            Self::Null => Type::Null,
            Self::List(items) => Type::List(items.len()),
            Self::Object(_) => Type::Object,
        }
    }

    /// Returns the number inside if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Null => write!(f, "null"),
            Self::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Self::Object(fields) => write!(
                f,
                "{{{}}}",
                fields
                    .iter()
                    .map(|(k, v)| format!("{:?}: {}", k, v))
                    .join(", "),
            ),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(x: $t) -> Self {
                    Self::Number(x as f64)
                }
            }
        )*
    };
}
impl_from_number!(f64, f32, i64, i32, i16, i8, u32, u16, u8);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(x: Option<T>) -> Self {
        x.map_or(Self::Null, Into::into)
    }
}
impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self::Object(fields)
    }
}
