use enum_as_inner::EnumAsInner;
use num::{BigInt, ToPrimitive};

use crate::Successor;

/// A dynamically-typed element of the sequence being grouped.
///
/// `Int` and `BigInt` are two representations of one logical integer kind:
/// equality compares them numerically across representations, and the
/// `From<BigInt>` constructor normalizes values that fit `i64` down to `Int`.
/// The remaining variants are distinct kinds; `Bool`, `Double` and `Str`
/// have no successor and therefore no grouping strategy.
#[derive(Debug, Clone, EnumAsInner)]
pub enum Value {
    Int(i64),
    BigInt(BigInt),
    #[cfg(feature = "date")]
    Date(chrono::NaiveDate),
    Char(char),
    Bool(bool),
    Double(f64),
    Str(String),
}

impl Value {
    /// The name of this value's logical kind, as used in error messages and
    /// the homogeneity check. `Int` and `BigInt` share one kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::BigInt(_) => "integer",
            #[cfg(feature = "date")]
            Value::Date(_) => "date",
            Value::Char(_) => "char",
            Value::Bool(_) => "bool",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
        }
    }
}

impl Successor for Value {
    /// `None` for kinds without a successor, and at the calendar maximum for
    /// dates. An `Int` at `i64::MAX` promotes to `BigInt` rather than
    /// overflowing.
    fn successor(&self) -> Option<Value> {
        match self {
            Value::Int(v) => Some(match v.checked_add(1) {
                Some(next) => Value::Int(next),
                None => Value::BigInt(BigInt::from(*v) + 1u32),
            }),
            Value::BigInt(v) => Some(Value::from(v + 1u32)),
            #[cfg(feature = "date")]
            Value::Date(d) => d.successor().map(Value::Date),
            Value::Char(c) => c.successor().map(Value::Char),
            Value::Bool(_) | Value::Double(_) | Value::Str(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Int(a), Value::BigInt(b)) | (Value::BigInt(b), Value::Int(a)) => {
                b.to_i64().is_some_and(|b| b == *a)
            }
            #[cfg(feature = "date")]
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        match value.to_i64() {
            Some(v) => Value::Int(v),
            None => Value::BigInt(value),
        }
    }
}

#[cfg(feature = "date")]
impl From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}
