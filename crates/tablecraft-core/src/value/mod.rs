
use crate::error::Error;
use derive_more::{Deref, IntoIterator};

///
/// Value
///
/// Storage-level value bound to a placeholder or read from a row.
/// Mirrors the SQLite storage classes.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

///
/// ToValue
///

pub trait ToValue {
    fn to_value(&self) -> Value;
}

///
/// FromValue
///
/// Decoding is strict except for two widenings: integers read as floats,
/// and any integer read as `bool` (non-zero is true).
///

pub trait FromValue: Sized {
    fn from_value(value: &Value, index: usize) -> Result<Self, Error>;
}

const fn mismatch(index: usize, expected: &'static str, found: &Value) -> Error {
    Error::Decode {
        index,
        expected,
        found: found.type_name(),
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
                    match value {
                        Value::Integer(v) => {
                            <$ty>::try_from(*v).map_err(|_| mismatch(index, stringify!($ty), value))
                        }
                        other => Err(mismatch(index, stringify!($ty), other)),
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl FromValue for bool {
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Integer(v) => Ok(*v != 0),
            other => Err(mismatch(index, "bool", other)),
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Real(f64::from(*self))
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Real(v) => Ok(*v as Self),
            Value::Integer(v) => Ok(*v as Self),
            other => Err(mismatch(index, "f32", other)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Real(v) => Ok(*v),
            Value::Integer(v) => Ok(*v as Self),
            other => Err(mismatch(index, "f64", other)),
        }
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            other => Err(mismatch(index, "text", other)),
        }
    }
}

impl ToValue for [u8] {
    fn to_value(&self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Blob(v) => Ok(v.clone()),
            other => Err(mismatch(index, "blob", other)),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value, index: usize) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other, index).map(Some),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

///
/// Row
///
/// One result row; values are in the table's column declaration order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Row(Vec<Value>);

impl Row {
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Decode the value at `index`.
    pub fn get<T: FromValue>(&self, index: usize) -> Result<T, Error> {
        let value = self.0.get(index).ok_or(Error::MissingColumn(index))?;

        T::from_value(value, index)
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
