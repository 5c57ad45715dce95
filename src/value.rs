//! Dynamic values for fetched MySQL columns

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A raw column value as handed back by the MySQL driver.
///
/// Codecs consume this at the read boundary and produce it (inside a
/// [`SqlExpr`](crate::expr::SqlExpr)) at the write boundary. The variants
/// mirror what the wire protocol carries for a single column, not the full
/// range of Rust integer widths.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL value
    Null,
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// String/text value
    Text(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// Date value
    Date(NaiveDate),
    /// DateTime/Timestamp value
    DateTime(NaiveDateTime),
    /// Time-of-day value
    Time(NaiveTime),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Time(_) => "time",
        }
    }
}

// Implement From for common types
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

// Implement From for Option<T> where T: Into<Value>
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Text("x".to_string()).type_name(), "text");
        assert_eq!(Value::Bytes(vec![0xff]).type_name(), "bytes");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("POINT(1 2)"), Value::Text("POINT(1 2)".to_string()));
        assert_eq!(Value::from(3_u64), Value::UInt(3));
        assert_eq!(Value::from(vec![1_u8, 2]), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<u64>), Value::Null);
        assert_eq!(Value::from(Some(5_u64)), Value::UInt(5));
        assert!(Value::from(None::<u64>).is_null());
    }
}
