//! Conversions between codec values and `mysql_async` wire values

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use mysql_async::{Params, Value as MySqlValue};

use crate::error::{Error, Result};
use crate::expr::SqlExpr;
use crate::value::Value;

/// Convert a fetched `mysql_async` value to a codec [`Value`].
///
/// Bytes that are valid UTF-8 become [`Value::Text`]; anything else stays
/// binary. Packed temporal values are validated while converting.
pub fn from_mysql_value(value: MySqlValue) -> Result<Value> {
    match value {
        MySqlValue::NULL => Ok(Value::Null),
        MySqlValue::Bytes(v) => match String::from_utf8(v) {
            Ok(s) => Ok(Value::Text(s)),
            Err(e) => Ok(Value::Bytes(e.into_bytes())),
        },
        MySqlValue::Int(v) => Ok(Value::Int(v)),
        MySqlValue::UInt(v) => Ok(Value::UInt(v)),
        MySqlValue::Float(v) => Ok(Value::Float(v)),
        MySqlValue::Double(v) => Ok(Value::Double(v)),
        MySqlValue::Date(year, month, day, hour, min, sec, micro) => {
            let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                .ok_or_else(|| Error::TypeMismatch {
                    expected: "date",
                    actual: format!("{}-{}-{}", year, month, day),
                })?;
            if hour == 0 && min == 0 && sec == 0 && micro == 0 {
                Ok(Value::Date(date))
            } else {
                let time =
                    NaiveTime::from_hms_micro_opt(hour as u32, min as u32, sec as u32, micro)
                        .ok_or_else(|| Error::TypeMismatch {
                            expected: "time",
                            actual: format!("{}:{}:{}.{}", hour, min, sec, micro),
                        })?;
                Ok(Value::DateTime(NaiveDateTime::new(date, time)))
            }
        }
        MySqlValue::Time(is_neg, days, hours, mins, secs, micro) => {
            // NaiveTime only supports 00:00:00 to 23:59:59
            if is_neg || days > 0 || hours >= 24 {
                return Err(Error::TypeMismatch {
                    expected: "time (00:00:00 to 23:59:59)",
                    actual: format!(
                        "{}{}:{:02}:{:02}",
                        if is_neg { "-" } else { "" },
                        days * 24 + u32::from(hours),
                        mins,
                        secs
                    ),
                });
            }
            let time = NaiveTime::from_hms_micro_opt(hours as u32, mins as u32, secs as u32, micro)
                .ok_or_else(|| Error::TypeMismatch {
                    expected: "time",
                    actual: format!("{}:{}:{}.{}", hours, mins, secs, micro),
                })?;
            Ok(Value::Time(time))
        }
    }
}

/// Convert a codec [`Value`] to a `mysql_async` value for binding.
pub fn to_mysql_value(value: &Value) -> MySqlValue {
    match value {
        Value::Null => MySqlValue::NULL,
        Value::Int(v) => MySqlValue::from(*v),
        Value::UInt(v) => MySqlValue::from(*v),
        Value::Float(v) => MySqlValue::from(*v),
        Value::Double(v) => MySqlValue::from(*v),
        Value::Text(v) => MySqlValue::from(v.as_str()),
        Value::Bytes(v) => MySqlValue::from(v.as_slice()),
        Value::Date(v) => {
            MySqlValue::Date(v.year() as u16, v.month() as u8, v.day() as u8, 0, 0, 0, 0)
        }
        Value::DateTime(v) => MySqlValue::Date(
            v.year() as u16,
            v.month() as u8,
            v.day() as u8,
            v.hour() as u8,
            v.minute() as u8,
            v.second() as u8,
            v.and_utc().timestamp_subsec_micros(),
        ),
        Value::Time(v) => MySqlValue::Time(
            false,
            0,
            v.hour() as u8,
            v.minute() as u8,
            v.second() as u8,
            v.nanosecond() / 1000,
        ),
    }
}

/// Positional driver parameters for an encoded expression.
///
/// The caller splices [`SqlExpr::fragment`] into its statement and binds
/// these in the same order.
pub fn expr_params(expr: &SqlExpr) -> Params {
    Params::Positional(expr.params().iter().map(to_mysql_value).collect())
}
