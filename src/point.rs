//! 2D integer points stored in MySQL point columns

use std::fmt;

use crate::codec::ColumnCodec;
use crate::error::{Error, Result};
use crate::expr::SqlExpr;
use crate::value::Value;
use crate::wkt;

/// A 2D point with unsigned integer coordinates.
///
/// The textual column representation carries no sign, so the coordinate
/// domain is restricted to non-negative integers; every representable point
/// round-trips exactly through [`encode`](ColumnCodec::encode) and
/// [`decode`](ColumnCodec::decode).
///
/// A point has no persistence identity of its own. It is embedded as a
/// (usually nullable) field of an owning record:
///
/// ```ignore
/// pub struct User {
///     pub id: u64,
///     pub name: String,
///     pub location: Option<Point>,
/// }
/// ```
///
/// # Example
///
/// ```
/// use geomval::{ColumnCodec, Point, Value};
///
/// let p = Point::new(33, 44);
/// let expr = p.encode();
/// assert_eq!(expr.fragment(), "ST_PointFromText(?)");
/// assert_eq!(expr.params(), &[Value::Text("POINT(33 44)".to_string())]);
///
/// let fetched = Point::decode(Value::Text("POINT(33 44)".into()))?;
/// assert_eq!(fetched, p);
/// # Ok::<(), geomval::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl ColumnCodec for Point {
    fn decode(value: Value) -> Result<Self> {
        let text = match value {
            Value::Text(s) => s,
            // Drivers may hand the column bytes through untouched.
            Value::Bytes(b) => String::from_utf8(b).map_err(|e| {
                Error::Decode(format!("point literal is not valid utf-8: {}", e))
            })?,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "point literal text",
                    actual: other.type_name().to_string(),
                })
            }
        };
        let (x, y) = wkt::parse_point(&text)?;
        Ok(Self { x, y })
    }

    fn encode(&self) -> SqlExpr {
        SqlExpr::new("ST_PointFromText(?)").bind(wkt::write_point(self.x, self.y))
    }

    fn column_type() -> &'static str {
        "geometry"
    }
}
