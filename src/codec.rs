//! The codec contract between in-memory types and native column values

use crate::error::Result;
use crate::expr::SqlExpr;
use crate::value::Value;

/// Conversion contract for types stored through a native column
/// representation the driver cannot map on its own.
///
/// Implementors are registered explicitly with the owning mapping layer
/// (see [`CodecRegistry`](crate::schema::CodecRegistry)). The layer calls
/// [`decode`](Self::decode) synchronously after fetching a raw column value
/// and [`encode`](Self::encode) synchronously before binding a write
/// parameter. Both calls are pure, never block, and are safe to issue from
/// any number of threads.
///
/// # Example
///
/// ```
/// use geomval::{ColumnCodec, Point, Value};
///
/// let fetched = Point::decode(Value::Text("POINT(33 44)".into()))?;
/// assert_eq!(fetched, Point::new(33, 44));
///
/// let expr = fetched.encode();
/// assert_eq!(expr.fragment(), "ST_PointFromText(?)");
/// # Ok::<(), geomval::Error>(())
/// ```
pub trait ColumnCodec: Sized {
    /// Convert a fetched column value into this type.
    ///
    /// Fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch) when
    /// the value is not the representation this codec reads, and with
    /// [`Error::Decode`](crate::Error::Decode) when it has the right shape
    /// but does not match the expected grammar. No partial result is
    /// produced on failure.
    fn decode(value: Value) -> Result<Self>;

    /// Produce the deferred native construction expression for this value.
    ///
    /// The expression is spliced into the surrounding statement by the
    /// owning query layer; this call performs no I/O itself.
    fn encode(&self) -> SqlExpr;

    /// Native column type provisioned for columns of this type.
    fn column_type() -> &'static str;
}

// Implement for Option<C>: a nullable codec-backed column
impl<C: ColumnCodec> ColumnCodec for Option<C> {
    fn decode(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(C::decode(other)?)),
        }
    }

    fn encode(&self) -> SqlExpr {
        match self {
            Some(v) => v.encode(),
            None => SqlExpr::new("?").bind(Value::Null),
        }
    }

    fn column_type() -> &'static str {
        C::column_type()
    }
}
