//! geomval - Spatial point values for MySQL data-access layers
//!
//! MySQL stores spatial columns in its own native geometry representation.
//! Reading one back hands the application a textual literal like
//! `POINT(33 44)`; writing one requires a native construction call such as
//! `ST_PointFromText('POINT(33 44)')`. This crate provides the conversion
//! contract between in-memory point values and that native representation.
//!
//! # Features
//!
//! - **Explicit codec trait**: [`ColumnCodec`] names the decode/encode
//!   contract instead of relying on implicit driver conversions
//! - **Deferred expressions**: [`SqlExpr`] describes the native construction
//!   call for the query layer to execute; the codec performs no I/O
//! - **Driver boundary**: [`mysql`] converts between codec values and
//!   `mysql_async` wire values
//! - **Schema registry**: [`CodecRegistry`] tells the provisioning step
//!   which native column type each codec-backed column needs
//!
//! # Example
//!
//! ```
//! use geomval::{CodecRegistry, ColumnCodec, Point, Value};
//!
//! // Schema provisioning: the `location` column is codec-backed.
//! let mut registry = CodecRegistry::new();
//! registry.register::<Option<Point>>("location");
//! assert_eq!(registry.column_type("location"), Some("geometry"));
//!
//! // Write path: bind a deferred construction expression.
//! let expr = Point::new(33, 44).encode();
//! assert_eq!(expr.fragment(), "ST_PointFromText(?)");
//!
//! // Read path: decode the literal the engine hands back.
//! let fetched = Point::decode(Value::Text("POINT(33 44)".into()))?;
//! assert_eq!(fetched, Point::new(33, 44));
//! # Ok::<(), geomval::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod expr;
pub mod mysql;
pub mod point;
pub mod schema;
pub mod value;

mod wkt;

// Re-export main types
pub use codec::ColumnCodec;
pub use error::{Error, Result};
pub use expr::SqlExpr;
pub use point::Point;
pub use schema::CodecRegistry;
pub use value::Value;
