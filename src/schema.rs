//! Native column types for codec-backed columns

use std::collections::BTreeMap;

use tracing::debug;

use crate::codec::ColumnCodec;

/// Registry mapping codec-backed columns to their native column types.
///
/// The mapping layer cannot derive the native type a codec needs from the
/// Rust field type alone, so columns are registered explicitly and the
/// schema-provisioning step consults the registry when emitting DDL for
/// tables that carry codec-typed fields.
///
/// # Example
///
/// ```
/// use geomval::{CodecRegistry, Point};
///
/// let mut registry = CodecRegistry::new();
/// registry.register::<Point>("location");
///
/// assert_eq!(registry.column_type("location"), Some("geometry"));
/// assert_eq!(
///     registry.column_ddl("location").as_deref(),
///     Some("`location` geometry")
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodecRegistry {
    columns: BTreeMap<String, &'static str>,
}

impl CodecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column as stored through codec `C`.
    ///
    /// Re-registering a column overwrites the previous entry.
    pub fn register<C: ColumnCodec>(&mut self, column: &str) {
        debug!(column, column_type = C::column_type(), "registering codec column");
        self.columns.insert(column.to_string(), C::column_type());
    }

    /// Native column type for a registered column.
    pub fn column_type(&self, column: &str) -> Option<&'static str> {
        self.columns.get(column).copied()
    }

    /// Backtick-quoted DDL fragment for a registered column.
    pub fn column_ddl(&self, column: &str) -> Option<String> {
        self.column_type(column)
            .map(|ty| format!("`{}` {}", column, ty))
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the registry has no registrations.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate registered columns and their native types, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.columns.iter().map(|(column, ty)| (column.as_str(), *ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn test_register_and_look_up() {
        let mut registry = CodecRegistry::new();
        assert!(registry.is_empty());

        registry.register::<Point>("location");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.column_type("location"), Some("geometry"));
        assert_eq!(registry.column_type("missing"), None);
    }

    #[test]
    fn test_optional_columns_share_the_inner_type() {
        let mut registry = CodecRegistry::new();
        registry.register::<Option<Point>>("home");
        assert_eq!(registry.column_type("home"), Some("geometry"));
    }

    #[test]
    fn test_ddl_fragment() {
        let mut registry = CodecRegistry::new();
        registry.register::<Point>("location");
        assert_eq!(
            registry.column_ddl("location").as_deref(),
            Some("`location` geometry")
        );
        assert_eq!(registry.column_ddl("missing"), None);
    }

    #[test]
    fn test_iteration_is_ordered_by_column() {
        let mut registry = CodecRegistry::new();
        registry.register::<Point>("work");
        registry.register::<Point>("home");
        let columns: Vec<_> = registry.iter().collect();
        assert_eq!(columns, vec![("home", "geometry"), ("work", "geometry")]);
    }
}
