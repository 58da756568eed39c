//! Parameter storage using Arc for clone-friendly statements.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A bound parameter value.
///
/// Wraps the value in an `Arc` so fragments holding parameters stay cheap to
/// clone. Any `ToSql` value qualifies, including chrono, uuid, and JSON
/// types when the corresponding tokio-postgres features are enabled.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Wrap a value as a bound parameter.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        // Arc<dyn ToSql + Send + Sync> -> &(dyn ToSql + Sync)
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}

/// The ordered parameter values collected while rendering a statement.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a value and return its 1-based position.
    pub fn push<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> usize {
        self.params.push(Param::new(value));
        self.params.len()
    }

    /// Add a pre-wrapped parameter and return its 1-based position.
    pub fn push_param(&mut self, param: Param) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Extend this list with another list's parameters.
    pub fn extend(&mut self, other: &ParamList) {
        self.params.extend(other.params.iter().cloned());
    }

    /// Clear all parameters.
    pub fn clear(&mut self) {
        self.params.clear();
    }
}

/// Build a `Vec<Param>` from heterogeneous values.
///
/// ```
/// use sqlbuild::{params, Param};
///
/// let values = params![42i64, "alice", true];
/// assert_eq!(values.len(), 3);
///
/// let none: Vec<Param> = params![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! params {
    () => { Vec::<$crate::Param>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Param::new($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_position() {
        let mut list = ParamList::new();
        assert_eq!(list.push(1i64), 1);
        assert_eq!(list.push("two"), 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_refs().len(), 2);
    }

    #[test]
    fn extend_preserves_order() {
        let mut a = ParamList::new();
        a.push(1i32);
        let mut b = ParamList::new();
        b.push(2i32);
        b.push(3i32);
        a.extend(&b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = ParamList::new();
        list.push("x");
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn params_macro_mixed_types() {
        let values = crate::params![5i64, "name", false];
        assert_eq!(values.len(), 3);
    }
}
