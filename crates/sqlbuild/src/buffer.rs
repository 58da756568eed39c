//! Output sinks for rendered SQL.
//!
//! A [`Buffer`] accumulates query text and bound parameter values in strict
//! call order. Statements only append; nothing in this crate reads a buffer
//! back during rendering.

use crate::param::{Param, ParamList};

/// Append-only sink for query text and parameter values.
pub trait Buffer {
    /// Append a piece of SQL text.
    fn write_sql(&mut self, sql: &str);

    /// Append a bound parameter value.
    fn write_value(&mut self, value: Param);
}

/// Default in-memory buffer: a `String` plus a [`ParamList`].
///
/// Writes are not transactional. When a build fails partway, text written
/// before the failure remains; call [`clear`](SqlBuffer::clear) before
/// reusing the buffer.
#[derive(Debug, Default)]
pub struct SqlBuffer {
    sql: String,
    params: ParamList,
}

impl SqlBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The SQL text accumulated so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The parameter values accumulated so far, in bind order.
    pub fn params(&self) -> &ParamList {
        &self.params
    }

    /// Consume the buffer, returning the SQL text and parameters.
    pub fn into_parts(self) -> (String, ParamList) {
        (self.sql, self.params)
    }

    /// Discard all accumulated text and parameters.
    pub fn clear(&mut self) {
        self.sql.clear();
        self.params.clear();
    }
}

impl Buffer for SqlBuffer {
    fn write_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    fn write_value(&mut self, value: Param) {
        self.params.push_param(value);
    }
}
