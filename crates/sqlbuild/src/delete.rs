//! DELETE statement builder.

use crate::buffer::{Buffer, SqlBuffer};
use crate::builder::{BoxedBuilder, Build};
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::expr::{build_joined, Expr, IntoCond};
use crate::join::{IntoTable, Join};
use crate::param::{Param, ParamList};

/// Builder for `DELETE ...` statements.
///
/// Construction is single-owner and chained; once no further mutation
/// occurs, rendering via [`Build::build`] only reads the statement, so the
/// same statement may be rendered concurrently against independent buffers.
pub struct DeleteStmt {
    raw: Option<Expr>,
    table: String,
    where_cond: Vec<BoxedBuilder>,
    join_table: Vec<BoxedBuilder>,
}

/// Create a DELETE statement for the given table.
///
/// ```
/// use sqlbuild::{delete_from, params, Build, Postgres, SqlBuffer};
///
/// let stmt = delete_from("users").where_cond(("id = ?", params![5i64]));
/// let mut buf = SqlBuffer::new();
/// stmt.build(&Postgres, &mut buf).unwrap();
/// assert_eq!(buf.sql(), r#"DELETE FROM "users" WHERE id = ?"#);
/// ```
pub fn delete_from(table: impl Into<String>) -> DeleteStmt {
    DeleteStmt {
        raw: None,
        table: table.into(),
        where_cond: Vec::new(),
        join_table: Vec::new(),
    }
}

/// Create a DELETE statement from a raw query.
///
/// The raw text and values render exactly as given; structured fields on
/// the statement are ignored while the raw query is non-empty.
pub fn delete_by_sql(query: impl Into<String>, values: Vec<Param>) -> DeleteStmt {
    DeleteStmt {
        raw: Some(Expr::new(query, values)),
        table: String::new(),
        where_cond: Vec::new(),
        join_table: Vec::new(),
    }
}

impl DeleteStmt {
    /// Add a where condition, ANDed with the ones already present.
    ///
    /// Accepts literal text, literal text with positional values, or any
    /// prebuilt fragment; see [`IntoCond`].
    pub fn where_cond(mut self, cond: impl IntoCond) -> Self {
        self.where_cond.push(cond.into_cond());
        self
    }

    /// Join a table on a condition.
    pub fn join(mut self, table: impl IntoTable, on: impl IntoCond) -> Self {
        self.join_table.push(Box::new(Join::inner(table, on)));
        self
    }

    /// Left-join a table on a condition.
    pub fn left_join(mut self, table: impl IntoTable, on: impl IntoCond) -> Self {
        self.join_table.push(Box::new(Join::left(table, on)));
        self
    }

    /// Render into a fresh buffer, returning the SQL text and parameters.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<(String, ParamList)> {
        let mut buf = SqlBuffer::new();
        self.build(dialect, &mut buf)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = buf.sql(), params = buf.params().len(), "built statement");
        Ok(buf.into_parts())
    }
}

impl Build for DeleteStmt {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        if let Some(raw) = self.raw.as_ref().filter(|r| !r.is_empty()) {
            return raw.build(dialect, buf);
        }

        if self.table.is_empty() {
            return Err(BuildError::TableNotSpecified);
        }

        buf.write_sql("DELETE ");
        // With joins present the target table must be named explicitly to
        // disambiguate it from the joined tables.
        if !self.join_table.is_empty() {
            buf.write_sql(&dialect.quote_ident(&self.table));
            buf.write_sql(" ");
        }
        buf.write_sql("FROM ");
        buf.write_sql(&dialect.quote_ident(&self.table));

        for join in &self.join_table {
            join.build(dialect, buf)?;
        }

        if !self.where_cond.is_empty() {
            buf.write_sql(" WHERE ");
            build_joined(&self.where_cond, " AND ", dialect, buf)?;
        }
        Ok(())
    }
}
