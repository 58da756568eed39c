//! Join clause fragments.

use crate::buffer::Buffer;
use crate::builder::{BoxedBuilder, Build};
use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::expr::IntoCond;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    Inner,
    Left,
}

/// A ` JOIN <table> ON <condition>` fragment.
///
/// Renders with a leading space so a statement can emit joins back-to-back
/// after its table clause.
pub struct Join {
    kind: JoinKind,
    table: BoxedBuilder,
    on: BoxedBuilder,
}

impl Join {
    /// An inner join.
    pub fn inner(table: impl IntoTable, on: impl IntoCond) -> Self {
        Self {
            kind: JoinKind::Inner,
            table: table.into_table(),
            on: on.into_cond(),
        }
    }

    /// A left outer join.
    pub fn left(table: impl IntoTable, on: impl IntoCond) -> Self {
        Self {
            kind: JoinKind::Left,
            table: table.into_table(),
            on: on.into_cond(),
        }
    }
}

impl Build for Join {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        buf.write_sql(" ");
        if self.kind == JoinKind::Left {
            buf.write_sql("LEFT ");
        }
        buf.write_sql("JOIN ");
        self.table.build(dialect, buf)?;
        buf.write_sql(" ON ");
        self.on.build(dialect, buf)
    }
}

/// A table name rendered through the dialect's identifier quoting.
struct TableName(String);

impl Build for TableName {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        buf.write_sql(&dialect.quote_ident(&self.0));
        Ok(())
    }
}

/// Convert an input into an owned table fragment.
///
/// A literal name is quoted through the dialect at build time; a prebuilt
/// fragment (subquery, aliased expression) renders itself.
pub trait IntoTable {
    fn into_table(self) -> BoxedBuilder;
}

impl IntoTable for &str {
    fn into_table(self) -> BoxedBuilder {
        Box::new(TableName(self.to_string()))
    }
}

impl IntoTable for String {
    fn into_table(self) -> BoxedBuilder {
        Box::new(TableName(self))
    }
}

impl IntoTable for BoxedBuilder {
    fn into_table(self) -> BoxedBuilder {
        self
    }
}
