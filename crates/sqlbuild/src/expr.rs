//! Condition fragments and combinators.
//!
//! [`Expr`] is the leaf: literal SQL text carrying its positional values.
//! [`And`] and [`Or`] combine fragments in insertion order; order matters
//! for the parameter sequence, not for truth value.

use crate::buffer::Buffer;
use crate::builder::{BoxedBuilder, Build, BuildFn};
use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::param::Param;

/// Literal SQL text plus the values bound to its placeholders.
///
/// Rendering writes the text verbatim and appends the values in order; the
/// placeholder characters inside the text are not touched, so the same
/// fragment works under any dialect.
#[derive(Debug, Clone, Default)]
pub struct Expr {
    sql: String,
    values: Vec<Param>,
}

/// Shorthand for [`Expr::new`].
pub fn expr(sql: impl Into<String>, values: Vec<Param>) -> Expr {
    Expr::new(sql, values)
}

impl Expr {
    /// Create a fragment from SQL text and its positional values.
    pub fn new(sql: impl Into<String>, values: Vec<Param>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    /// The SQL text of this fragment.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

impl Build for Expr {
    fn build(&self, _dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        buf.write_sql(&self.sql);
        for value in &self.values {
            buf.write_value(value.clone());
        }
        Ok(())
    }
}

/// Render `conds` joined by `sep`, stopping at the first failure.
///
/// Text written before a failing fragment stays in the buffer.
pub(crate) fn build_joined(
    conds: &[BoxedBuilder],
    sep: &str,
    dialect: &dyn Dialect,
    buf: &mut dyn Buffer,
) -> BuildResult<()> {
    for (i, cond) in conds.iter().enumerate() {
        if i > 0 {
            buf.write_sql(sep);
        }
        cond.build(dialect, buf)?;
    }
    Ok(())
}

/// Conditions joined by ` AND `, in insertion order.
///
/// Must hold at least one condition when built; callers combining an
/// unknown set check for emptiness first, as the statement builders do.
pub struct And(Vec<BoxedBuilder>);

impl And {
    /// Combine conditions with `AND`.
    pub fn new<I>(conds: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCond,
    {
        And(conds.into_iter().map(IntoCond::into_cond).collect())
    }

    /// Append another condition.
    pub fn push(&mut self, cond: impl IntoCond) {
        self.0.push(cond.into_cond());
    }
}

impl Build for And {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        build_joined(&self.0, " AND ", dialect, buf)
    }
}

/// Conditions joined by ` OR `, in insertion order.
pub struct Or(Vec<BoxedBuilder>);

impl Or {
    /// Combine conditions with `OR`.
    pub fn new<I>(conds: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCond,
    {
        Or(conds.into_iter().map(IntoCond::into_cond).collect())
    }

    /// Append another condition.
    pub fn push(&mut self, cond: impl IntoCond) {
        self.0.push(cond.into_cond());
    }
}

impl Build for Or {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        build_joined(&self.0, " OR ", dialect, buf)
    }
}

/// Convert an input into an owned condition fragment.
///
/// This is the single acceptance point for the places a condition is
/// expected: literal text, literal text with values, or a prebuilt
/// fragment. Resolution happens once, at the call site.
pub trait IntoCond {
    fn into_cond(self) -> BoxedBuilder;
}

impl IntoCond for &str {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(Expr::new(self, Vec::new()))
    }
}

impl IntoCond for String {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(Expr::new(self, Vec::new()))
    }
}

/// Literal text with positional values: `("id = ?", params![5])`.
impl<S: Into<String>> IntoCond for (S, Vec<Param>) {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(Expr::new(self.0, self.1))
    }
}

impl IntoCond for Expr {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(self)
    }
}

impl IntoCond for And {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(self)
    }
}

impl IntoCond for Or {
    fn into_cond(self) -> BoxedBuilder {
        Box::new(self)
    }
}

impl IntoCond for BoxedBuilder {
    fn into_cond(self) -> BoxedBuilder {
        self
    }
}

impl<F> IntoCond for BuildFn<F>
where
    F: Fn(&dyn Dialect, &mut dyn Buffer) -> BuildResult<()> + Send + Sync + 'static,
{
    fn into_cond(self) -> BoxedBuilder {
        Box::new(self)
    }
}
