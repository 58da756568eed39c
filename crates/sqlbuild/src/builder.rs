//! The statement-builder contract.

use crate::buffer::Buffer;
use crate::dialect::Dialect;
use crate::error::BuildResult;

/// Anything that can render itself into a [`Buffer`] under a [`Dialect`].
///
/// Implemented by whole statements and by clause fragments alike, so
/// fragments nest freely. Failures from nested fragments propagate to the
/// caller unchanged; text written before the failure is not rolled back.
///
/// `build` only reads `self`, so a finished statement may be rendered from
/// several threads at once as long as each call site owns its buffer.
pub trait Build: Send + Sync {
    /// Render this fragment, appending text and parameter values to `buf`.
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()>;
}

/// An owned fragment, the uniform type statements store their clauses as.
pub type BoxedBuilder = Box<dyn Build>;

/// Adapter letting a closure serve as a fragment.
///
/// ```
/// use sqlbuild::{Buffer, Build, BuildFn, Dialect, Postgres, SqlBuffer};
///
/// let frag = BuildFn(|_: &dyn Dialect, buf: &mut dyn Buffer| {
///     buf.write_sql("deleted_at IS NULL");
///     Ok(())
/// });
/// let mut buf = SqlBuffer::new();
/// frag.build(&Postgres, &mut buf).unwrap();
/// assert_eq!(buf.sql(), "deleted_at IS NULL");
/// ```
pub struct BuildFn<F>(pub F);

impl<F> Build for BuildFn<F>
where
    F: Fn(&dyn Dialect, &mut dyn Buffer) -> BuildResult<()> + Send + Sync,
{
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> BuildResult<()> {
        (self.0)(dialect, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SqlBuffer;
    use crate::dialect::Postgres;
    use crate::error::BuildError;

    #[test]
    fn closure_fragment_renders() {
        let frag = BuildFn(|d: &dyn Dialect, buf: &mut dyn Buffer| {
            buf.write_sql(&d.quote_ident("users"));
            Ok(())
        });
        let mut buf = SqlBuffer::new();
        frag.build(&Postgres, &mut buf).unwrap();
        assert_eq!(buf.sql(), r#""users""#);
    }

    #[test]
    fn closure_fragment_errors_pass_through() {
        let frag = BuildFn(|_: &dyn Dialect, _: &mut dyn Buffer| {
            Err(BuildError::invalid_fragment("nope"))
        });
        let mut buf = SqlBuffer::new();
        let err = frag.build(&Postgres, &mut buf).unwrap_err();
        assert_eq!(err, BuildError::invalid_fragment("nope"));
    }

    #[test]
    fn boxed_builders_render_through_deref() {
        let boxed: BoxedBuilder = Box::new(BuildFn(|_: &dyn Dialect, buf: &mut dyn Buffer| {
            buf.write_sql("1=1");
            Ok(())
        }));
        let mut buf = SqlBuffer::new();
        boxed.build(&Postgres, &mut buf).unwrap();
        assert_eq!(buf.sql(), "1=1");
    }
}
