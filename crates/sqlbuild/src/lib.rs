//! # sqlbuild
//!
//! Dialect-aware SQL statement construction with bound parameters.
//!
//! ## Features
//!
//! - **Statements as data**: build a statement once, render it anywhere via
//!   the [`Build`] trait — nothing here touches a database
//! - **Parameters stay separate**: rendered text goes to a [`Buffer`]
//!   alongside its [`Param`] values, in bind order, ready for tokio-postgres
//! - **Dialect-correct quoting**: identifier quoting and placeholder syntax
//!   come from the [`Dialect`] passed at render time
//! - **Composable fragments**: conditions, joins, and whole statements all
//!   implement [`Build`], so fragments nest
//! - **Raw escape hatch**: [`delete_by_sql`] renders a literal query
//!   verbatim when the structured builder cannot express it
//!
//! ## Building a DELETE
//!
//! ```
//! use sqlbuild::{delete_from, params, Build, Postgres, SqlBuffer};
//!
//! let stmt = delete_from("users")
//!     .join("orders", "users.id = orders.user_id")
//!     .where_cond(("orders.total = ?", params![0i64]));
//!
//! let mut buf = SqlBuffer::new();
//! stmt.build(&Postgres, &mut buf).unwrap();
//! assert_eq!(
//!     buf.sql(),
//!     r#"DELETE "users" FROM "users" JOIN "orders" ON users.id = orders.user_id WHERE orders.total = ?"#
//! );
//! assert_eq!(buf.params().len(), 1);
//! ```
//!
//! Rendering is not transactional: when a nested fragment fails, text
//! already written stays in the buffer. Callers needing atomicity discard
//! or [`clear`](SqlBuffer::clear) the buffer on error.

pub mod buffer;
pub mod builder;
pub mod delete;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod join;
pub mod param;

pub use buffer::{Buffer, SqlBuffer};
pub use builder::{BoxedBuilder, Build, BuildFn};
pub use delete::{delete_by_sql, delete_from, DeleteStmt};
pub use dialect::{Dialect, Mysql, Postgres, Sqlite};
pub use error::{BuildError, BuildResult};
pub use expr::{expr, And, Expr, IntoCond, Or};
pub use join::{IntoTable, Join};
pub use param::{Param, ParamList};
