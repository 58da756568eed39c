//! DELETE construction example for sqlbuild
//!
//! Run with: cargo run --example build_delete -p sqlbuild
//!
//! Builds statements and prints the rendered SQL; nothing here connects to
//! a database.

use sqlbuild::{delete_by_sql, delete_from, params, BuildError, Mysql, Or, Postgres, expr};

fn main() -> Result<(), BuildError> {
    // Plain delete
    let stmt = delete_from("sessions");
    let (sql, values) = stmt.to_sql(&Postgres)?;
    println!("{sql}  -- {} params", values.len());

    // Conditions with bound values
    let stmt = delete_from("users")
        .where_cond(("last_login < ?", params!["2024-01-01"]))
        .where_cond(Or::new([
            expr("banned = ?", params![true]),
            expr("deleted_at IS NOT NULL", vec![]),
        ]));
    let (sql, values) = stmt.to_sql(&Postgres)?;
    println!("{sql}  -- {} params", values.len());

    // Joins force the target table to be named explicitly
    let stmt = delete_from("users")
        .join("orders", "users.id = orders.user_id")
        .where_cond(("orders.total = ?", params![0i64]));
    let (sql, values) = stmt.to_sql(&Mysql)?;
    println!("{sql}  -- {} params", values.len());

    // Raw escape hatch
    let stmt = delete_by_sql("DELETE FROM audit_log WHERE id = ANY(?)", params![vec![1i64, 2, 3]]);
    let (sql, values) = stmt.to_sql(&Postgres)?;
    println!("{sql}  -- {} params", values.len());

    Ok(())
}
