//! End-to-end rendering tests for the DELETE builder public API.

use chrono::NaiveDate;
use sqlbuild::{
    delete_by_sql, delete_from, expr, params, And, Build, BuildError, BuildFn, Mysql, Or,
    Postgres, Sqlite, SqlBuffer,
};
use uuid::Uuid;

#[test]
fn delete_without_conditions_deletes_every_row() {
    let (sql, params) = delete_from("users").to_sql(&Postgres).unwrap();
    assert_eq!(sql, r#"DELETE FROM "users""#);
    assert!(params.is_empty());
}

#[test]
fn missing_table_is_a_hard_failure() {
    let err = delete_from("").to_sql(&Postgres).unwrap_err();
    assert!(err.is_table_not_specified());
}

#[test]
fn where_conditions_concatenate_params_in_order() {
    let stmt = delete_from("events")
        .where_cond(("kind = ?", params!["audit"]))
        .where_cond(("occurred_at < ?", params![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        ]))
        .where_cond(("actor_id = ?", params![Uuid::new_v4()]));

    let (sql, values) = stmt.to_sql(&Postgres).unwrap();
    assert_eq!(
        sql,
        r#"DELETE FROM "events" WHERE kind = ? AND occurred_at < ? AND actor_id = ?"#
    );
    assert_eq!(values.len(), 3);
    assert_eq!(values.as_refs().len(), 3);
}

#[test]
fn combinators_compose_inside_where() {
    let stmt = delete_from("users").where_cond(Or::new([
        expr("banned = ?", params![true]),
        expr("deleted_at IS NOT NULL", vec![]),
    ]));

    let (sql, values) = stmt.to_sql(&Postgres).unwrap();
    assert_eq!(
        sql,
        r#"DELETE FROM "users" WHERE banned = ? OR deleted_at IS NOT NULL"#
    );
    assert_eq!(values.len(), 1);
}

#[test]
fn joins_render_per_dialect() {
    let stmt = || {
        delete_from("users")
            .join("orders", "users.id = orders.user_id")
            .left_join("refunds", "orders.id = refunds.order_id")
    };

    let (pg, _) = stmt().to_sql(&Postgres).unwrap();
    assert_eq!(
        pg,
        r#"DELETE "users" FROM "users" JOIN "orders" ON users.id = orders.user_id LEFT JOIN "refunds" ON orders.id = refunds.order_id"#
    );

    let (my, _) = stmt().to_sql(&Mysql).unwrap();
    assert_eq!(
        my,
        "DELETE `users` FROM `users` JOIN `orders` ON users.id = orders.user_id LEFT JOIN `refunds` ON orders.id = refunds.order_id"
    );

    let (lite, _) = stmt().to_sql(&Sqlite).unwrap();
    assert!(lite.starts_with(r#"DELETE "users" FROM "users" JOIN"#));
}

#[test]
fn raw_override_wins_over_everything() {
    let stmt = delete_by_sql("DELETE FROM x WHERE y=?", params![1i32])
        .where_cond("structured = 'ignored'")
        .join("also_ignored", "a = b");

    let (sql, values) = stmt.to_sql(&Postgres).unwrap();
    assert_eq!(sql, "DELETE FROM x WHERE y=?");
    assert_eq!(values.len(), 1);
}

#[test]
fn statements_render_through_the_fragment_surface() {
    // A whole statement is itself a fragment: render it through the trait
    // object surface another builder would use.
    let inner = delete_from("sessions").where_cond(("user_id = ?", params![3i64]));
    let fragment: &dyn Build = &inner;

    let mut buf = SqlBuffer::new();
    fragment.build(&Postgres, &mut buf).unwrap();
    assert_eq!(buf.sql(), r#"DELETE FROM "sessions" WHERE user_id = ?"#);
}

#[test]
fn finished_statement_renders_from_multiple_threads() {
    let stmt = delete_from("users").where_cond(("id = ?", params![1i64]));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| stmt.to_sql(&Postgres).unwrap().0))
            .collect();
        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(rendered.windows(2).all(|w| w[0] == w[1]));
    });
}

#[test]
fn error_leaves_partial_text_and_clear_resets() {
    let stmt = delete_from("users")
        .where_cond("a = 1")
        .where_cond(BuildFn(|_: &dyn sqlbuild::Dialect, _: &mut dyn sqlbuild::Buffer| {
            Err(BuildError::invalid_fragment("boom"))
        }));

    let mut buf = SqlBuffer::new();
    assert!(stmt.build(&Postgres, &mut buf).is_err());
    assert!(!buf.sql().is_empty());

    buf.clear();
    assert_eq!(buf.sql(), "");
    assert!(buf.params().is_empty());
}

#[test]
fn repeated_builds_are_identical() {
    let stmt = delete_from("users")
        .where_cond(And::new(["a = 1", "b = 2"]))
        .join("orders", "users.id = orders.user_id");

    let (first, p1) = stmt.to_sql(&Postgres).unwrap();
    let (second, p2) = stmt.to_sql(&Postgres).unwrap();
    assert_eq!(first, second);
    assert_eq!(p1.len(), p2.len());
}
