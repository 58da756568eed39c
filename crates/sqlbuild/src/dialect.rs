//! SQL dialects: identifier quoting and placeholder syntax per backend.

/// Backend-specific rendering rules consumed by statement builders.
pub trait Dialect: Send + Sync {
    /// Quote a possibly dotted identifier (`schema.table.column`).
    ///
    /// Each dot-separated part is quoted on its own; a `*` part passes
    /// through unquoted so `orders.*` stays usable.
    fn quote_ident(&self, ident: &str) -> String;

    /// Render the placeholder for the 1-based parameter position.
    fn placeholder(&self, pos: usize) -> String;
}

/// Quote each dot-separated part with `quote`, doubling embedded quote
/// characters.
fn quote_parts(ident: &str, quote: char) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, part) in ident.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        if part == "*" {
            out.push('*');
            continue;
        }
        out.push(quote);
        for ch in part.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
    }
    out
}

/// PostgreSQL: double-quoted identifiers, `$n` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_ident(&self, ident: &str) -> String {
        quote_parts(ident, '"')
    }

    fn placeholder(&self, pos: usize) -> String {
        format!("${pos}")
    }
}

/// MySQL: backtick-quoted identifiers, `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mysql;

impl Dialect for Mysql {
    fn quote_ident(&self, ident: &str) -> String {
        quote_parts(ident, '`')
    }

    fn placeholder(&self, _pos: usize) -> String {
        "?".to_string()
    }
}

/// SQLite: double-quoted identifiers, `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_ident(&self, ident: &str) -> String {
        quote_parts(ident, '"')
    }

    fn placeholder(&self, _pos: usize) -> String {
        "?".to_string()
    }
}
