use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::email::clean_email;
use crate::error::CoreError;
use crate::table::Table;

pub const EMAIL_COLUMN: &str = "email";
pub const CLEANED_COLUMN: &str = "cleaned_email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    pub original_count: usize,
    pub cleaned_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub table: Table,
    pub summary: CleanSummary,
}

/// Runs the cleaning pipeline over an in-memory table: normalize and
/// validate the `email` column, drop invalid rows, keep the first row per
/// distinct cleaned value, sort by cleaned value. Surviving rows carry the
/// result in a `cleaned_email` column; an existing column of that name is
/// overwritten, not duplicated.
pub fn clean(input: &Table) -> Result<CleanOutcome, CoreError> {
    let email_idx = input
        .column_index(EMAIL_COLUMN)
        .ok_or(CoreError::MissingEmailColumn)?;
    let cleaned_idx = input.column_index(CLEANED_COLUMN);

    let mut columns = input.columns.clone();
    if cleaned_idx.is_none() {
        columns.push(CLEANED_COLUMN.to_string());
    }

    let mut seen = HashSet::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in &input.rows {
        let raw = row.get(email_idx).map(String::as_str).unwrap_or("");
        let Some(cleaned) = clean_email(raw) else {
            continue;
        };
        // first occurrence wins, resolved in input order
        if !seen.insert(cleaned.clone()) {
            continue;
        }

        let mut out = row.clone();
        out.resize(input.columns.len(), String::new());
        match cleaned_idx {
            Some(idx) => out[idx] = cleaned,
            None => out.push(cleaned),
        }
        rows.push(out);
    }

    let sort_idx = cleaned_idx.unwrap_or(columns.len() - 1);
    rows.sort_by(|a, b| a[sort_idx].cmp(&b[sort_idx]));

    let summary = CleanSummary {
        original_count: input.len(),
        cleaned_count: rows.len(),
    };
    Ok(CleanOutcome {
        table: Table { columns, rows },
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::{clean, CLEANED_COLUMN};
    use crate::error::CoreError;
    use crate::table::Table;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|v| v.to_string()).collect());
        }
        table
    }

    fn cleaned_values(table: &Table) -> Vec<&str> {
        let idx = table.column_index(CLEANED_COLUMN).expect("cleaned column");
        table.rows.iter().map(|row| row[idx].as_str()).collect()
    }

    #[test]
    fn clean_requires_email_column() {
        let input = table(&["name", "address"], &[&["Ada", "a@x.com"]]);
        assert_eq!(clean(&input).unwrap_err(), CoreError::MissingEmailColumn);
    }

    #[test]
    fn clean_normalizes_dedups_and_counts() {
        let input = table(
            &["email"],
            &[
                &["Alice@Example.com"],
                &["alice@example.com "],
                &["bob@@bad"],
            ],
        );
        let outcome = clean(&input).expect("clean");
        assert_eq!(outcome.summary.original_count, 3);
        assert_eq!(outcome.summary.cleaned_count, 1);
        assert_eq!(cleaned_values(&outcome.table), vec!["alice@example.com"]);
    }

    #[test]
    fn clean_keeps_first_occurrence() {
        let input = table(
            &["name", "email"],
            &[&["first", "Bob@X.com"], &["second", "bob@x.com"]],
        );
        let outcome = clean(&input).expect("clean");
        assert_eq!(outcome.summary.cleaned_count, 1);
        assert_eq!(outcome.table.rows[0][0], "first");
        assert_eq!(outcome.table.rows[0][1], "Bob@X.com");
        assert_eq!(outcome.table.rows[0][2], "bob@x.com");
    }

    #[test]
    fn clean_sorts_by_cleaned_value() {
        let input = table(
            &["email"],
            &[&["carol@z.org"], &["Bob@y.net"], &["alice@x.com"]],
        );
        let outcome = clean(&input).expect("clean");
        assert_eq!(
            cleaned_values(&outcome.table),
            vec!["alice@x.com", "bob@y.net", "carol@z.org"]
        );
    }

    #[test]
    fn clean_preserves_other_columns() {
        let input = table(
            &["name", "email", "city"],
            &[&["Ada", " Ada@Example.com", "London"]],
        );
        let outcome = clean(&input).expect("clean");
        assert_eq!(
            outcome.table.columns,
            vec!["name", "email", "city", "cleaned_email"]
        );
        assert_eq!(
            outcome.table.rows[0],
            vec!["Ada", " Ada@Example.com", "London", "ada@example.com"]
        );
    }

    #[test]
    fn clean_drops_empty_and_invalid_cells() {
        let input = table(
            &["email"],
            &[&[""], &["   "], &["not-an-email"], &["ok@example.com"]],
        );
        let outcome = clean(&input).expect("clean");
        assert_eq!(outcome.summary.original_count, 4);
        assert_eq!(outcome.summary.cleaned_count, 1);
    }

    #[test]
    fn clean_single_pass_dot_collapse_behavior() {
        let input = table(
            &["email"],
            &[&["john..doe@example.com"], &["john...doe@example.com"]],
        );
        let outcome = clean(&input).expect("clean");
        // one pair collapses and validates; two pairs leave a double dot behind
        assert_eq!(cleaned_values(&outcome.table), vec!["john.doe@example.com"]);
    }

    #[test]
    fn clean_is_idempotent_on_its_own_output() {
        let input = table(
            &["name", "email"],
            &[
                &["a", "Carol@Z.org"],
                &["b", "bob@y.net"],
                &["c", "carol@z.org"],
                &["d", "bad@@value"],
            ],
        );
        let first = clean(&input).expect("first pass");
        let second = clean(&first.table).expect("second pass");
        assert_eq!(second.table, first.table);
        assert_eq!(
            second.summary.original_count,
            first.summary.cleaned_count
        );
        assert_eq!(second.summary.cleaned_count, first.summary.cleaned_count);
    }

    #[test]
    fn clean_never_grows_the_table() {
        let input = table(&["email"], &[&["a@x.com"], &["b@x.com"]]);
        let outcome = clean(&input).expect("clean");
        assert!(outcome.summary.cleaned_count <= outcome.summary.original_count);
        assert_eq!(outcome.summary.cleaned_count, 2);
    }
}
