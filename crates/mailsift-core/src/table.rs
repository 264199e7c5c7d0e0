use serde::{Deserialize, Serialize};

/// An ordered set of rows sharing one column schema. Rows are aligned
/// positionally with `columns`; the empty string is the missing marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Exact, case-sensitive match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn column_index_is_exact_match() {
        let table = Table::new(vec!["name".to_string(), "email".to_string()]);
        assert_eq!(table.column_index("email"), Some(1));
        assert_eq!(table.column_index("Email"), None);
        assert_eq!(table.column_index("e-mail"), None);
    }

    #[test]
    fn push_row_preserves_order() {
        let mut table = Table::new(vec!["email".to_string()]);
        table.push_row(vec!["a@x.com".to_string()]);
        table.push_row(vec!["b@x.com".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][0], "a@x.com");
        assert_eq!(table.rows[1][0], "b@x.com");
    }
}
