//! In-memory source table.

/// A loaded table: normalized headers plus string-valued rows, every row
/// padded or truncated to header width at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Index of a column by exact name match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// A copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![
                vec!["1".to_string(), "x".to_string()],
                vec!["2".to_string(), "y".to_string()],
                vec!["3".to_string(), "z".to_string()],
            ],
        }
    }

    #[test]
    fn dimensions() {
        let t = table();
        assert_eq!(t.height(), 3);
        assert_eq!(t.width(), 2);
        assert!(!t.is_empty());
        assert!(DataTable::default().is_empty());
    }

    #[test]
    fn column_index_is_case_sensitive() {
        let t = table();
        assert_eq!(t.column_index("B"), Some(1));
        assert_eq!(t.column_index("b"), None);
    }

    #[test]
    fn head_bounds_rows() {
        let t = table();
        assert_eq!(t.head(2).rows.len(), 2);
        assert_eq!(t.head(10).rows.len(), 3);
        assert_eq!(t.head(2).headers, t.headers);
    }
}
