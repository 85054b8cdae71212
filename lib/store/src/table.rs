/// An ordered, in-memory collection of records sharing one schema.
///
/// Row order is load order and is preserved across edits, so "first in
/// table order" is a meaningful tie-break for lookups over duplicates.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Replace the whole table contents, preserving the new order.
    pub fn replace_all(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Keep only rows matching the predicate. Returns how many were removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> usize {
        let before = self.rows.len();
        self.rows.retain(keep);
        before - self.rows.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.rows.iter_mut()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_reports_removed_count() {
        let mut table = Table::from_rows(vec![1, 2, 3, 4]);
        let removed = table.retain(|n| n % 2 == 0);
        assert_eq!(removed, 2);
        assert_eq!(table.rows(), &[2, 4]);
    }

    #[test]
    fn replace_all_preserves_order() {
        let mut table = Table::new();
        table.push("b");
        table.replace_all(vec!["c", "a"]);
        assert_eq!(table.rows(), &["c", "a"]);
    }
}
