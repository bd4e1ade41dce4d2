//! Result sets returned by a fetch.

/// Ordered documents produced by one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    docs: Vec<T>,
    num_found: u64,
}

impl<T> ResultSet<T> {
    /// Create a result set whose total equals the number of documents.
    pub fn new(docs: Vec<T>) -> Self {
        let num_found = docs.len() as u64;
        Self { docs, num_found }
    }

    /// Create an empty result set.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Record the total number of matches reported by the engine, which may
    /// exceed the number of documents returned in this page.
    pub fn with_num_found(mut self, num_found: u64) -> Self {
        self.num_found = num_found;
        self
    }

    /// Total number of matching documents.
    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    /// Number of documents in this set.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the set holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents in order.
    pub fn docs(&self) -> &[T] {
        &self.docs
    }

    /// Iterate over the documents.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.docs.iter()
    }

    /// Take ownership of the documents.
    pub fn into_docs(self) -> Vec<T> {
        self.docs
    }
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl<T> FromIterator<T> for ResultSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_docs() {
        let set = ResultSet::new(vec![1, 2, 3]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.num_found(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.docs(), &[1, 2, 3]);
    }

    #[test]
    fn test_num_found_can_exceed_page() {
        let set = ResultSet::new(vec!["a"]).with_num_found(250);
        assert_eq!(set.len(), 1);
        assert_eq!(set.num_found(), 250);
    }

    #[test]
    fn test_empty() {
        let set: ResultSet<i32> = ResultSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.num_found(), 0);
        assert_eq!(set, ResultSet::default());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let set: ResultSet<i32> = (1..=4).collect();
        let borrowed: Vec<i32> = set.iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3, 4]);
        let owned: Vec<i32> = set.into_iter().rev().collect();
        assert_eq!(owned, vec![4, 3, 2, 1]);
    }
}
