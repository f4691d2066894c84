//! Bounded ring buffer of recently recorded operation kinds.
//!
//! Stores the last `capacity` operations in a ring buffer, providing O(1)
//! record with oldest-first eviction and O(1) access to the k-th most recent
//! entry. The predictor keeps one of these capped at 50 entries and reads the
//! tail of it when choosing which Markov transition row to condition on.
//!
//! ## Architecture
//!
//! ```text
//!   capacity = 4, after recording: A, B, C, D, E
//!
//!   Index:     0     1     2     3
//!            ┌─────┬─────┬─────┬─────┐
//!   data:    │  E  │  B  │  C  │  D  │
//!            └─────┴─────┴─────┴─────┘
//!              ▲
//!              └─ cursor = 1 (next write; A was evicted)
//!
//!   kth_most_recent(1) = E    kth_most_recent(4) = B
//! ```
//!
//! ## Operations
//!
//! | Operation             | Description                         | Complexity |
//! |-----------------------|-------------------------------------|------------|
//! | [`record`]            | Append a kind (evicts oldest)       | O(1)       |
//! | [`most_recent`]       | Most recently recorded kind         | O(1)       |
//! | [`kth_most_recent`]   | k-th most recent kind (1-based)     | O(1)       |
//! | [`to_vec_oldest_first`] | Snapshot in recording order       | O(n)       |
//!
//! [`record`]: OpHistory::record
//! [`most_recent`]: OpHistory::most_recent
//! [`kth_most_recent`]: OpHistory::kth_most_recent
//! [`to_vec_oldest_first`]: OpHistory::to_vec_oldest_first
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ds::OpHistory;
//! use chainkit::op::OpKind;
//!
//! let mut history = OpHistory::with_capacity(3);
//! history.record(OpKind::InsertStart);
//! history.record(OpKind::InsertEnd);
//!
//! assert_eq!(history.most_recent(), Some(OpKind::InsertEnd));
//! assert_eq!(history.kth_most_recent(2), Some(OpKind::InsertStart));
//!
//! history.record(OpKind::Search);
//! history.record(OpKind::Clear); // InsertStart is evicted
//! assert_eq!(
//!     history.to_vec_oldest_first(),
//!     vec![OpKind::InsertEnd, OpKind::Search, OpKind::Clear]
//! );
//! ```

use crate::op::OpKind;

/// Fixed-capacity ring buffer of operation kinds, oldest evicted first.
#[derive(Debug, Clone)]
pub struct OpHistory {
    data: Vec<OpKind>,
    cursor: usize,
    len: usize,
    capacity: usize,
}

impl OpHistory {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// `capacity` must be at least 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            cursor: 0,
            len: 0,
            capacity,
        }
    }

    /// Maximum number of entries retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `op`, evicting the oldest entry once the buffer is full.
    pub fn record(&mut self, op: OpKind) {
        if self.data.len() < self.capacity {
            self.data.push(op);
        } else {
            self.data[self.cursor] = op;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
        self.len = (self.len + 1).min(self.capacity);
    }

    /// Most recently recorded kind.
    pub fn most_recent(&self) -> Option<OpKind> {
        self.kth_most_recent(1)
    }

    /// k-th most recent kind, 1-based (`k == 1` is the most recent).
    ///
    /// Returns `None` when fewer than `k` entries are retained.
    pub fn kth_most_recent(&self, k: usize) -> Option<OpKind> {
        if k == 0 || k > self.len {
            return None;
        }
        let idx = (self.cursor + self.capacity - k) % self.capacity;
        self.data.get(idx).copied()
    }

    /// Snapshot of retained entries, oldest first.
    pub fn to_vec_oldest_first(&self) -> Vec<OpKind> {
        (0..self.len)
            .rev()
            .filter_map(|back| self.kth_most_recent(back + 1))
            .collect()
    }

    /// Forgets everything; capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
        self.cursor = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_entries() {
        let history = OpHistory::with_capacity(4);
        assert!(history.is_empty());
        assert_eq!(history.most_recent(), None);
        assert_eq!(history.kth_most_recent(1), None);
        assert_eq!(history.to_vec_oldest_first(), Vec::new());
    }

    #[test]
    fn records_in_order_until_full() {
        let mut history = OpHistory::with_capacity(4);
        history.record(OpKind::InsertStart);
        history.record(OpKind::Search);
        assert_eq!(history.len(), 2);
        assert_eq!(history.most_recent(), Some(OpKind::Search));
        assert_eq!(history.kth_most_recent(2), Some(OpKind::InsertStart));
        assert_eq!(
            history.to_vec_oldest_first(),
            vec![OpKind::InsertStart, OpKind::Search]
        );
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = OpHistory::with_capacity(3);
        history.record(OpKind::InsertStart);
        history.record(OpKind::InsertEnd);
        history.record(OpKind::Search);
        history.record(OpKind::Clear);

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.to_vec_oldest_first(),
            vec![OpKind::InsertEnd, OpKind::Search, OpKind::Clear]
        );
        assert_eq!(history.kth_most_recent(3), Some(OpKind::InsertEnd));
        assert_eq!(history.kth_most_recent(4), None);
    }

    #[test]
    fn kth_zero_is_none() {
        let mut history = OpHistory::with_capacity(2);
        history.record(OpKind::Reverse);
        assert_eq!(history.kth_most_recent(0), None);
    }

    #[test]
    fn wraps_repeatedly_without_growing() {
        let mut history = OpHistory::with_capacity(2);
        for _ in 0..10 {
            history.record(OpKind::DeleteAt);
            history.record(OpKind::DeleteValue);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.most_recent(), Some(OpKind::DeleteValue));
        assert_eq!(history.kth_most_recent(2), Some(OpKind::DeleteAt));
    }

    #[test]
    fn clear_resets_but_keeps_capacity() {
        let mut history = OpHistory::with_capacity(3);
        history.record(OpKind::Clear);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 3);
        history.record(OpKind::Search);
        assert_eq!(history.most_recent(), Some(OpKind::Search));
    }

    #[test]
    fn capacity_zero_is_coerced_to_one() {
        let mut history = OpHistory::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.record(OpKind::InsertStart);
        history.record(OpKind::InsertEnd);
        assert_eq!(history.len(), 1);
        assert_eq!(history.most_recent(), Some(OpKind::InsertEnd));
    }
}
