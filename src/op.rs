//! Unified operation-kind vocabulary.
//!
//! Every user-visible list operation is one of eight kinds. The same enum
//! serves two consumers that historically used separate string vocabularies:
//!
//! | Consumer            | Spelling              | Accessor               |
//! |---------------------|-----------------------|------------------------|
//! | Change notification | `ins-start`, `clear`  | [`OpKind::tag`]        |
//! | Predictor model     | `INSERT_START`        | [`OpKind::name`]       |
//! | Prediction text     | "insert at start"     | [`OpKind::readable`]   |
//!
//! Keeping one enum with three renderings removes the duplicated string
//! literals and the caller-side translation table; the engines simply never
//! emit [`OpKind::Search`] because a search is a pure query.
//!
//! Declaration order is load-bearing: the predictor indexes its frequency and
//! transition counters by [`OpKind::index`] and produces candidates by
//! iterating [`OpKind::ALL`], which is what makes its output deterministic.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::op::OpKind;
//!
//! assert_eq!(OpKind::InsertStart.tag(), "ins-start");
//! assert_eq!(OpKind::InsertStart.name(), "INSERT_START");
//! assert_eq!(OpKind::InsertStart.readable(), "insert at start");
//! assert_eq!(OpKind::ALL.len(), OpKind::COUNT);
//! ```

use std::fmt;

/// One of the eight user-visible list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Insert a new node as the head.
    InsertStart,
    /// Append a new node after the tail.
    InsertEnd,
    /// Insert a new node at a given position.
    InsertAt,
    /// Delete the first node holding a given value.
    DeleteValue,
    /// Delete the node at a given position.
    DeleteAt,
    /// Look up the first node holding a given value (pure query).
    Search,
    /// Reverse the link direction of the whole chain.
    Reverse,
    /// Discard the whole chain.
    Clear,
}

impl OpKind {
    /// Number of operation kinds; sizes the predictor's counter arrays.
    pub const COUNT: usize = 8;

    /// All kinds in declaration order.
    pub const ALL: [OpKind; OpKind::COUNT] = [
        OpKind::InsertStart,
        OpKind::InsertEnd,
        OpKind::InsertAt,
        OpKind::DeleteValue,
        OpKind::DeleteAt,
        OpKind::Search,
        OpKind::Reverse,
        OpKind::Clear,
    ];

    /// Stable array index for this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase hyphenated tag used by change-notification events.
    ///
    /// `Search` has a tag for completeness, but the engines never emit it.
    pub const fn tag(self) -> &'static str {
        match self {
            OpKind::InsertStart => "ins-start",
            OpKind::InsertEnd => "ins-end",
            OpKind::InsertAt => "ins-pos",
            OpKind::DeleteValue => "del-value",
            OpKind::DeleteAt => "del-position",
            OpKind::Search => "search",
            OpKind::Reverse => "reverse",
            OpKind::Clear => "clear",
        }
    }

    /// Upper-snake name used by the predictor vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            OpKind::InsertStart => "INSERT_START",
            OpKind::InsertEnd => "INSERT_END",
            OpKind::InsertAt => "INSERT_AT",
            OpKind::DeleteValue => "DELETE_VALUE",
            OpKind::DeleteAt => "DELETE_AT",
            OpKind::Search => "SEARCH",
            OpKind::Reverse => "REVERSE",
            OpKind::Clear => "CLEAR",
        }
    }

    /// Human phrasing used in prediction reasoning strings.
    pub const fn readable(self) -> &'static str {
        match self {
            OpKind::InsertStart => "insert at start",
            OpKind::InsertEnd => "insert at end",
            OpKind::InsertAt => "insert at position",
            OpKind::DeleteValue => "delete by value",
            OpKind::DeleteAt => "delete at position",
            OpKind::Search => "search",
            OpKind::Reverse => "reverse",
            OpKind::Clear => "clear",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, kind) in OpKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn tags_are_distinct() {
        for a in OpKind::ALL {
            for b in OpKind::ALL {
                if a != b {
                    assert_ne!(a.tag(), b.tag());
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn display_uses_predictor_name() {
        assert_eq!(OpKind::DeleteAt.to_string(), "DELETE_AT");
    }

    #[test]
    fn notification_tags_match_wire_vocabulary() {
        assert_eq!(OpKind::InsertAt.tag(), "ins-pos");
        assert_eq!(OpKind::DeleteAt.tag(), "del-position");
        assert_eq!(OpKind::Reverse.tag(), "reverse");
    }
}
