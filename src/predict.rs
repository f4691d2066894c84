//! # Next-Operation Predictor
//!
//! Records the stream of operations a user performs and ranks which
//! operation they are likely to perform next, blending two signals:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                           Predictor                              │
//!   │                                                                  │
//!   │   frequency: [u64; 8]          how often each kind ever ran      │
//!   │   transitions: [[u64; 8]; 8]   row = from, column = to           │
//!   │   history: OpHistory(50)       recent kinds, oldest evicted      │
//!   │                                                                  │
//!   │   record_operation(op, _)                                        │
//!   │     frequency[op] += 1                                           │
//!   │     transitions[previous][op] += 1   (when a previous op exists) │
//!   │     history.record(op)                                           │
//!   │                                                                  │
//!   │   predictions()                                                  │
//!   │     Markov row  ──►  count(L→T) / rowsum(L)                      │
//!   │     frequency   ──►  min(0.8, count/total × 1.5)                 │
//!   │     merge (keep best per kind) → stable sort → top 4             │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The short-horizon Markov signal personalizes quickly once consecutive
//! habits emerge; the long-horizon frequency signal keeps predictions useful
//! on sparse histories. Candidates are generated by iterating
//! [`OpKind::ALL`], so identical histories always produce identical output.
//!
//! The 50-entry history bound only influences behavior through its most
//! recent entries; the frequency and transition counters are never decayed
//! or capped. That asymmetry is deliberate and kept as-is.
//!
//! This is a bounded-memory heuristic ranker, not a learning system: no
//! persistence, no cross-session state, no significance testing, and the
//! confidence values are not calibrated probabilities.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::op::OpKind;
//! use chainkit::predict::Predictor;
//!
//! let mut predictor = Predictor::new();
//! predictor.record_operation(OpKind::InsertStart, 10);
//! predictor.record_operation(OpKind::InsertEnd, 20);
//!
//! let predictions = predictor.predictions();
//! assert_eq!(predictions[0].operation, OpKind::InsertEnd);
//! assert_eq!(predictions[0].confidence, 1.0);
//! ```

use std::fmt;

use crate::ds::OpHistory;
use crate::op::OpKind;

/// Maximum number of predictions returned by [`Predictor::predictions`].
pub const MAX_PREDICTIONS: usize = 4;

/// Maximum number of operations retained in the recent-history buffer.
pub const MAX_HISTORY: usize = 50;

/// Frequency-signal confidences are boosted by this factor…
const FREQUENCY_BOOST: f64 = 1.5;

/// …and capped here so a dominant habit never reads as a certainty.
const FREQUENCY_CAP: f64 = 0.8;

/// One ranked guess at the user's next operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted operation kind.
    pub operation: OpKind,
    /// Likelihood estimate in `[0, 1]`; not a calibrated probability.
    pub confidence: f64,
    /// Human-readable justification for the guess.
    pub reasoning: String,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.0}%)",
            self.operation.readable(),
            self.confidence * 100.0
        )
    }
}

/// Frequency-plus-Markov next-operation ranker.
///
/// Single-threaded, synchronous; callers sharing one across threads must
/// serialize [`record_operation`](Predictor::record_operation) relative to
/// [`predictions`](Predictor::predictions).
#[derive(Debug, Clone)]
pub struct Predictor {
    frequency: [u64; OpKind::COUNT],
    transitions: [[u64; OpKind::COUNT]; OpKind::COUNT],
    history: OpHistory,
}

impl Predictor {
    /// Creates a predictor with all counters at zero and an empty history.
    pub fn new() -> Self {
        Self {
            frequency: [0; OpKind::COUNT],
            transitions: [[0; OpKind::COUNT]; OpKind::COUNT],
            history: OpHistory::with_capacity(MAX_HISTORY),
        }
    }

    /// Records one performed operation. O(1).
    ///
    /// `value` is the operand the user supplied; it is accepted but not yet
    /// consumed by the statistical model (reserved for value-conditioned
    /// prediction).
    pub fn record_operation(&mut self, op: OpKind, value: i64) {
        let _ = value;
        self.frequency[op.index()] += 1;
        if let Some(previous) = self.history.most_recent() {
            self.transitions[previous.index()][op.index()] += 1;
        }
        self.history.record(op);
    }

    /// Cumulative count of `op` across the whole session.
    pub fn count(&self, op: OpKind) -> u64 {
        self.frequency[op.index()]
    }

    /// Total number of recorded operations.
    pub fn total_recorded(&self) -> u64 {
        self.frequency.iter().sum()
    }

    /// Number of times `from` was immediately followed by `to`.
    pub fn transition_count(&self, from: OpKind, to: OpKind) -> u64 {
        self.transitions[from.index()][to.index()]
    }

    /// Number of entries currently retained in the recent history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns up to [`MAX_PREDICTIONS`] ranked guesses, confidence
    /// descending. Deterministic: identical histories yield identical
    /// output, including order.
    pub fn predictions(&self) -> Vec<Prediction> {
        if self.history.is_empty() {
            return Self::cold_start();
        }

        let mut candidates = Vec::new();
        if let Some(row) = self.markov_row() {
            let total: u64 = self.transitions[row.index()].iter().sum();
            if total > 0 {
                for kind in OpKind::ALL {
                    let seen = self.transitions[row.index()][kind.index()];
                    if seen > 0 {
                        candidates.push(Prediction {
                            operation: kind,
                            confidence: seen as f64 / total as f64,
                            reasoning: format!(
                                "After {}, you usually {} next ({} times)",
                                row.readable(),
                                kind.readable(),
                                seen
                            ),
                        });
                    }
                }
            }
        }

        let total = self.total_recorded();
        if total > 0 {
            for kind in OpKind::ALL {
                let seen = self.frequency[kind.index()];
                if seen > 0 {
                    let boosted = (seen as f64 / total as f64) * FREQUENCY_BOOST;
                    candidates.push(Prediction {
                        operation: kind,
                        confidence: boosted.min(FREQUENCY_CAP),
                        reasoning: format!("You use this frequently ({} times)", seen),
                    });
                }
            }
        }

        let mut merged = Self::dedup_keep_best(candidates);
        merged.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        merged.truncate(MAX_PREDICTIONS);
        merged
    }

    /// Picks the transition row to condition on.
    ///
    /// Usually the most recent operation; when that kind has never been seen
    /// as a transition source, falls back to the operation before it, which
    /// by construction has at least one recorded outgoing transition. This
    /// keeps the Markov signal alive on histories too sparse for the last
    /// kind to have a row of its own.
    fn markov_row(&self) -> Option<OpKind> {
        let last = self.history.most_recent()?;
        let row_total: u64 = self.transitions[last.index()].iter().sum();
        if row_total > 0 {
            return Some(last);
        }
        self.history.kth_most_recent(2)
    }

    /// Fixed guesses for a fresh session with nothing recorded yet.
    fn cold_start() -> Vec<Prediction> {
        let canned = [
            (
                OpKind::InsertStart,
                0.4,
                "Most users start by inserting at beginning",
            ),
            (OpKind::InsertEnd, 0.3, "Common second operation"),
            (OpKind::Search, 0.2, "Try searching for values"),
            (OpKind::Clear, 0.1, "Clear the list when done"),
        ];
        canned
            .into_iter()
            .map(|(operation, confidence, reasoning)| Prediction {
                operation,
                confidence,
                reasoning: reasoning.to_string(),
            })
            .collect()
    }

    /// Collapses duplicate operation kinds, keeping the higher-confidence
    /// entry; ties keep the earlier one. Survivors stay in first-seen order.
    fn dedup_keep_best(candidates: Vec<Prediction>) -> Vec<Prediction> {
        let mut merged: Vec<Prediction> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match merged
                .iter_mut()
                .find(|existing| existing.operation == candidate.operation)
            {
                Some(existing) => {
                    if candidate.confidence > existing.confidence {
                        *existing = candidate;
                    }
                }
                None => merged.push(candidate),
            }
        }
        merged
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}
