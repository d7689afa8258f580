//! The bounded conversation log.
//!
//! Append-only with eviction: after every append, if the stored sequence
//! exceeds `max_turns`, exactly the oldest `evict_count` entries are
//! removed. Eviction is by position, not by role — after several evictions
//! a user turn can lose its paired assistant turn; that numeric policy is
//! deliberate and kept as-is. Append is the only mutation exposed; the
//! orchestrator stages an in-flight user turn outside the log and commits
//! it only after the chat service replies.

use attune_core::message::Turn;
use std::collections::VecDeque;

/// Ordered, size-bounded log of conversation turns.
#[derive(Debug)]
pub struct ConversationLog {
    turns: VecDeque<Turn>,
    max_turns: usize,
    evict_count: usize,
}

impl ConversationLog {
    /// Create an empty log. Eviction removes `evict_count` oldest turns
    /// whenever the length exceeds `max_turns`.
    pub fn new(max_turns: usize, evict_count: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_turns + 1),
            max_turns,
            evict_count,
        }
    }

    /// Append a turn, then evict if over capacity.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        if self.turns.len() > self.max_turns {
            for _ in 0..self.evict_count {
                if self.turns.pop_front().is_none() {
                    break;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The current turns in order, cloned for an outbound request.
    pub fn to_messages(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }
}
