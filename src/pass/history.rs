//! The last few generated passwords, newest first.

use std::collections::VecDeque;
use std::fmt;

use zeroize::Zeroize;

pub const HISTORY_LEN: usize = 5;

/// Bounded, in-memory only. Entries are zeroized when evicted or dropped.
#[derive(Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, password: String) {
        self.entries.push_front(password);
        while self.entries.len() > HISTORY_LEN {
            if let Some(mut evicted) = self.entries.pop_back() {
                evicted.zeroize();
            }
        }
    }

    /// Entry `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.zeroize();
        }
        self.entries.clear();
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
