//! Retained contents of the side panels, filled through the simulation's UI feed.

use std::collections::VecDeque;

use game_core::{CharacterSummary, MutationEntry, UiSink};

/// Older lines fall off the front once the log holds this many.
pub const MAX_LOG_LINES: usize = 200;

#[derive(Debug, Default)]
pub struct Panels {
    log_lines: VecDeque<String>,
    pub status: String,
    pub character: CharacterSummary,
    pub mutations: Vec<MutationEntry>,
    pub inventory: Vec<String>,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    /// The newest `count` log lines, oldest first.
    pub fn recent_log(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.log_lines.len().saturating_sub(count);
        self.log_lines.iter().skip(skip).map(String::as_str)
    }

    pub fn log_len(&self) -> usize {
        self.log_lines.len()
    }

    /// Drops everything; used when a new game starts.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl UiSink for Panels {
    fn add_log_entry(&mut self, line: &str) {
        if self.log_lines.len() == MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
        self.log_lines.push_back(line.to_string());
    }

    fn set_status_text(&mut self, text: &str) {
        text.clone_into(&mut self.status);
    }

    fn set_character(&mut self, summary: &CharacterSummary) {
        self.character = summary.clone();
    }

    fn set_mutations(&mut self, mutations: &[MutationEntry]) {
        self.mutations = mutations.to_vec();
    }

    fn set_inventory(&mut self, items: &[String]) {
        self.inventory = items.to_vec();
    }
}
