mod position;
mod view;

use std::sync::Arc;
use linescript_core::ast::{DialogueEntry, LineItem, Script};
use view::View;

pub use position::{CursorState, Cue, Position};

/// Bidirectional, speaker-filterable cursor over a [`Script`].
///
/// Movement first walks the items of the current entry, then steps to the next
/// entry. Stepping back across an entry boundary lands on the *first* item of the
/// previous entry, so an earlier speaker's block is always replayed from its start.
///
/// Every operation is total: out-of-range moves are no-ops and reads return `None`.
#[derive(Debug, Clone)]
pub struct Navigator {
    script: Arc<Script>,
    view: View,
    pos: Position,
}

impl Navigator {
    pub fn new(script: impl Into<Arc<Script>>) -> Self {
        let script = script.into();
        let view = View::build(&script, None);
        Self {
            script,
            view,
            pos: Position::START,
        }
    }

    pub fn with_filter(script: impl Into<Arc<Script>>, speaker: Option<&str>) -> Self {
        let mut nav = Self::new(script);
        nav.set_filter(speaker);
        nav
    }

    pub fn script(&self) -> &Arc<Script> {
        &self.script
    }

    pub fn state(&self) -> CursorState {
        if self.view.is_empty() {
            CursorState::Empty
        } else {
            CursorState::Positioned
        }
    }

    /// Number of entries in the active view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn filter(&self) -> Option<&str> {
        self.view.filter.as_deref()
    }

    pub fn position(&self) -> Option<Position> {
        self.current().map(|_| self.pos)
    }

    pub fn current_entry(&self) -> Option<&DialogueEntry> {
        self.view.entry(&self.script, self.pos.entry)
    }

    pub fn current(&self) -> Option<&LineItem> {
        self.current_entry()?.items().get(self.pos.item)
    }

    pub fn peek(&self) -> Option<Cue<'_>> {
        let entry = self.current_entry()?;
        let item = entry.items().get(self.pos.item)?;
        Some(Cue {
            speaker: entry.speaker(),
            item,
            position: self.pos,
        })
    }

    pub fn has_next(&self) -> bool {
        match self.current_entry() {
            Some(entry) => self.pos.item + 1 < entry.len() || self.pos.entry + 1 < self.view.len(),
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        !self.view.is_empty() && !self.pos.is_start()
    }

    pub fn advance(&mut self) -> Option<&LineItem> {
        let entry_len = self.current_entry()?.len();
        if self.pos.item + 1 < entry_len {
            self.pos.item += 1;
        } else if self.pos.entry + 1 < self.view.len() {
            self.pos = Position::new(self.pos.entry + 1, 0);
        }
        self.current()
    }

    pub fn retreat(&mut self) -> Option<&LineItem> {
        if self.view.is_empty() {
            return None;
        }
        if self.pos.item > 0 {
            self.pos.item -= 1;
        } else if self.pos.entry > 0 {
            self.pos = Position::new(self.pos.entry - 1, 0);
        }
        self.current()
    }

    pub fn reset(&mut self) {
        self.pos = Position::START;
    }

    /// Narrows the active view to one speaker, or restores the full script with `None`.
    ///
    /// If the current entry survives the change the cursor follows it, keeping its
    /// item; otherwise it restarts at the first item of the new view.
    pub fn set_filter(&mut self, speaker: Option<&str>) {
        let previous = self.view.members.get(self.pos.entry).copied();
        let view = View::build(&self.script, speaker);

        self.pos = match previous.and_then(|i| view.locate(i).map(|at| (i, at))) {
            Some((script_index, at)) => {
                let len = self.script.get(script_index).map_or(0, DialogueEntry::len);
                let item = if self.pos.item < len { self.pos.item } else { 0 };
                Position::new(at, item)
            }
            None => Position::START,
        };
        log::debug!(
            "Filter {:?} -> {:?}: {} entries, cursor at {:?}",
            self.view.filter,
            view.filter,
            view.len(),
            self.pos
        );
        self.view = view;
    }

    /// Distinct speakers of the whole script, regardless of the active filter.
    pub fn available_speakers(&self) -> Vec<&str> {
        self.script.speakers()
    }

    /// Entries of the active view, in script order.
    pub fn entries(&self) -> impl Iterator<Item = &DialogueEntry> + '_ {
        self.view.members.iter().filter_map(|&i| self.script.get(i))
    }
}
