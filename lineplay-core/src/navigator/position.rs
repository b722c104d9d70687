use linescript_core::ast::LineItem;

/// Two-level cursor: entry within the active view, item within that entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub entry: usize,
    pub item: usize,
}

impl Position {
    pub const START: Position = Position { entry: 0, item: 0 };

    pub fn new(entry: usize, item: usize) -> Self {
        Self { entry, item }
    }

    pub fn is_start(&self) -> bool {
        *self == Self::START
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The active view has no entries.
    Empty,
    Positioned,
}

/// What the presentation layer needs about the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue<'a> {
    pub speaker: &'a str,
    pub item: &'a LineItem,
    pub position: Position,
}
