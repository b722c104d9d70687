use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    ShowLine {
        speaker: String,
        text: String,
        resource_id: String,
        /// 1-based, within the active view.
        entry: usize,
        /// 1-based, within the entry.
        item: usize,
        entries: usize,
        has_prev: bool,
        has_next: bool,
        filter: Option<String>,
    },
    ShowEmpty { filter: Option<String> },
    Speakers { names: Vec<String>, selected: Option<String> },

    PlayVoice { resource_id: String, path: PathBuf },
    StopVoice,
    PlaybackFailed { resource_id: String, reason: String },

    End,
}

impl OutputEvent {
    /// Events the surface must answer with an [`InputEvent`].
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::ShowLine { .. } | Self::ShowEmpty { .. } | Self::End)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Next,
    Prev,
    Replay,
    Stop,
    Reset,
    SetFilter(Option<String>),
    ListSpeakers,
    Exit,
}

impl InputEvent {
    /// Parses one line of terminal input.
    pub fn from_command(input: &str) -> Option<Self> {
        let cmd = input.trim();
        if let Some(rest) = cmd.strip_prefix(":filter") {
            let name = rest.trim();
            return if name.is_empty() {
                None
            } else {
                Some(Self::SetFilter(Some(name.to_string())))
            };
        }
        match cmd {
            "" | "n" => Some(Self::Next),
            "p" => Some(Self::Prev),
            "r" => Some(Self::Replay),
            "s" => Some(Self::Stop),
            "0" => Some(Self::Reset),
            ":all" => Some(Self::SetFilter(None)),
            ":speakers" => Some(Self::ListSpeakers),
            c if c.eq_ignore_ascii_case("exit") || c == "q" => Some(Self::Exit),
            _ => None,
        }
    }
}
