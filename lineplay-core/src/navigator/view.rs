use linescript_core::ast::{DialogueEntry, Script};

/// The active sequence: indices into the full script, in script order.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub filter: Option<String>,
    pub members: Vec<usize>,
}

impl View {
    pub fn build(script: &Script, filter: Option<&str>) -> Self {
        let members = match filter {
            None => (0..script.len()).collect(),
            Some(speaker) => script
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.speaker() == speaker)
                .map(|(i, _)| i)
                .collect(),
        };
        Self {
            filter: filter.map(str::to_string),
            members,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn entry<'s>(&self, script: &'s Script, index: usize) -> Option<&'s DialogueEntry> {
        self.members.get(index).and_then(|&i| script.get(i))
    }

    /// Where script entry `script_index` sits in this view, if it is a member.
    pub fn locate(&self, script_index: usize) -> Option<usize> {
        // members are sorted
        self.members.binary_search(&script_index).ok()
    }
}
