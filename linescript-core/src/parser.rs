use crate::ast::{DialogueEntry, LineItem, Script};
use crate::error::{MalformedLineError, MalformedReason};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Voice ids always start with this literal.
pub const VOICE_PREFIX: &str = "ch";

// speaker runs up to the first ": ", text is greedy up to the last "(...)"
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(.*?): )?(.*)\(([^()]*)\)").expect("paragraph pattern must compile")
});

// same shape, but the token must be a voice id; anything after it is trailing text
static VOICED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(.*?): )?(.*)\((ch[^()]*)\)").expect("voiced pattern must compile")
});

/// Shape of a single paragraph, before any attribution is attempted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Paragraph<'a> {
    /// Headings, stage directions, anything without a trailing `(...)` token.
    Prose,
    Line {
        speaker: Option<&'a str>,
        text: &'a str,
        resource: &'a str,
    },
}

/// Splits a paragraph into speaker, text and trailing token.
///
/// An empty speaker prefix (`": hi (ch1)"`) counts as no speaker. A speaker-led
/// paragraph whose last group is an aside (`"Alice: hi (ch1) (sighs)"`) falls back
/// to its last voice-id group.
pub fn classify(paragraph: &str) -> Paragraph<'_> {
    let Some(caps) = PARAGRAPH.captures(paragraph) else {
        return Paragraph::Prose;
    };
    let line = line_of(&caps);
    match line {
        Paragraph::Line {
            speaker: Some(_),
            resource,
            ..
        } if !is_voice_id(resource) => match VOICED.captures(paragraph).map(|c| line_of(&c)) {
            Some(voiced @ Paragraph::Line { speaker: Some(_), .. }) => voiced,
            _ => line,
        },
        _ => line,
    }
}

fn line_of<'a>(caps: &Captures<'a>) -> Paragraph<'a> {
    let speaker = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty());
    let text = caps.get(2).map_or("", |m| m.as_str().trim());
    let resource = caps.get(3).map_or("", |m| m.as_str().trim());
    Paragraph::Line {
        speaker,
        text,
        resource,
    }
}

pub fn is_voice_id(resource: &str) -> bool {
    resource.starts_with(VOICE_PREFIX)
}

#[derive(PartialEq)]
enum Status {
    Run,
    Stop,
}

pub struct Parser<'a, S> {
    paragraphs: &'a [S],
    cursor: usize,
    status: Status,
    skipped: usize,
    script: Script,
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
    pub fn new(paragraphs: &'a [S]) -> Self {
        Self {
            paragraphs,
            cursor: 0,
            status: Status::Run,
            skipped: 0,
            script: Script::default(),
        }
    }

    fn bump(&mut self) -> Option<&'a str> {
        let p = self.paragraphs.get(self.cursor)?;
        self.cursor += 1;
        Some(p.as_ref())
    }

    pub fn parse(mut self) -> Result<Script, MalformedLineError> {
        while self.status == Status::Run {
            match self.bump() {
                Some(p) => self.paragraph(p)?,
                None => self.status = Status::Stop,
            }
        }
        log::debug!(
            "Parsed {} paragraphs: {} entries, {} lines, {} skipped",
            self.paragraphs.len(),
            self.script.len(),
            self.script.item_count(),
            self.skipped
        );
        Ok(self.script)
    }

    fn paragraph(&mut self, raw: &str) -> Result<(), MalformedLineError> {
        let index = self.cursor - 1;
        let shape = classify(raw);
        log::trace!("paragraph {}: {:?}", index, shape);

        match shape {
            Paragraph::Prose => self.skipped += 1,
            Paragraph::Line {
                speaker: Some(speaker),
                text,
                resource,
            } => {
                if is_voice_id(resource) {
                    self.script
                        .push(DialogueEntry::new(speaker, LineItem::new(text, resource)));
                } else {
                    // "Name: something (aside)" is not a voiced line
                    self.skipped += 1;
                }
            }
            Paragraph::Line {
                speaker: None,
                text,
                resource,
            } => {
                if !is_voice_id(resource) {
                    return Err(malformed(
                        index,
                        raw,
                        MalformedReason::Unvoiced {
                            resource: resource.to_string(),
                        },
                    ));
                }
                match self.script.last_mut() {
                    Some(entry) => entry.push(LineItem::new(text, resource)),
                    None => return Err(malformed(index, raw, MalformedReason::Orphaned)),
                }
            }
        }
        Ok(())
    }
}

fn malformed(index: usize, raw: &str, reason: MalformedReason) -> MalformedLineError {
    log::error!("Failed to parse paragraph {}: {:?}", index, raw);
    MalformedLineError {
        index,
        paragraph: raw.to_string(),
        reason,
    }
}

/// Parses an ordered list of paragraphs into a [`Script`].
pub fn parse<S: AsRef<str>>(paragraphs: &[S]) -> Result<Script, MalformedLineError> {
    Parser::new(paragraphs).parse()
}
