use thiserror::Error;

/// A continuation paragraph that cannot be attached to a playable entry.
///
/// Parsing stops at the first one; there is no partial script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line at paragraph {index}: {reason}: {paragraph:?}")]
pub struct MalformedLineError {
    /// Zero-based position of the paragraph in the input.
    pub index: usize,
    /// The offending paragraph, verbatim.
    pub paragraph: String,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("continuation with no preceding speaker")]
    Orphaned,
    #[error("resource '{resource}' is not a voice id")]
    Unvoiced { resource: String },
}
