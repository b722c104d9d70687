//! Turns raw document paragraphs into a speaker-attributed dialogue [`Script`].

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{DialogueEntry, LineItem, Script};
pub use error::{MalformedLineError, MalformedReason};
pub use parser::{parse, Parser};
