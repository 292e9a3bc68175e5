//! Domain layer - core data structures and types.
//!
//! - OCR language selection
//! - Message types for the event system

pub mod language;
pub mod messages;

pub use language::{LanguageSelection, OcrLanguage};
pub use messages::Message;
