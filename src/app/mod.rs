//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data (OCR language, messages)
//! - `services/` - Text extraction and text output
//! - `infrastructure/` - FLTK buffer access, errors
//! - `state.rs` - The shell: owns the widgets and dispatches user actions

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

pub use domain::{LanguageSelection, Message, OcrLanguage};
pub use infrastructure::error::{AppError, Result};
pub use services::extraction::{ExtractionStrategy, extract_text};
