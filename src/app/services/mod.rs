//! Services layer - operations that do not touch widgets.
//!
//! - Text extraction from PDFs and images
//! - Saving and copying extracted text

pub mod extraction;
pub mod output;
