//! PhonePe transaction statements, as text recovered from the PDF.
//!
//! Extraction runs in three stages: [`segmenter`] cuts the text at date
//! headers, [`fields`] pulls values out of each chunk, and [`assembler`]
//! applies the discard rule.

pub mod assembler;
pub mod fields;
pub mod parser;
pub mod segmenter;
pub mod types;

pub mod prelude {
    pub use super::assembler::DiscardPolicy;
    pub use super::fields::DirectionHeuristic;
    pub use super::parser::{ExtractOptions, PhonePeParser};
    pub use super::types::PhonePeDate;
}
