use serde::{Deserialize, Serialize};

use super::{
    assembler::{self, DiscardPolicy},
    fields::{self, DirectionHeuristic},
    segmenter,
    types::DATE_HEADER,
};
use crate::parsers::traits::Parser;
use crate::types::ParsedTransaction;

const STATEMENT_MARKERS: &[&str] = &["Paid to", "Received from", "UTR No.", "Transaction ID"];

/// Knobs for a single extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub discard_policy: DiscardPolicy,
    pub direction_heuristic: DirectionHeuristic,
    /// Copy each source chunk into `ParsedTransaction::raw_text`
    pub keep_raw_text: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PhonePeParser {
    options: ExtractOptions,
}

impl PhonePeParser {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }
}

impl Parser for PhonePeParser {
    type Output = ParsedTransaction;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        if DATE_HEADER.is_match(content) && STATEMENT_MARKERS.iter().any(|m| content.contains(m)) {
            return true;
        }

        filename
            .map(|name| name.to_lowercase().contains("phonepe"))
            .unwrap_or(false)
    }

    fn parse(&self, content: &str) -> Vec<Self::Output> {
        let chunks = segmenter::segment(content);
        let chunk_count = chunks.len();

        let extracted = chunks
            .into_iter()
            .map(|chunk| fields::extract_fields(chunk, self.options.direction_heuristic));
        let records = assembler::assemble(extracted, self.options.discard_policy, self.options.keep_raw_text);

        log::debug!(
            "PhonePe statement: {} date headers, {} records kept, {} discarded",
            chunk_count,
            records.len(),
            chunk_count - records.len()
        );

        records
    }
}
