//! Per-chunk field extraction.
//!
//! Each field is looked up on its own; a miss on one never stops the others.

use std::{str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{segmenter::TransactionChunk, types::PhonePeDate};
use crate::types::Direction;

static DIRECTION_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(DEBIT|CREDIT)\b").expect("valid direction regex"));

static COUNTERPARTY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:(Paid\s+to)|(Received\s+from))\b").expect("valid counterparty phrase regex")
});

// Name characters only, so the capture stops at newlines and currency glyphs.
static COUNTERPARTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:Paid\s+to|Received\s+from)\s+([A-Za-z0-9 .&'@_\-]+)")
        .expect("valid counterparty regex")
});

static COUNTERPARTY_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Transaction\s+ID|UTR|DEBIT|CREDIT)\b").expect("valid stop word regex")
});

static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:₹|\bRs\.?|\bINR)\s*([0-9][0-9,]*(?:\.[0-9]+)?)").expect("valid amount regex")
});

// The rupee glyph often leaves the PDF text layer as mojibake such as "â‚¹",
// so a short run of non-ASCII symbols is accepted as a prefix. Letters,
// whitespace (NBSP, thin space) and invisible format characters never are.
static AMOUNT_GARBLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x00-\x7F\p{L}\s\p{Cf}]{1,4}\s*([0-9][0-9,]*(?:\.[0-9]+)?)")
        .expect("valid garbled amount regex")
});

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"UTR\s+No\.\s*([0-9]+)").expect("valid UTR regex"));

/// How the direction of a transaction is recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionHeuristic {
    /// Only the DEBIT / CREDIT tokens
    Keyword,
    /// Only "Paid to" (debit) / "Received from" (credit)
    Phrase,
    /// Tokens first, phrases when no token is present
    #[default]
    KeywordThenPhrase,
}

/// Fields found in one chunk, before the discard rule is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields<'a> {
    pub chunk: TransactionChunk<'a>,
    pub date: Option<NaiveDate>,
    pub direction: Option<Direction>,
    pub amount: Option<Decimal>,
    pub counterparty: Option<String>,
    pub reference: Option<String>,
}

pub fn extract_fields(chunk: TransactionChunk<'_>, heuristic: DirectionHeuristic) -> ExtractedFields<'_> {
    let text = chunk.text;
    ExtractedFields {
        chunk,
        date: extract_date(text),
        direction: extract_direction(text, heuristic),
        amount: extract_amount(text),
        counterparty: extract_counterparty(text),
        reference: extract_reference(text),
    }
}

/// The chunk's own header as a calendar date. `None` when the header is
/// missing or names an impossible day.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    let date = PhonePeDate::find(text)?;
    match NaiveDate::try_from(date.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::trace!("Ignoring date header {:?}: {}", date.as_str(), err);
            None
        }
    }
}

pub fn extract_direction(text: &str, heuristic: DirectionHeuristic) -> Option<Direction> {
    let from_keyword = || {
        DIRECTION_KEYWORD
            .captures(text)
            .and_then(|caps| caps[1].parse::<Direction>().ok())
    };
    let from_phrase = || {
        COUNTERPARTY_PHRASE.captures(text).map(|caps| {
            if caps.get(1).is_some() {
                Direction::Debit
            } else {
                Direction::Credit
            }
        })
    };

    match heuristic {
        DirectionHeuristic::Keyword => from_keyword(),
        DirectionHeuristic::Phrase => from_phrase(),
        DirectionHeuristic::KeywordThenPhrase => from_keyword().or_else(from_phrase),
    }
}

/// First currency-marked number, with grouping commas removed.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let caps = AMOUNT
        .captures(text)
        .or_else(|| AMOUNT_GARBLED.captures(text))?;
    let digits = caps[1].replace(',', "");
    Decimal::from_str(&digits).ok()
}

pub fn extract_counterparty(text: &str) -> Option<String> {
    let run = COUNTERPARTY.captures(text)?.get(1)?.as_str();
    let end = COUNTERPARTY_STOP.find(run).map(|m| m.start()).unwrap_or(run.len());
    let name = run[..end].trim();

    (!name.is_empty()).then(|| name.to_string())
}

/// Digits of the first "UTR No." in the chunk.
pub fn extract_reference(text: &str) -> Option<String> {
    REFERENCE.captures(text).map(|caps| caps[1].to_string())
}
