use serde::{Deserialize, Serialize};

use super::fields::ExtractedFields;
use crate::types::ParsedTransaction;

/// Which chunks become records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardPolicy {
    /// Keep a chunk only when both direction and amount were found
    #[default]
    RequireDirectionAndAmount,
    /// Keep any chunk with an amount; direction may be missing
    RequireAmount,
}

impl DiscardPolicy {
    pub fn keeps(&self, fields: &ExtractedFields<'_>) -> bool {
        match self {
            DiscardPolicy::RequireDirectionAndAmount => {
                fields.direction.is_some() && fields.amount.is_some()
            }
            DiscardPolicy::RequireAmount => fields.amount.is_some(),
        }
    }
}

/// Turns extracted fields into records, in input order, dropping the chunks
/// `policy` rejects. No sorting or deduplication happens here.
pub fn assemble<'a, I>(bundles: I, policy: DiscardPolicy, keep_raw_text: bool) -> Vec<ParsedTransaction>
where
    I: IntoIterator<Item = ExtractedFields<'a>>,
{
    bundles
        .into_iter()
        .filter(|fields| {
            let keep = policy.keeps(fields);
            if !keep {
                log::trace!(
                    "Discarding chunk {} (direction: {}, amount: {})",
                    fields.chunk.index,
                    fields.direction.is_some(),
                    fields.amount.is_some()
                );
            }
            keep
        })
        .map(|fields| ParsedTransaction {
            date: fields.date,
            direction: fields.direction,
            amount: fields.amount,
            counterparty: fields.counterparty,
            reference: fields.reference,
            raw_text: keep_raw_text.then(|| fields.chunk.text.to_string()),
        })
        .collect()
}
