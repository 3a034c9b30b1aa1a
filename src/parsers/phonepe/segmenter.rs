//! Splits statement text into one chunk per transaction.
//!
//! Every date header opens a new chunk, which runs up to the next header or
//! the end of the text. Header positions are collected in a single pass and
//! the text is sliced between them.

use super::types::DATE_HEADER;

/// Text of one transaction block, borrowed from the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionChunk<'a> {
    /// Position of the chunk in statement order
    pub index: usize,
    pub text: &'a str,
}

/// Returns the chunks of `text` in statement order. Text before the first
/// header (page titles, account summary) belongs to no chunk.
pub fn segment(text: &str) -> Vec<TransactionChunk<'_>> {
    let starts: Vec<usize> = DATE_HEADER.find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            TransactionChunk {
                index,
                text: &text[start..end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("no dates here", 0)]
    #[case("Jan 02, 2026", 1)]
    #[case("Jan 02, 2026 Paid to A Jan 03, 2026 Paid to B", 2)]
    #[case("Header\nJan 02, 2026\nx\nFeb 3, 2026\ny\nMar 14, 2026\nz", 3)]
    #[case("Dated 02/01/2026 Paid to A", 0)]
    fn test_segment_count(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(segment(text).len(), expected);
    }

    #[test]
    fn test_segment_boundaries() {
        let text = "PhonePe Statement\nJan 02, 2026 Paid to A DEBIT\nJan 01, 2026 Received from B CREDIT";
        let chunks = segment(text);

        assert_eq!(chunks[0].text, "Jan 02, 2026 Paid to A DEBIT\n");
        assert_eq!(chunks[1].text, "Jan 01, 2026 Received from B CREDIT");
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn test_segment_covers_text_after_first_header() {
        let text = "preamble Jan 02, 2026 a Feb 02, 2026 b Mar 02, 2026 c";
        let joined: String = segment(text).iter().map(|c| c.text).collect();

        assert_eq!(joined, &text[text.find("Jan").unwrap()..]);
    }

    #[test]
    fn test_segment_multibyte_text() {
        let text = "Jan 02, 2026 Paid to Café ₹50 Jan 03, 2026 ₹75";
        let chunks = segment(text);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].text.ends_with("₹50 "));
        assert!(chunks[1].text.ends_with("₹75"));
    }

    #[test]
    fn test_segment_large_input() {
        let block = "Jan 02, 2026 Paid to Example Store Transaction ID T1 UTR No. 1 DEBIT ₹1\n";
        let text = block.repeat(20_000);

        assert_eq!(segment(&text).len(), 20_000);
    }
}
