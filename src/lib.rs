//! Extract UPI transactions from the text layer of PhonePe PDF statements.
//!
//! ```rust,ignore
//! use phonepe_statement_rs::extract_transactions;
//!
//! let transactions = extract_transactions(&statement_text);
//! ```
//!
//! For file input, format detection and extraction options use
//! [`ParserBuilder`]:
//!
//! ```rust,ignore
//! use phonepe_statement_rs::{DiscardPolicy, ParserBuilder};
//!
//! let report = ParserBuilder::new()
//!     .filename("statement.txt")
//!     .discard_policy(DiscardPolicy::RequireAmount)
//!     .report()?;
//! ```

mod builder;
mod report;
mod types;

pub mod errors;
pub mod parsers;

pub use builder::{DEFAULT_MAX_INPUT_LEN, FileFormat, ParserBuilder};
pub use parsers::prelude::*;
pub use report::{StatementReport, StatementSummary};
pub use types::{Direction, ParsedTransaction};

/// Transactions found in `raw_text`, in statement order, using the default
/// [`ExtractOptions`]. Text in an unknown layout yields an empty list.
pub fn extract_transactions(raw_text: &str) -> Vec<ParsedTransaction> {
    PhonePeParser::default().parse(raw_text)
}
