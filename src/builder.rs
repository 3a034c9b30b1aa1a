use std::fs;

use crate::{
    errors::{StatementParseError, StatementResult},
    parsers::prelude::*,
    report::StatementReport,
    types::ParsedTransaction,
};
use serde::{Deserialize, Serialize};

/// Largest statement text accepted by default (8 MiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "phonepe")]
    PhonePe,
}

impl FileFormat {
    fn parse_raw(&self, content: &str, options: ExtractOptions) -> Vec<ParsedTransaction> {
        match self {
            FileFormat::PhonePe => PhonePeParser::new(options).parse(content),
        }
    }

    fn parse<T>(&self, content: &str, options: ExtractOptions) -> StatementResult<Vec<T>>
    where
        T: TryFrom<ParsedTransaction>,
        StatementParseError: From<T::Error>,
    {
        self.parse_raw(content, options)
            .into_iter()
            .map(|txn| T::try_from(txn).map_err(Into::into))
            .collect()
    }

    fn detect(filename: Option<&str>, content: &str) -> StatementResult<Self> {
        if PhonePeParser::is_supported(filename, content) {
            return Ok(FileFormat::PhonePe);
        }

        log::debug!("No statement format recognised (filename: {:?})", filename);
        Err(StatementParseError::UnsupportedFormat)
    }
}

pub struct ParserBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    options: ExtractOptions,
    max_input_len: usize,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self {
            content: None,
            filepath: None,
            format: None,
            options: ExtractOptions::default(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Path of a text file holding the statement's text layer. Also used as a
    /// hint for format detection when content is given directly.
    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn discard_policy(mut self, policy: DiscardPolicy) -> Self {
        self.options.discard_policy = policy;
        self
    }

    pub fn direction_heuristic(mut self, heuristic: DirectionHeuristic) -> Self {
        self.options.direction_heuristic = heuristic;
        self
    }

    pub fn keep_raw_text(mut self, keep: bool) -> Self {
        self.options.keep_raw_text = keep;
        self
    }

    pub fn max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    pub fn parse(self) -> StatementResult<Vec<ParsedTransaction>> {
        self.parse_into::<ParsedTransaction>()
    }

    /// Parses and wraps the records in the `{ count, expenses }` response shape.
    pub fn report(self) -> StatementResult<StatementReport> {
        self.parse().map(StatementReport::new)
    }

    pub fn parse_into<T>(self) -> StatementResult<Vec<T>>
    where
        T: TryFrom<ParsedTransaction>,
        StatementParseError: From<T::Error>,
    {
        let content = match self.content {
            Some(content) => content,
            None => {
                let path = self
                    .filepath
                    .as_deref()
                    .ok_or(StatementParseError::MissingContentAndFilepath)?;
                read_bounded(path, self.max_input_len)?
            }
        };

        validate_input(&content, self.max_input_len)?;

        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref(), &content))?;

        format.parse(&content, self.options)
    }
}

/// Reads the text file at `path`, refusing it up front when it is larger than `max`.
fn read_bounded(path: &str, max: usize) -> StatementResult<String> {
    let len = fs::metadata(path)?.len();
    if len > max as u64 {
        return Err(StatementParseError::InputTooLarge {
            len: usize::try_from(len).unwrap_or(usize::MAX),
            max,
        });
    }

    Ok(fs::read_to_string(path)?)
}

fn validate_input(content: &str, max: usize) -> StatementResult<()> {
    if content.len() > max {
        return Err(StatementParseError::InputTooLarge {
            len: content.len(),
            max,
        });
    }

    if content.contains('\0') {
        return Err(StatementParseError::InvalidInput(
            "content contains NUL bytes; pass the statement's text layer, not the PDF".to_string(),
        ));
    }

    Ok(())
}
