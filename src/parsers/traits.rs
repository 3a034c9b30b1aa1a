pub trait Parser {
    type Output;

    /// Extraction is tolerant: text it cannot make sense of yields no records.
    fn parse(&self, content: &str) -> Vec<Self::Output>;

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
