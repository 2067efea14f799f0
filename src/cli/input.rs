//! Tokenizing of raw command lines

/// Splits a line into a lowercase command and its arguments
///
/// Returns `None` for blank lines. Arguments keep their case.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    parse_words(line.split_whitespace())
}

/// Same as [`parse_line`] for input that is already split into words
pub fn parse_words<I, S>(words: I) -> Option<(String, Vec<String>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = words.into_iter();
    let command = words.next()?.as_ref().trim().to_lowercase();
    if command.is_empty() {
        return None;
    }
    let args = words.map(|w| w.as_ref().to_string()).collect();
    Some((command, args))
}
