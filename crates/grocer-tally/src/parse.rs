/// Quantity assumed when a line carries none, or one that is not a clean
/// positive integer.
pub const DEFAULT_QUANTITY: u32 = 1;

/// One successfully parsed inventory line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedLine {
    pub item: String,
    pub quantity: u32,
}

/// ASCII alphanumerics, apostrophe and hyphen.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '-'
}

/// ASCII space, `\t`, `\n`, `\v`, `\f` and `\r`. Other Unicode spaces such as
/// NBSP are ordinary token characters.
pub fn is_token_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Non-empty runs between [`is_token_separator`] characters.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_token_separator).filter(|t| !t.is_empty())
}

/// Canonical item key for a raw token.
///
/// Strips leading and trailing non-word characters, keeps interior
/// punctuation as-is and lowercases ASCII letters only. Non-ASCII text in the
/// interior passes through untouched. A token made only of apostrophes and
/// hyphens names nothing and normalizes to the empty string, as does one with
/// no word characters at all; callers must not count an empty key.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| !is_word_char(c));
    if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return String::new();
    }
    trimmed.to_ascii_lowercase()
}

/// Parse `<item> [<quantity>]`, ignoring any further tokens.
///
/// Returns `None` for blank lines and for lines whose first token normalizes
/// to nothing. A missing or malformed quantity never rejects the line; it
/// falls back to [`DEFAULT_QUANTITY`].
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut parts = tokens(line);
    let item = normalize(parts.next()?);
    if item.is_empty() {
        return None;
    }
    let quantity = parts
        .next()
        .map(parse_quantity)
        .unwrap_or(DEFAULT_QUANTITY);
    Some(ParsedLine { item, quantity })
}

/// Whole-token base-10 parse into a strictly positive `i32`-range value.
fn parse_quantity(token: &str) -> u32 {
    token
        .parse::<i32>()
        .ok()
        .filter(|&q| q > 0)
        .and_then(|q| u32::try_from(q).ok())
        .unwrap_or(DEFAULT_QUANTITY)
}
