//! Plain-text message rules: keyword replies and prefix commands.

/// Second word of a prefix command that asks for a random quote
pub const QUOTES_KEYWORD: &str = "quotes";

/// Reply for the first keyword found in `content`, if any. Matching is
/// case-sensitive substring search and only the first rule applies.
#[must_use]
pub fn keyword_reply(content: &str, author_id: u64) -> Option<String> {
    if content.contains("time") {
        Some("I can provide that information".to_string())
    } else if content.contains("hola") {
        Some(format!("Hola <@{author_id}>"))
    } else {
        None
    }
}

/// The word following `prefix` when the message starts with it.
///
/// Returns `None` when the first word is not the prefix or nothing follows it.
#[must_use]
pub fn prefix_argument<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let mut words = content.split_whitespace();
    if words.next()? != prefix {
        return None;
    }
    words.next()
}

/// Whether the message is `<prefix> quotes`.
#[must_use]
pub fn is_quotes_request(content: &str, prefix: &str) -> bool {
    prefix_argument(content, prefix) == Some(QUOTES_KEYWORD)
}
