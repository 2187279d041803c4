//! Quote file loading and random selection.

use crate::errors::Result;
use rand::{Rng, seq::SliceRandom};
use serde::Deserialize;
use std::path::Path;

/// Top level of the quote file
#[derive(Debug, Deserialize)]
struct QuoteFile {
    quotes: Vec<QuoteEntry>,
}

/// One `{quote, author}` pair
#[derive(Debug, Deserialize)]
struct QuoteEntry {
    quote: String,
    author: String,
}

/// Parses the quote file and formats each entry as `"<quote> - <author>"`.
pub fn parse_quotes(json: &str) -> Result<Vec<String>> {
    let file: QuoteFile = serde_json::from_str(json)?;
    Ok(file
        .quotes
        .into_iter()
        .map(|q| format!("{} - {}", q.quote, q.author))
        .collect())
}

/// Reads the whole quote file. Called on every request so edits to the file
/// show up without a restart.
pub async fn load_quotes(path: &Path) -> Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    parse_quotes(&contents)
}

/// Picks one quote uniformly at random, `None` if the list is empty.
pub fn pick_quote<'a, R: Rng + ?Sized>(quotes: &'a [String], rng: &mut R) -> Option<&'a str> {
    quotes.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use rand::{SeedableRng, rngs::StdRng};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "quotes": [
            {"quote": "Stay hungry, stay foolish.", "author": "Steve Jobs"},
            {"quote": "Simplicity is prerequisite for reliability.", "author": "Edsger Dijkstra"},
            {"quote": "Talk is cheap. Show me the code.", "author": "Linus Torvalds"}
        ]
    }"#;

    #[test]
    fn test_parse_quotes_formats_entries() {
        let quotes = parse_quotes(SAMPLE).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0], "Stay hungry, stay foolish. - Steve Jobs");
        assert_eq!(quotes[2], "Talk is cheap. Show me the code. - Linus Torvalds");
    }

    #[test]
    fn test_parse_quotes_rejects_wrong_shape() {
        let result = parse_quotes(r#"{"quotes": [{"text": "no author"}]}"#);
        assert!(matches!(result, Err(Error::Quotes(_))));
    }

    #[test]
    fn test_pick_quote_always_from_list() {
        let quotes = parse_quotes(SAMPLE).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = pick_quote(&quotes, &mut rng).unwrap();
            assert!(quotes.iter().any(|q| q == picked));
        }
    }

    #[test]
    fn test_pick_quote_empty_list() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_quote(&[], &mut rng).is_none());
    }

    #[tokio::test]
    async fn test_load_quotes_missing_file() {
        let result = load_quotes(Path::new("/nonexistent/quotes.json")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_load_quotes_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let quotes = load_quotes(&path).await.unwrap();
        assert_eq!(quotes.len(), 3);
    }
}
