//! URL detection in free text.
//!
//! FAQ answers are plain text that may mention web addresses. Detected
//! addresses become clickable OSC 8 hyperlinks when rendered and can be
//! opened in the system browser.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http://`, `https://` or a bare `www.` host, up to the next whitespace,
/// angle bracket, square bracket or quote.
pub(crate) static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>\[\]"']+"#).expect("Invalid URL regex pattern")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '}'];

/// A link found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo {
    /// Target to open; bare `www.` hosts get an `https://` scheme
    pub url: String,
    /// The text as written
    pub text: String,
    /// Start byte position in the source text
    pub start: usize,
    /// End byte position in the source text
    pub end: usize,
}

impl LinkInfo {
    pub fn new(url: String, text: String, start: usize, end: usize) -> Self {
        Self {
            url,
            text,
            start,
            end,
        }
    }
}

/// Trim sentence punctuation off the end of a match. A closing parenthesis
/// is kept when the URL itself opened one.
fn trim_trailing(candidate: &str) -> &str {
    let mut end = candidate.len();
    while let Some(c) = candidate[..end].chars().next_back() {
        if !TRAILING_PUNCTUATION.contains(&c) {
            break;
        }
        if c == ')' {
            let body = &candidate[..end];
            if body.matches('(').count() >= body.matches(')').count() {
                break;
            }
        }
        end -= c.len_utf8();
    }
    &candidate[..end]
}

fn normalize(text: &str) -> String {
    if text.len() >= 4 && text[..4].eq_ignore_ascii_case("www.") {
        format!("https://{}", text)
    } else {
        text.to_string()
    }
}

/// Detect every URL in `text`, in order of appearance.
pub fn detect_urls(text: &str) -> Vec<LinkInfo> {
    URL_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let trimmed = trim_trailing(m.as_str());
            // A bare scheme or "www." is not a link.
            let host = trimmed
                .split_once("://")
                .map(|(_, rest)| rest)
                .unwrap_or(&trimmed[4.min(trimmed.len())..]);
            if host.is_empty() {
                return None;
            }
            Some(LinkInfo::new(
                normalize(trimmed),
                trimmed.to_string(),
                m.start(),
                m.start() + trimmed.len(),
            ))
        })
        .collect()
}

/// The first URL in `text`, ready to open.
pub fn first_url(text: &str) -> Option<String> {
    detect_urls(text).into_iter().next().map(|link| link.url)
}
