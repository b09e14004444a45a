// Niche (root label) extraction from the audience overview.

use regex::Regex;

use crate::parser::types::DEFAULT_NICHE;

const MIN_NICHE_CHARS: usize = 10;
const MAX_NICHE_CHARS: usize = 50;

pub struct NicheExtractor {
    audience_phrase: Regex,
}

impl Default for NicheExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NicheExtractor {
    pub fn new() -> Self {
        Self {
            // Phrase must end at punctuation or end of text, so long runs are
            // rejected instead of being cut at 50 chars.
            audience_phrase: Regex::new(
                r"(?i)\b(?:targeting|for|serving)\s+([^.!?,;\n]{10,50})(?:[.!?,;\n]|$)",
            )
            .unwrap(),
        }
    }

    /// Pick the niche label. Falls back to [`DEFAULT_NICHE`].
    pub fn extract(&self, audience_overview: Option<&str>) -> String {
        let Some(overview) = audience_overview else {
            return DEFAULT_NICHE.to_string();
        };

        for caps in self.audience_phrase.captures_iter(overview) {
            if let Some(phrase) = caps.get(1).map(|m| m.as_str().trim()) {
                if is_niche_length(phrase) {
                    return phrase.to_string();
                }
            }
        }

        let first_sentence = overview.split(['.', '!']).next().unwrap_or("").trim();
        if is_niche_length(first_sentence) {
            return first_sentence.to_string();
        }

        DEFAULT_NICHE.to_string()
    }
}

fn is_niche_length(s: &str) -> bool {
    (MIN_NICHE_CHARS..=MAX_NICHE_CHARS).contains(&s.chars().count())
}
