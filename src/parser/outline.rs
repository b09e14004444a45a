// Outline extraction from free-form strategy text.
//
// Recognised structure (everything else is ignored):
// - `# Name` / `## Name`          pillar heading
// - `Pillar 2: Name`              pillar heading (also after `#` markers)
// - `keywords: a, b; c`           keyword list (also `keyword`, `tag`, `tags`)
// - `content types: a, b`         content type list (also `format(s)`)
// - first other non-empty line    pillar description
//
// Markdown bullets and bold markers around the labels are tolerated.
// Lines before the first heading are preamble and dropped.

use log::debug;
use regex::Regex;

use crate::parser::types::{MAX_PILLARS, Pillar};

/// Headings shorter than this do not open a pillar.
const MIN_PILLAR_NAME_CHARS: usize = 4;
/// List entries shorter than this are dropped.
const MIN_TOKEN_CHARS: usize = 3;

pub struct OutlineParser {
    markdown_heading: Regex,
    pillar_prefix: Regex,
    keyword_line: Regex,
    content_type_line: Regex,
    description_label: Regex,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineParser {
    pub fn new() -> Self {
        Self {
            markdown_heading: Regex::new(r"^\s*#{1,2}\s+(.*)$").unwrap(),
            pillar_prefix: Regex::new(r"(?i)^\s*[*_]*\s*pillar\s+\d+\s*[*_]*\s*:\s*[*_]*\s*(.*)$")
                .unwrap(),
            keyword_line: Regex::new(
                r"(?i)^\s*(?:[-*+]\s+)?[*_]*\s*(?:keywords?|tags?)\s*[*_]*\s*:\s*[*_]*\s*(.*)$",
            )
            .unwrap(),
            content_type_line: Regex::new(
                r"(?i)^\s*(?:[-*+]\s+)?[*_]*\s*(?:content[\s-]*types?|formats?)\s*[*_]*\s*:\s*[*_]*\s*(.*)$",
            )
            .unwrap(),
            description_label: Regex::new(r"(?i)^\s*(?:[-*+]\s+)?[*_]*\s*description\s*[*_]*\s*:\s*[*_]*\s*")
                .unwrap(),
        }
    }

    /// Extract pillars from `content`. Never fails; text without headings
    /// yields an empty list.
    pub fn parse_pillars(&self, content: &str) -> Vec<Pillar> {
        let mut pillars: Vec<Pillar> = Vec::new();
        let mut sections: Vec<Vec<&str>> = Vec::new();
        // `None` while inside preamble or a section whose heading was too short.
        let mut current: Option<usize> = None;

        for raw in content.lines() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if let Some(heading) = self.heading_text(line) {
                let name = clean_heading(&heading);
                if name.chars().count() >= MIN_PILLAR_NAME_CHARS {
                    pillars.push(Pillar { name, ..Pillar::default() });
                    sections.push(Vec::new());
                    current = Some(pillars.len() - 1);
                } else {
                    debug!("skipping short heading {:?}", name);
                    current = None;
                }
                continue;
            }

            if let Some(idx) = current {
                sections[idx].push(line);
            }
        }

        for (pillar, body) in pillars.iter_mut().zip(&sections) {
            self.fill_section(pillar, body);
        }

        if pillars.len() > MAX_PILLARS {
            debug!("truncating {} pillars to {}", pillars.len(), MAX_PILLARS);
            pillars.truncate(MAX_PILLARS);
        }
        pillars
    }

    /// Heading text if `line` is a pillar heading, markers still attached.
    fn heading_text(&self, line: &str) -> Option<String> {
        if let Some(caps) = self.markdown_heading.captures(line) {
            let rest = caps.get(1).map_or("", |m| m.as_str());
            // `## Pillar 1: Tutorials`
            if let Some(inner) = self.pillar_prefix.captures(rest) {
                return Some(inner.get(1).map_or("", |m| m.as_str()).to_string());
            }
            return Some(rest.to_string());
        }
        self.pillar_prefix
            .captures(line)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
    }

    fn fill_section(&self, pillar: &mut Pillar, body: &[&str]) {
        let mut keywords: Option<Vec<String>> = None;
        let mut content_types: Option<Vec<String>> = None;
        let mut description: Option<String> = None;

        for line in body {
            if let Some(caps) = self.keyword_line.captures(line) {
                if keywords.is_none() {
                    keywords = Some(split_list(caps.get(1).map_or("", |m| m.as_str())));
                }
                continue;
            }
            if let Some(caps) = self.content_type_line.captures(line) {
                if content_types.is_none() {
                    content_types = Some(split_list(caps.get(1).map_or("", |m| m.as_str())));
                }
                continue;
            }
            if description.is_none() {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                let text = self.description_label.replace(trimmed, "");
                let text = text.trim().trim_start_matches(['-', '*', '+']).trim();
                if !text.is_empty() {
                    description = Some(text.to_string());
                }
            }
        }

        pillar.keywords = keywords.unwrap_or_default();
        pillar.content_types = content_types.unwrap_or_default();
        pillar.description = description.unwrap_or_default();
        pillar.truncate_to_caps();
    }
}

fn clean_heading(raw: &str) -> String {
    raw.replace('*', "")
        .trim_matches(|c: char| c == '_' || c == ':' || c.is_whitespace())
        .to_string()
}

/// Split a `,`/`;` separated list, dropping entries that are too short.
fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(content: &str) -> Vec<Pillar> {
        OutlineParser::new().parse_pillars(content)
    }

    #[test]
    fn test_headings_delimit_sections() {
        let pillars = parse(
            "## Tutorials\nkeywords: react, hooks, state\ncontent types: video, blog\n## Behind the Scenes\nkeywords: vlog, process",
        );
        assert_eq!(pillars.len(), 2);
        assert_eq!(pillars[0].name, "Tutorials");
        assert_eq!(pillars[0].keywords, vec!["react", "hooks", "state"]);
        assert_eq!(pillars[0].content_types, vec!["video", "blog"]);
        assert_eq!(pillars[1].name, "Behind the Scenes");
        assert_eq!(pillars[1].keywords, vec!["vlog", "process"]);
        assert!(pillars[1].content_types.is_empty());
    }

    #[rstest]
    #[case("# Tutorials", "Tutorials")]
    #[case("## **Tutorials**", "Tutorials")]
    #[case("Pillar 1: Tutorials", "Tutorials")]
    #[case("pillar 12: Deep Dives", "Deep Dives")]
    #[case("## Pillar 3: Reviews", "Reviews")]
    #[case("**Pillar 2:** Community", "Community")]
    fn test_heading_forms(#[case] line: &str, #[case] expected: &str) {
        let pillars = parse(line);
        assert_eq!(pillars.len(), 1);
        assert_eq!(pillars[0].name, expected);
    }

    #[rstest]
    #[case("### Too deep")]
    #[case("#NoSpace")]
    #[case("Tutorials")]
    fn test_non_headings_are_ignored(#[case] line: &str) {
        assert!(parse(line).is_empty());
    }

    #[test]
    fn test_short_heading_closes_section_without_pillar() {
        let pillars = parse("## Vlogs\nkeywords: daily, travel\n## FAQ\nkeywords: support, help");
        assert_eq!(pillars.len(), 1);
        assert_eq!(pillars[0].keywords, vec!["daily", "travel"]);
    }

    #[rstest]
    #[case("keywords: alpha, beta")]
    #[case("Keyword: alpha; beta")]
    #[case("TAGS: alpha, beta")]
    #[case("- **Tags:** alpha, beta")]
    #[case("**Keywords**: alpha ,  beta ")]
    fn test_keyword_line_variants(#[case] line: &str) {
        let pillars = parse(&format!("## Section\n{}", line));
        assert_eq!(pillars[0].keywords, vec!["alpha", "beta"]);
    }

    #[rstest]
    #[case("content types: video, blog")]
    #[case("Content Type: video; blog")]
    #[case("formats: video, blog")]
    #[case("- Format: video, blog")]
    #[case("content-types: video, blog")]
    fn test_content_type_line_variants(#[case] line: &str) {
        let pillars = parse(&format!("## Section\n{}", line));
        assert_eq!(pillars[0].content_types, vec!["video", "blog"]);
    }

    #[test]
    fn test_short_tokens_dropped_and_caps_applied() {
        let pillars = parse("## Section\nkeywords: ai, ml, rust, go, wasm, tokio, serde\ncontent types: tv, blog, video, reels, shorts");
        assert_eq!(pillars[0].keywords, vec!["rust", "wasm", "tokio"]);
        assert_eq!(pillars[0].content_types, vec!["blog", "video", "reels"]);
    }

    #[test]
    fn test_first_list_line_wins() {
        let pillars = parse("## Section\nkeywords: first, list\nkeywords: second, list");
        assert_eq!(pillars[0].keywords, vec!["first", "list"]);
    }

    #[test]
    fn test_lists_do_not_leak_across_sections() {
        let pillars = parse("## One pillar\n## Two pillar\nkeywords: only, here");
        assert!(pillars[0].keywords.is_empty());
        assert_eq!(pillars[1].keywords, vec!["only", "here"]);
    }

    #[test]
    fn test_pillar_cap_keeps_earliest() {
        let text = (1..=6)
            .map(|i| format!("## Theme {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let pillars = parse(&text);
        let names: Vec<&str> = pillars.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Theme 1", "Theme 2", "Theme 3", "Theme 4"]);
    }

    #[test]
    fn test_description_is_first_prose_line() {
        let pillars = parse("intro text\n## Tutorials\n\nStep by step guides.\nkeywords: react\nMore prose");
        assert_eq!(pillars[0].description, "Step by step guides.");
    }

    #[test]
    fn test_description_label_is_stripped() {
        let pillars = parse("## Tutorials\n- **Description:** Hands-on lessons\nkeywords: react");
        assert_eq!(pillars[0].description, "Hands-on lessons");
    }

    #[test]
    fn test_crlf_input() {
        let pillars = parse("## Tutorials\r\nkeywords: react, hooks\r\n");
        assert_eq!(pillars[0].name, "Tutorials");
        assert_eq!(pillars[0].keywords, vec!["react", "hooks"]);
    }
}
