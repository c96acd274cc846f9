// Splits raw document text into candidate address blocks. Blank lines always
// close a block; an address-indicator line whose predecessor carries no
// indicator also forces a boundary, which separates a trailing address from
// the prose that precedes it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Line-level cues that a new address is starting.
    static ref ADDRESS_INDICATORS: Vec<Regex> = vec![
        // Indian PIN code
        Regex::new(r"\b\d{6}\b").unwrap(),
        // Street number followed by text
        Regex::new(r"(?i)\b\d+[A-Za-z]?,\s*[A-Za-z\s]+").unwrap(),
        // Common building/street elements
        Regex::new(r"(?i)\b[A-Za-z]+[\s-]+(?:Complex|Plaza|Towers|Building|Street|Road|Lane|Avenue)\b").unwrap(),
        // Floor/sector/block markers
        Regex::new(r"(?i)(?:^|\s)(?:Floor|Level|Block|Sector|Phase)\s+[A-Za-z0-9-]+\b").unwrap(),
    ];
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref COMMA_RUN: Regex = Regex::new(r"[,\s]*,[,\s]*").unwrap();
}

pub struct BlockSegmenter;

impl BlockSegmenter {
    /// Pure function of the input text; a document with neither blank lines
    /// nor indicator lines yields exactly one block.
    pub fn segment(text: &str) -> Vec<String> {
        let mut blocks: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    blocks.push(current.join(" "));
                    current.clear();
                }
                continue;
            }

            let previous_has_indicator = current
                .last()
                .map(|prev| Self::has_indicator(prev))
                .unwrap_or(false);
            if Self::has_indicator(line) && !current.is_empty() && !previous_has_indicator {
                blocks.push(current.join(" "));
                current.clear();
            }

            current.push(line);
        }
        if !current.is_empty() {
            blocks.push(current.join(" "));
        }

        blocks
            .iter()
            .map(|block| Self::clean_block(block))
            .filter(|block| !block.is_empty())
            .collect()
    }

    fn has_indicator(line: &str) -> bool {
        ADDRESS_INDICATORS.iter().any(|pattern| pattern.is_match(line))
    }

    /// Collapses whitespace, normalizes comma runs to ", " and trims stray
    /// separators.
    pub fn clean_block(block: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(block, " ");
        let normalized = COMMA_RUN.replace_all(&collapsed, ", ");
        normalized.trim_matches(|c: char| c == ' ' || c == ',').to_string()
    }
}
