// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use html_escape::decode_html_entities;
use regex::Regex;

/// Streaming title scanner
///
/// Scans raw listing markup tag-by-tag, in document order, and yields one
/// name per title/link pair. The contract is a one-step lookback over the
/// linear tag stream: a `div` tag with `class="title"` arms the scanner,
/// and the next anchor emits its `href` with all `/` characters stripped.
/// Every `div` re-arms or disarms the scanner depending on its own class.
///
/// This is deliberately a tag-order heuristic, not a tree relationship;
/// the listing markup this targets relies on exactly these adjacency
/// semantics, so the scanner must not be rewritten against the parsed DOM.
pub struct TitleScanner {
    // Cached regex patterns for performance
    tag_regex: Regex,
    class_regex: Regex,
    href_regex: Regex,
}

impl Default for TitleScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleScanner {
    pub fn new() -> Self {
        // Opening tags only; end tags never touch the lookback state.
        let tag_regex = Regex::new(r#"(?is)<(div|a)\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
            .expect("Failed to compile tag regex");
        let class_regex = Regex::new(r#"(?is)\bclass\s*=\s*"([^"]*)""#)
            .expect("Failed to compile class regex");
        let href_regex =
            Regex::new(r#"(?is)\bhref\s*=\s*"([^"]*)""#).expect("Failed to compile href regex");

        Self {
            tag_regex,
            class_regex,
            href_regex,
        }
    }

    /// Extract the listing names from one page body, in document order
    pub fn scan(&self, body: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut last_div_was_title = false;

        for tag in self.tag_regex.captures_iter(body) {
            let tag_name = tag[1].to_ascii_lowercase();
            let attrs = tag.get(2).map(|m| m.as_str()).unwrap_or_default();

            if tag_name == "div" {
                last_div_was_title = self
                    .class_regex
                    .captures(attrs)
                    .is_some_and(|c| &c[1] == "title");
            } else if last_div_was_title {
                // The anchor right after a title div carries the name.
                last_div_was_title = false;
                if let Some(href) = self.href_regex.captures(attrs).and_then(|c| c.get(1)) {
                    let decoded = decode_html_entities(href.as_str());
                    names.push(decoded.replace('/', ""));
                }
            }
        }

        names
    }
}
