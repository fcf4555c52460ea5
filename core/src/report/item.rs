//! Grading item templates parsed from grading sheet column headers.
//!
//! Header convention: a run of leading indent marks sets the nesting
//! level, a case-insensitive "comment" marks a free-text column, and a
//! trailing " /<max>" fraction becomes the rendered score suffix.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ReportConfig;

// Max-score fragment, e.g. " /5", " /0.5", " /.5".
const SCORE_PATTERN: &str = r"\s+/\d*\.?\d+";

fn score_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SCORE_PATTERN).expect("score pattern is valid"))
}

/// One column header parsed into a reusable render template.
///
/// Built once per roster column and reused across all students.
#[derive(Debug, Clone)]
pub struct GradingItem {
    prefix: String,
    suffix: String,
    is_comment: bool,
}

impl GradingItem {
    pub fn parse(cfg: &ReportConfig, header: &str) -> Self {
        let mut rest = header.trim();

        let mut prefix = String::new();
        let mut levels = 0usize;
        if !cfg.indent_mark.is_empty() {
            while let Some(stripped) = rest.strip_prefix(cfg.indent_mark.as_str()) {
                rest = stripped;
                levels += 1;
            }
        }
        if levels == 0 {
            // Top-level item: blank separator line before it.
            prefix.push('\n');
        } else {
            prefix.push_str(&" ".repeat(cfg.spaces_per_indent * levels));
        }

        let mut text = rest.to_string();
        let mut suffix = String::new();
        let is_comment = text.to_lowercase().contains("comment");
        if !is_comment {
            if let Some(found) = score_regex().find_iter(&text).last() {
                suffix = found.as_str().trim().to_string();
                // Drop the score fragment and anything after it.
                if let Some(pos) = text.rfind(&suffix) {
                    text.truncate(pos);
                    text.truncate(text.trim_end().len());
                }
            }
        }

        prefix.push_str(&text.replace('\n', " "));

        Self {
            prefix,
            suffix,
            is_comment,
        }
    }

    pub fn is_comment(&self) -> bool {
        self.is_comment
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Render one cell value into a report line ending in a single `\n`.
    ///
    /// Pure function of the template and the value.
    pub fn render(&self, cfg: &ReportConfig, value: &str) -> String {
        // Continuation lines align two columns past the visible prefix:
        // one for the colon, one for the space.
        let pad = " ".repeat(visible_len(&self.prefix) + 2);
        let value = value.replace('\n', &format!("\n{pad}"));
        let trimmed = value.trim();
        let shown = if self.is_comment {
            if trimmed.is_empty() || trimmed == "0" {
                cfg.no_comment_notice.as_str()
            } else {
                trimmed
            }
        } else if trimmed.is_empty() {
            cfg.no_value_notice.as_str()
        } else {
            trimmed
        };
        format!("{}: {}{}\n", self.prefix, shown, self.suffix)
    }
}

fn visible_len(prefix: &str) -> usize {
    prefix.trim_start().chars().count()
}
