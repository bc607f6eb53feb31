//! Code-block extraction for model output.
//!
//! Models wrap code in Markdown fences but often add prose around it. The
//! frontend lifts code out of a single fence, so replies to the code-producing
//! tasks are reduced to exactly one fence (or left as trimmed text when the
//! model produced no fence at all).
//!
//! Matching runs in two stages so precedence is explicit:
//!
//! 1. [`find_tagged_block`]: an opening fence followed by an optional
//!    language tag and a newline, body running lazily to the next fence.
//! 2. [`find_any_block`]: any pair of fences, used only when stage 1 fails.

use std::sync::OnceLock;

use regex::Regex;

const FENCE: &str = "```";

/// A fenced block located in model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Language tag on the opening fence. `None` for stage-2 matches.
    pub language: Option<&'a str>,
    pub body: &'a str,
}

impl CodeBlock<'_> {
    /// Re-wraps the trimmed body in a fresh fence.
    pub fn to_fenced(&self) -> String {
        format!(
            "{FENCE}{}\n{}\n{FENCE}",
            self.language.unwrap_or_default(),
            self.body.trim()
        )
    }
}

fn tagged_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"```([A-Za-z0-9_]*)\n((?s:.*?))```").expect("tagged fence pattern is valid")
    })
}

fn any_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"```((?s:.*?))```").expect("fence pattern is valid"))
}

/// Stage 1: first fence whose opening line is a (possibly empty) language tag.
pub fn find_tagged_block(text: &str) -> Option<CodeBlock<'_>> {
    let captures = tagged_block_pattern().captures(text)?;
    Some(CodeBlock {
        language: Some(captures.get(1).map_or("", |m| m.as_str())),
        body: captures.get(2)?.as_str(),
    })
}

/// Stage 2: first pair of fences, whatever sits on the opening line.
pub fn find_any_block(text: &str) -> Option<CodeBlock<'_>> {
    let captures = any_block_pattern().captures(text)?;
    Some(CodeBlock {
        language: None,
        body: captures.get(1)?.as_str(),
    })
}

/// Reduces raw model output to a single fenced block.
///
/// Falls back to the trimmed input when no fence pair exists, so the result
/// is never absent. Applying this to its own output returns it unchanged.
pub fn extract_code_block(text: &str) -> String {
    find_tagged_block(text)
        .or_else(|| find_any_block(text))
        .map(|block| block.to_fenced())
        .unwrap_or_else(|| text.trim().to_string())
}
