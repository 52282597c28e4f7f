use super::{indent_of, post_detail_only, Fix, Rewrite};
use crate::config::Targets;
use crate::scanner::{scan_with, terminator, Balance, Delimiters};
use once_cell::sync::Lazy;
use regex::Regex;

static SAFE_NAVIGATION_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)class SafeNavigation\s*\{[^}]*\}").unwrap());
static HAPTIC_FEEDBACK_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)class HapticFeedback\s*\{[^}]*\}").unwrap());
static SHADOWING_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(Future<void>|void|Widget|dynamic)\s+(showModalBottomSheet|print|setState)\s*\([^{]*\)\s*\{[^}]*\}$",
    )
    .unwrap()
});
static TRY_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*try\s*\{").unwrap());
static HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(catch|on|finally)\b").unwrap());
static CHAINED_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\}\s*(catch|on|finally)\b").unwrap());
static BARE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\}\s*(//.*)?$").unwrap());

/// Drops local redefinitions of imported helpers and gives every handler-less
/// `try` block a `catch`.
pub struct CompleteTryBlocks;

impl Fix for CompleteTryBlocks {
    fn name(&self) -> &'static str {
        "complete-try-blocks"
    }

    fn summary(&self) -> &'static str {
        "remove shadowing helper definitions and add catch to bare try blocks"
    }

    fn default_targets(&self) -> Targets {
        post_detail_only()
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        out.replace_all(&SAFE_NAVIGATION_CLASS, "");
        out.replace_all(&HAPTIC_FEEDBACK_CLASS, "");
        out.replace_all(&SHADOWING_FUNCTION, "");

        let (text, added) = add_missing_catches(&out.text);
        out.text = text;
        out.edits += added;
        out
    }
}

/// The block is `lines[start..=end]`. It already has a handler when one is
/// chained onto the brace that closes the `try` itself, or when the next
/// non-blank line opens one. Handlers of nested blocks don't count.
fn has_handler(lines: &[&str], start: usize, end: usize) -> bool {
    let mut depth = Balance::of(lines[start], Delimiters::Braces);
    for line in &lines[start + 1..=end] {
        if depth.braces == 1 && CHAINED_HANDLER.is_match(line) {
            return true;
        }
        depth.absorb(line, Delimiters::Braces);
    }

    match lines[end + 1..].iter().find(|line| !line.trim().is_empty()) {
        Some(next) => HANDLER.is_match(next),
        // Nothing follows; leave the block alone.
        None => true,
    }
}

fn add_missing_catches(content: &str) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut fixed: Vec<String> = Vec::with_capacity(lines.len());
    let mut added = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if TRY_OPEN.is_match(line) {
            if let Some(block) = scan_with(&lines, i, Delimiters::Braces, terminator::always) {
                let closing = lines[block.end];
                if block.end > i
                    && BARE_CLOSE.is_match(closing.trim_end())
                    && !has_handler(&lines, i, block.end)
                {
                    let indent = indent_of(line);
                    // Pieces keep their `\r` after splitting on `\n`.
                    let cr = if line.ends_with('\r') { "\r" } else { "" };
                    fixed.extend(lines[i..block.end].iter().map(|l| l.to_string()));
                    fixed.push(format!("{indent}}} catch (e) {{{cr}"));
                    fixed.push(format!("{indent}  // Error caught{cr}"));
                    fixed.push(closing.to_string());
                    log::debug!("added catch to try block at line {}", i + 1);
                    added += 1;
                    i = block.end + 1;
                    continue;
                }
            }
        }

        fixed.push(line.to_string());
        i += 1;
    }

    (fixed.join("\n"), added)
}
