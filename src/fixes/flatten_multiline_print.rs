use super::{post_detail_only, Fix, Rewrite};
use crate::config::Targets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DEVELOPER_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import 'dart:developer' as developer;\n").unwrap());
static PRINT_WITH_NAMED_ARGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)([ \t]*)print\(\s*'[^']*'[^;]*?(name:\s*[^,]+|error:\s*\{[^}]*\})[^;]*?\);")
        .unwrap()
});
static MESSAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\(\s*'([^']*)'").unwrap());
static PRINT_THEN_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\('([^']*)'\),").unwrap());
static PRINT_THEN_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"print\('([^']*)'\)\s*\{").unwrap());
static PRINT_THEN_ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\('([^']*)'\)\s*=>").unwrap());
static NAMED_ARG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*('[^']*':\s*|name:\s*|error:\s*)").unwrap());

/// Collapses multi-line `print('msg', name: ..., error: {...})` calls to
/// `print('msg');` and repairs the fragments an earlier pass left behind.
pub struct FlattenMultilinePrint;

fn flatten(caps: &Captures) -> String {
    let whole = &caps[0];
    match MESSAGE.captures(whole) {
        Some(message) => format!("{}print('{}');", &caps[1], &message[1]),
        None => whole.to_string(),
    }
}

/// Drop argument lines orphaned from their call, up to and including the
/// next line holding a `;` or `}`.
fn drop_orphaned_arguments(content: &str) -> (String, usize) {
    let mut kept = Vec::new();
    let mut dropped = 0;
    let mut skipping = false;

    for line in content.split('\n') {
        if skipping {
            if line.contains(';') || line.contains('}') {
                skipping = false;
            }
            dropped += 1;
            continue;
        }

        if NAMED_ARG_LINE.is_match(line) {
            skipping = true;
            dropped += 1;
            continue;
        }

        kept.push(line);
    }

    (kept.join("\n"), dropped)
}

impl Fix for FlattenMultilinePrint {
    fn name(&self) -> &'static str {
        "flatten-multiline-print"
    }

    fn summary(&self) -> &'static str {
        "collapse multi-line print calls with named arguments to print('msg')"
    }

    fn default_targets(&self) -> Targets {
        post_detail_only()
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        out.replace_all(&DEVELOPER_IMPORT, "");
        out.replace_all(&PRINT_WITH_NAMED_ARGS, flatten);
        out.replace_all(&PRINT_THEN_COMMA, "print('${1}');");
        out.replace_all(&PRINT_THEN_BRACE, "print('${1}');\n    } catch (e) {");
        out.replace_all(&PRINT_THEN_ARROW, "print('${1}');\n      //");

        let (text, dropped) = drop_orphaned_arguments(&out.text);
        out.text = text;
        out.edits += dropped;
        out
    }
}
