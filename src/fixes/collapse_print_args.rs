use super::{Fix, Rewrite, LOGGING_FILES};
use crate::config::Targets;
use crate::scanner::{line_sequence, terminator, Chunk, Delimiters, Statements};
use once_cell::sync::Lazy;
use regex::Regex;

static MAP_THEN_TO_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\},\s*\n\s*\.toString\(\);").unwrap());
static DANGLING_TO_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n\s*\.toString\(\);").unwrap());
static NAME_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#",\s*name:\s*['"][^'"]*['"]"#).unwrap());
static STACK_TRACE_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*stackTrace:\s*[^,)]+").unwrap());

/// Gathers each `print(` call carrying a literal or map into one statement
/// and strips the named arguments `print` does not take.
pub struct CollapsePrintArgs;

fn starts_print_with_args(lines: &[&str], index: usize) -> bool {
    let line = lines[index];
    line.contains("print(") && (line.contains('{') || line.contains('\'') || line.contains('"'))
}

impl Fix for CollapsePrintArgs {
    fn name(&self) -> &'static str {
        "collapse-print-args"
    }

    fn summary(&self) -> &'static str {
        "join multi-line print calls and drop name:/stackTrace: arguments"
    }

    fn default_targets(&self) -> Targets {
        Targets::files(LOGGING_FILES.iter().copied())
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let lines = line_sequence(content);
        let mut out = Rewrite {
            text: String::with_capacity(content.len()),
            edits: 0,
        };

        let chunks = Statements::new(
            &lines,
            Delimiters::Both,
            starts_print_with_args,
            terminator::closes_call,
        );

        for chunk in chunks {
            match chunk {
                Chunk::Line(line) => out.text.push_str(line),
                Chunk::Statement(statement) => {
                    let mut fixed = Rewrite::unchanged(&statement.text);
                    fixed.replace_all(&MAP_THEN_TO_STRING, "}.toString();");
                    fixed.replace_all(&DANGLING_TO_STRING, ".toString();");
                    fixed.replace_all(&NAME_ARG, "");
                    fixed.replace_all(&STACK_TRACE_ARG, "");

                    out.text.push_str(&fixed.text);
                    out.edits += fixed.edits;
                }
            }
        }

        out
    }
}
