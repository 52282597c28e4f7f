use super::{indent_of, post_detail_only, Fix, Rewrite};
use crate::config::Targets;
use crate::scanner::{line_sequence, scan_with, terminator, Delimiters};
use once_cell::sync::Lazy;
use regex::Regex;

static MESSAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\('([^']+)'").unwrap());

/// Replaces a whole `print(...)` call that carries `name:`/`error:`
/// arguments with `print('msg');`, following the call's parens across lines.
pub struct ReducePrintCall;

fn has_named_args(line: &str) -> bool {
    line.contains("name:") || line.contains("error:")
}

fn starts_named_print(lines: &[&str], index: usize) -> bool {
    lines[index].contains("print(")
        && (has_named_args(lines[index])
            || lines.get(index + 1).is_some_and(|next| has_named_args(next)))
}

fn line_ending(text: &str) -> &str {
    if text.ends_with("\r\n") {
        "\r\n"
    } else if text.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

impl Fix for ReducePrintCall {
    fn name(&self) -> &'static str {
        "reduce-print-call"
    }

    fn summary(&self) -> &'static str {
        "replace print calls carrying name:/error: arguments with print('msg')"
    }

    fn default_targets(&self) -> Targets {
        post_detail_only()
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let lines = line_sequence(content);
        let mut out = Rewrite {
            text: String::with_capacity(content.len()),
            edits: 0,
        };
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if starts_named_print(&lines, i) {
                if let Some(call) = scan_with(&lines, i, Delimiters::Parens, terminator::always) {
                    if let Some(caps) = MESSAGE.captures(&call.text) {
                        let reduced = format!(
                            "{}print('{}');{}",
                            indent_of(line),
                            &caps[1],
                            line_ending(&call.text)
                        );
                        if reduced != call.text {
                            out.edits += 1;
                        }
                        out.text.push_str(&reduced);
                        i = call.end + 1;
                        continue;
                    }
                }
            }

            out.text.push_str(line);
            i += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_call_reduced() {
        let input = "  onTap() {\n    print('Tapped',\n      name: 'Feed',\n      error: e);\n  }\n";
        let out = ReducePrintCall.rewrite(input);
        assert_eq!(out.text, "  onTap() {\n    print('Tapped');\n  }\n");
        assert_eq!(out.edits, 1);
    }

    #[test]
    fn test_lookahead_trigger() {
        let input = "print('Saved'\n  , error: err);\nok();";
        let out = ReducePrintCall.rewrite(input);
        assert_eq!(out.text, "print('Saved');\nok();");
    }

    #[test]
    fn test_no_message_keeps_line() {
        let input = "print(value, name: 'x');\n";
        assert_eq!(ReducePrintCall.rewrite(input).text, input);
    }
}
