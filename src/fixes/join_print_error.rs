use super::{Fix, Rewrite, APP_ROUTER, FEED_SCREEN, POST_DETAIL_SCREEN};
use crate::config::Targets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PRINT_NAME_AND_ERROR_MAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)print\(\s*([^,]+),\s*name:\s*['"][^'"]*['"]\s*,\s*error:\s*(\{[^}]+\})\s*\);"#,
    )
    .unwrap()
});
static PRINT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"print\(\s*([^,]+),\s*name:\s*['"][^'"]*['"]\s*\);"#).unwrap());

/// Concatenates an `error:` map onto the printed message and drops `name:`.
pub struct JoinPrintError;

impl Fix for JoinPrintError {
    fn name(&self) -> &'static str {
        "join-print-error"
    }

    fn summary(&self) -> &'static str {
        "append error: maps to the print message and drop name: arguments"
    }

    fn default_targets(&self) -> Targets {
        Targets::files([FEED_SCREEN, POST_DETAIL_SCREEN, APP_ROUTER])
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        out.replace_all(&PRINT_NAME_AND_ERROR_MAP, |caps: &Captures| {
            format!(
                r#"print({} + " " + {}.toString());"#,
                caps[1].trim(),
                caps[2].trim()
            )
        });
        out.replace_all(&PRINT_NAME, "print(${1});");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_joined() {
        let input = "print(\n  'Failed to load',\n  name: 'Feed',\n  error: {'code': c},\n);";
        let out = JoinPrintError.rewrite(input);
        assert_eq!(out.text, input, "trailing comma before ) is not this pattern");

        let input = "print('Failed', name: 'Feed', error: {'code': c});";
        let out = JoinPrintError.rewrite(input);
        assert_eq!(out.text, r#"print('Failed' + " " + {'code': c}.toString());"#);
        assert_eq!(out.edits, 1);
    }

    #[test]
    fn test_name_only() {
        let out = JoinPrintError.rewrite("print(msg, name: 'Router');");
        assert_eq!(out.text, "print(msg);");
    }
}
