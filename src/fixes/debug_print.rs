use super::{Fix, Rewrite, LOGGING_FILES};
use crate::config::Targets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PRINT_MAP_TO_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"print\(\s*'([^']+)'\s*\+\s*(\{[^}]+\})\.toString\(\)\s*\);").unwrap()
});
static PRINT_VALUE_COMMA_TO_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"print\(\s*'([^']+)'\s*\+\s*(\w+)\s*,\s*\.toString\(\)\s*\);").unwrap()
});
static PRINT_TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"print\(\s*'([^']+)'\s*,\s*\);").unwrap());
static DEVELOPER_LOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"developer\.log\('([^']+)'\);").unwrap());

/// Final pass over the print calls earlier fixes produced: everything
/// becomes a well-formed `debugPrint`.
pub struct DebugPrint;

impl Fix for DebugPrint {
    fn name(&self) -> &'static str {
        "debug-print"
    }

    fn summary(&self) -> &'static str {
        "rewrite malformed print/developer.log calls as debugPrint"
    }

    fn default_targets(&self) -> Targets {
        Targets::files(LOGGING_FILES.iter().copied())
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        out.replace_all(&PRINT_MAP_TO_STRING, |caps: &Captures| {
            format!(
                "debugPrint('{} | ' + {}.entries.map((e) => '${{e.key}}: ${{e.value}}').join(', '));",
                &caps[1], &caps[2]
            )
        });
        out.replace_all(&PRINT_VALUE_COMMA_TO_STRING, |caps: &Captures| {
            format!("debugPrint('{} | ' + {}.toString());", &caps[1], &caps[2])
        });
        out.replace_all(&PRINT_TRAILING_COMMA, |caps: &Captures| {
            format!("debugPrint('{}');", &caps[1])
        });
        out.replace_all(&DEVELOPER_LOG, |caps: &Captures| {
            format!("debugPrint('{}');", &caps[1])
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_entries_joined() {
        let out = DebugPrint.rewrite("print('[Feed] ' + {'id': id}.toString());");
        assert_eq!(
            out.text,
            "debugPrint('[Feed]  | ' + {'id': id}.entries.map((e) => '${e.key}: ${e.value}').join(', '));"
        );
    }

    #[test]
    fn test_value_and_trailing_comma_shapes() {
        let out = DebugPrint.rewrite("print('[Err] ' + e, .toString());\nprint('Done', );\n");
        assert_eq!(
            out.text,
            "debugPrint('[Err]  | ' + e.toString());\ndebugPrint('Done');\n"
        );
        assert_eq!(out.edits, 2);
    }

    #[test]
    fn test_developer_log() {
        let out = DebugPrint.rewrite("developer.log('ready');");
        assert_eq!(out.text, "debugPrint('ready');");
    }
}
