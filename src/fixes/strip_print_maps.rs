use super::{
    Fix, Rewrite, APP_ROUTER, FEED_ITEM, FEED_SCREEN, OPPOSITION_DIALOG, POST_DETAIL_SCREEN,
    PROFILE_REPOSITORY, SAVED_CONTENT_SCREEN,
};
use crate::config::Targets;
use once_cell::sync::Lazy;
use regex::Regex;

static PRINT_WITH_MAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)print\(\s*'([^']+)'\s*\+\s*\{[^}]+\}[^;]*\);").unwrap());
static TO_STRING_BEFORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.toString\(\)\s*\);").unwrap());
static COMMA_TO_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\.toString\(\);").unwrap());

/// Replaces `print('msg' + {map}...)` with a plain `debugPrint('msg')`.
pub struct StripPrintMaps;

impl Fix for StripPrintMaps {
    fn name(&self) -> &'static str {
        "strip-print-maps"
    }

    fn summary(&self) -> &'static str {
        "turn print('msg' + {map}) into debugPrint('msg') and drop stray .toString()"
    }

    fn default_targets(&self) -> Targets {
        Targets::files([
            FEED_SCREEN,
            POST_DETAIL_SCREEN,
            APP_ROUTER,
            SAVED_CONTENT_SCREEN,
            PROFILE_REPOSITORY,
            FEED_ITEM,
            OPPOSITION_DIALOG,
        ])
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        out.replace_all(&PRINT_WITH_MAP, "debugPrint('${1}');");
        out.replace_all(&TO_STRING_BEFORE_CLOSE, ");");
        out.replace_all(&COMMA_TO_STRING, ");");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_map_print() {
        let input = "    print('[Feed] loaded ' + {\n      'count': n,\n    }, .toString());\n";
        let out = StripPrintMaps.rewrite(input);
        assert_eq!(out.text, "    debugPrint('[Feed] loaded ');\n");
    }

    #[test]
    fn test_stray_to_string() {
        let out = StripPrintMaps.rewrite("log(e, .toString();\n");
        assert_eq!(out.text, "log(e);\n");
        assert_eq!(out.edits, 1);
    }
}
