use super::{Fix, Rewrite, LOGGING_FILES, SUBSCRIPTIONS_SCREEN};
use crate::config::Targets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DEVELOPER_LOG: Lazy<Regex> = Lazy::new(|| Regex::new(r"developer\.log\(([^)]+)\);").unwrap());
static PRINT_NAME_AND_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"print\(\s*(?:'(.*?)'|"(.*?)")\s*,\s*name:\s*['"][^'"]*['"]\s*,\s*(?:error|stackTrace):\s*([^;]+)\s*\);"#,
    )
    .unwrap()
});
static PRINT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"print\(\s*(?:'(.*?)'|"(.*?)")\s*,\s*name:\s*['"][^'"]*['"]\s*\);"#).unwrap()
});

/// Rewrites `developer.log`-style calls that were renamed to `print` but kept
/// their named arguments.
pub struct NamedPrintArgs;

/// The message literal, whichever quote style it used.
fn message<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str())
}

impl Fix for NamedPrintArgs {
    fn name(&self) -> &'static str {
        "named-print-args"
    }

    fn summary(&self) -> &'static str {
        "fold name:/error: print arguments into the message and replace developer.log"
    }

    fn default_targets(&self) -> Targets {
        let mut files: Vec<&str> = LOGGING_FILES.to_vec();
        let router = files.len() - 1;
        files.insert(router, SUBSCRIPTIONS_SCREEN);
        Targets::files(files)
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        // developer.log first, so the calls it produces are folded in the same pass.
        out.replace_all(&DEVELOPER_LOG, "print(${1});");
        out.replace_all(&PRINT_NAME_AND_ERROR, |caps: &Captures| {
            format!("print('[{}] ' + {}.toString());", message(caps), &caps[3])
        });
        out.replace_all(&PRINT_NAME, |caps: &Captures| {
            format!("print('{}');", message(caps))
        });
        out
    }
}
