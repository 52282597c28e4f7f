//! Material → Lucide icon migration.

mod table;

pub use table::ICON_MAPPING;

use super::{Fix, Rewrite};
use crate::config::{Targets, DEFAULT_EXTENSION};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

pub const LUCIDE_IMPORT: &str = "import 'package:lucide_icons/lucide_icons.dart';";

static ICON_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ICON_MAPPING
        .iter()
        .map(|(material, lucide)| {
            let pattern = format!(r"\b{}\b", regex::escape(material));
            (Regex::new(&pattern).unwrap(), *lucide)
        })
        .collect()
});
static IMPORT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^import\s+.*?;$").unwrap());

/// Swaps every known `Icons.*` identifier for its `LucideIcons.*`
/// counterpart and makes sure the file imports the Lucide package.
pub struct LucideIcons;

/// Insert the Lucide import after the last import statement, or at the top
/// of a file without imports. Files already mentioning the package are left
/// alone. The new line uses the file's own line ending.
pub fn add_lucide_import(content: &str) -> Cow<'_, str> {
    if content.to_lowercase().contains("lucide_icons") {
        return Cow::Borrowed(content);
    }

    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    match IMPORT_LINE.find_iter(content).last() {
        Some(last) => {
            let at = last.end();
            Cow::Owned(format!("{}{eol}{LUCIDE_IMPORT}{}", &content[..at], &content[at..]))
        }
        None => Cow::Owned(format!("{LUCIDE_IMPORT}{eol}{content}")),
    }
}

impl Fix for LucideIcons {
    fn name(&self) -> &'static str {
        "lucide-icons"
    }

    fn summary(&self) -> &'static str {
        "replace Material Icons.* with LucideIcons.* and add the lucide_icons import"
    }

    fn default_targets(&self) -> Targets {
        Targets::tree("lib", DEFAULT_EXTENSION)
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite::unchanged(content);
        for (pattern, lucide) in ICON_PATTERNS.iter() {
            out.replace_all(pattern, NoExpand(*lucide));
        }

        if out.edits > 0 {
            out.text = add_lucide_import(&out.text).into_owned();
        }
        out
    }
}
