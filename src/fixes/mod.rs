//! The catalogue of one-shot cleanups.
//!
//! Every fix is a pure function of the file text. Reading, writing and
//! target selection live in the runner.

mod collapse_print_args;
mod complete_try_blocks;
mod debug_print;
mod drop_orphan_lines;
mod flatten_multiline_print;
pub mod icons;
mod join_print_error;
mod named_print_args;
mod reduce_print_call;
mod strip_print_maps;

use crate::config::Targets;
use crate::error::{FixupError, Result};
use regex::{Regex, Replacer};

pub use collapse_print_args::CollapsePrintArgs;
pub use complete_try_blocks::CompleteTryBlocks;
pub use debug_print::DebugPrint;
pub use drop_orphan_lines::DropOrphanLines;
pub use flatten_multiline_print::FlattenMultilinePrint;
pub use icons::LucideIcons;
pub use join_print_error::JoinPrintError;
pub use named_print_args::NamedPrintArgs;
pub use reduce_print_call::ReducePrintCall;
pub use strip_print_maps::StripPrintMaps;

/// Result of running a fix over one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub edits: usize,
}

impl Rewrite {
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            edits: 0,
        }
    }

    /// Apply `re` everywhere, counting each match as one edit.
    pub fn replace_all<R: Replacer>(&mut self, re: &Regex, replacement: R) {
        let hits = re.find_iter(&self.text).count();
        if hits == 0 {
            return;
        }
        self.text = re.replace_all(&self.text, replacement).into_owned();
        self.edits += hits;
    }
}

pub trait Fix: Sync {
    /// Identifier used on the command line and in config files.
    fn name(&self) -> &'static str;

    fn summary(&self) -> &'static str;

    /// Files the fix was written for, relative to the application root.
    fn default_targets(&self) -> Targets;

    fn rewrite(&self, content: &str) -> Rewrite;
}

pub static CATALOGUE: &[&dyn Fix] = &[
    &CollapsePrintArgs,
    &StripPrintMaps,
    &DropOrphanLines,
    &CompleteTryBlocks,
    &NamedPrintArgs,
    &FlattenMultilinePrint,
    &ReducePrintCall,
    &JoinPrintError,
    &DebugPrint,
    &LucideIcons,
];

pub fn lookup(name: &str) -> Result<&'static dyn Fix> {
    CATALOGUE
        .iter()
        .copied()
        .find(|fix| fix.name() == name)
        .ok_or_else(|| FixupError::UnknownFix(name.to_string()))
}

pub fn is_known(name: &str) -> bool {
    CATALOGUE.iter().any(|fix| fix.name() == name)
}

// Target lists the cleanups were written against.
const FEED_SCREEN: &str = "lib/features/posts/presentation/mobile/screens/feed_screen.dart";
const POST_DETAIL_SCREEN: &str =
    "lib/features/posts/presentation/mobile/screens/post_detail_screen.dart";
const POST_DETAIL_DETAILS_SCREEN: &str =
    "lib/features/posts/presentation/mobile/screens/details/post_detail_screen.dart";
const VIDEO_DETAIL_SCREEN: &str =
    "lib/features/posts/presentation/mobile/screens/video_detail_screen.dart";
const SAVED_CONTENT_SCREEN: &str =
    "lib/features/posts/presentation/mobile/screens/saved_content_screen.dart";
const FULL_ARTICLE_DIALOG: &str =
    "lib/features/posts/presentation/shared/widgets/full_article_dialog.dart";
const OPPOSITION_DIALOG: &str =
    "lib/features/posts/presentation/shared/widgets/opposition_dialog.dart";
const FEED_ITEM: &str = "lib/features/posts/presentation/shared/widgets/feed_item.dart";
const PROFILE_REPOSITORY: &str =
    "lib/features/profile/data/repositories/profile_repository_impl.dart";
const SUBSCRIPTIONS_SCREEN: &str =
    "lib/features/settings/presentation/mobile/screens/subscriptions_screen.dart";
const APP_ROUTER: &str = "lib/core/navigation/app_router.dart";

const LOGGING_FILES: &[&str] = &[
    FEED_SCREEN,
    POST_DETAIL_SCREEN,
    VIDEO_DETAIL_SCREEN,
    SAVED_CONTENT_SCREEN,
    FULL_ARTICLE_DIALOG,
    OPPOSITION_DIALOG,
    FEED_ITEM,
    PROFILE_REPOSITORY,
    APP_ROUTER,
];

fn post_detail_only() -> Targets {
    Targets::files([POST_DETAIL_DETAILS_SCREEN])
}

/// Leading whitespace of a line.
fn indent_of(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<_> = CATALOGUE.iter().map(|fix| fix.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CATALOGUE.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("debug-print").unwrap().name(), "debug-print");
        assert!(matches!(lookup("nope"), Err(FixupError::UnknownFix(_))));
    }

    #[test]
    fn test_replace_all_counts_matches() {
        let re = Regex::new("a").unwrap();
        let mut rewrite = Rewrite::unchanged("banana");
        rewrite.replace_all(&re, "o");
        assert_eq!(rewrite.text, "bonono");
        assert_eq!(rewrite.edits, 3);
    }

    #[test]
    fn test_indent_of() {
        assert_eq!(indent_of("    print('x');"), "    ");
        assert_eq!(indent_of("\tx"), "\t");
        assert_eq!(indent_of("x"), "");
    }
}
