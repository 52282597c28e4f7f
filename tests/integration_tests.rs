use fixup::config::{ConfigFile, RunConfig, Targets};
use fixup::fixes::{self, Fix, CATALOGUE};
use fixup::report::Outcome;
use fixup::runner;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Helper to create a source file inside the scratch directory
fn create_source(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

const BROKEN_SCREEN: &str = r#"import 'package:flutter/material.dart';
import 'dart:developer' as developer;

class FeedScreen extends StatelessWidget {
  void load() {
    developer.log('Loading feed');
    print('Loaded', name: 'Feed', error: {'count': 3});
    print('[Feed] ' + {'id': id}.toString());
    print('Done', );
    try {
      fetch();
    }
    render();
  }

  Widget build(BuildContext context) {
    return IconButton(icon: Icon(Icons.close), onPressed: load);
  }
}
"#;

#[cfg(test)]
mod runner_tests {
    use super::*;

    #[test]
    fn test_file_list_run_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = create_source(dir.path(), "lib/feed.dart", BROKEN_SCREEN);

        let fix = fixes::lookup("debug-print").unwrap();
        let config = RunConfig::new(Targets::files(["lib/feed.dart"])).with_base_dir(dir.path());
        let report = runner::run(fix, &config).unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(matches!(report.files[0].outcome, Outcome::Changed { edits: 3 }));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("debugPrint('Loading feed');"));
        assert!(written.contains("debugPrint('Done');"));
        assert!(written.contains(".entries.map((e) => '${e.key}: ${e.value}')"));
    }

    #[test]
    fn test_missing_file_does_not_stop_others() {
        let dir = TempDir::new().unwrap();
        create_source(dir.path(), "b.dart", "print('Saved', name: 'Post');\n");

        let fix = fixes::lookup("named-print-args").unwrap();
        let config = RunConfig::new(Targets::files(["a.dart", "b.dart"])).with_base_dir(dir.path());
        let report = runner::run(fix, &config).unwrap();

        assert_eq!(report.files[0].outcome, Outcome::Missing);
        assert_eq!(report.files[1].outcome, Outcome::Changed { edits: 1 });
        assert_eq!(report.failures(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("b.dart")).unwrap(),
            "print('Saved');\n"
        );
    }

    #[test]
    fn test_unreadable_file_reported_as_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected fails to read.
        fs::create_dir(dir.path().join("folder.dart")).unwrap();
        create_source(dir.path(), "ok.dart", "x();\n");

        let fix = fixes::lookup("drop-orphan-lines").unwrap();
        let config =
            RunConfig::new(Targets::files(["folder.dart", "ok.dart"])).with_base_dir(dir.path());
        let report = runner::run(fix, &config).unwrap();

        assert!(matches!(report.files[0].outcome, Outcome::Failed { .. }));
        assert_eq!(report.files[1].outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = TempDir::new().unwrap();
        let path = create_source(dir.path(), "feed.dart", BROKEN_SCREEN);

        let fix = fixes::lookup("debug-print").unwrap();
        let config = RunConfig::new(Targets::files([path.clone()])).with_dry_run(true);
        let report = runner::run(fix, &config).unwrap();

        assert!(report.dry_run);
        assert!(matches!(report.files[0].outcome, Outcome::Changed { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), BROKEN_SCREEN);
    }

    #[test]
    fn test_tree_walk_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        create_source(dir.path(), "lib/a.dart", "Icon(Icons.search);\n");
        create_source(dir.path(), "lib/nested/b.dart", "import 'x.dart';\nIcon(Icons.add);\n");
        create_source(dir.path(), "lib/nested/c.dart", "Text('no icons');\n");
        create_source(dir.path(), "lib/readme.md", "Icons.search\n");

        let fix = fixes::lookup("lucide-icons").unwrap();
        let config = RunConfig::new(fix.default_targets()).with_base_dir(dir.path());
        let report = runner::run(fix, &config).unwrap();

        assert_eq!(report.files.len(), 3, "only .dart files are visited");
        assert_eq!(report.modified().count(), 2);
        assert_eq!(report.total_edits(), 2);

        assert_eq!(
            fs::read_to_string(dir.path().join("lib/a.dart")).unwrap(),
            "import 'package:lucide_icons/lucide_icons.dart';\nIcon(LucideIcons.search);\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("lib/nested/b.dart")).unwrap(),
            "import 'x.dart';\nimport 'package:lucide_icons/lucide_icons.dart';\nIcon(LucideIcons.plus);\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("lib/readme.md")).unwrap(),
            "Icons.search\n"
        );
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let fix = fixes::lookup("lucide-icons").unwrap();
        let config = RunConfig::new(Targets::tree("nope", "dart")).with_base_dir(dir.path());
        assert!(runner::run(fix, &config).is_err());
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_config_file_base_dir_relative_to_file() {
        let dir = TempDir::new().unwrap();
        let path = create_source(
            dir.path(),
            "conf/fixup.json",
            r#"{ "base_dir": "../app", "fixes": { "debug-print": { "files": ["main.dart"] } } }"#,
        );

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.base_dir, Some(dir.path().join("conf").join("../app")));
        assert!(config.check_names(fixes::is_known).is_ok());
        assert_eq!(
            config.targets_for("debug-print"),
            Some(&Targets::files(["main.dart"]))
        );
    }

    #[test]
    fn test_config_file_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = create_source(dir.path(), "bad.json", "{ not json");
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}

#[cfg(test)]
mod fix_tests {
    use super::*;

    // Each fix reaches its fixed point in a single pass.
    #[test]
    fn test_every_fix_is_idempotent() {
        for fix in CATALOGUE {
            let once = fix.rewrite(BROKEN_SCREEN);
            let twice = fix.rewrite(&once.text);
            assert_eq!(once.text, twice.text, "{} changed its own output", fix.name());
            assert_eq!(twice.edits, 0, "{} reported edits on a second pass", fix.name());
        }
    }

    #[test]
    fn test_fixes_without_matches_are_noops() {
        let clean = "void main() {\n  runApp(const App());\n}\n";
        for fix in CATALOGUE {
            let out = fix.rewrite(clean);
            assert_eq!(out.text, clean, "{} touched clean input", fix.name());
            assert_eq!(out.edits, 0);
        }
    }

    #[test]
    fn test_default_targets_are_relative() {
        for fix in CATALOGUE {
            match fix.default_targets() {
                Targets::Files { files } => {
                    assert!(!files.is_empty(), "{} has no targets", fix.name());
                    assert!(files.iter().all(|f| f.is_relative()));
                }
                Targets::Tree { root, extension } => {
                    assert!(root.is_relative());
                    assert_eq!(extension, "dart");
                }
            }
        }
    }

    #[test]
    fn test_collapse_then_strip_maps() {
        let source = "    print('[Post] liked ' + {\n      'id': id,\n    },\n      .toString();\n";
        let collapsed = fixes::CollapsePrintArgs.rewrite(source);
        assert_eq!(
            collapsed.text,
            "    print('[Post] liked ' + {\n      'id': id,\n    }.toString();\n"
        );

        let stripped = fixes::StripPrintMaps.rewrite(&collapsed.text);
        assert_eq!(stripped.text, "    debugPrint('[Post] liked ');\n");
    }
}
