use crate::config::{RunConfig, Targets};
use crate::error::{FixupError, Result};
use crate::fixes::Fix;
use crate::report::{FileReport, Outcome, Report};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand the configured targets into concrete file paths.
pub fn collect_targets(config: &RunConfig) -> Result<Vec<PathBuf>> {
    config.targets.validate()?;

    match &config.targets {
        Targets::Files { files } => Ok(files.iter().map(|f| config.resolve(f)).collect()),
        Targets::Tree { root, extension } => walk_tree(&config.resolve(root), extension),
    }
}

/// Every file below `root` whose extension is `extension`, in path order.
/// Unreadable entries below the root are skipped with a warning.
fn walk_tree(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FixupError::InvalidTargets(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let extension = extension.trim_start_matches('.');
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let matches = entry.path().extension().is_some_and(|ext| ext == extension);
        if entry.file_type().is_file() && matches {
            found.push(entry.into_path());
        }
    }

    log::info!("found {} .{} files under {}", found.len(), extension, root.display());
    Ok(found)
}

fn apply_to_file(path: &Path, fix: &dyn Fix, dry_run: bool) -> Result<Outcome> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Outcome::Missing),
        Err(err) => return Err(FixupError::io(path, err)),
    };

    let rewrite = fix.rewrite(&content);
    if rewrite.text == content {
        return Ok(Outcome::Unchanged);
    }

    if dry_run {
        log::info!("{}: would apply {} edits", path.display(), rewrite.edits);
    } else {
        fs::write(path, &rewrite.text).map_err(|err| FixupError::io(path, err))?;
        log::debug!("{}: wrote {} bytes", path.display(), rewrite.text.len());
    }

    Ok(Outcome::Changed {
        edits: rewrite.edits,
    })
}

/// Read, rewrite and (unless `dry_run`) write back one file. Never fails:
/// problems become the file's outcome.
pub fn process_file(path: &Path, fix: &dyn Fix, dry_run: bool) -> FileReport {
    let outcome = match apply_to_file(path, fix, dry_run) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("{} failed on {}: {err}", fix.name(), path.display());
            Outcome::Failed {
                error: err.to_string(),
            }
        }
    };

    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Run `fix` over every target. Only target expansion can fail; per-file
/// errors are recorded in the report and the remaining files still run.
pub fn run(fix: &dyn Fix, config: &RunConfig) -> Result<Report> {
    let targets = collect_targets(config)?;
    log::info!("running {} over {} files", fix.name(), targets.len());

    let mut report = Report::new(fix.name(), config.dry_run);
    for path in &targets {
        report.files.push(process_file(path, fix, config.dry_run));
    }

    Ok(report)
}
