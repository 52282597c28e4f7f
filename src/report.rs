use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// How many modified files the text summary lists by name.
const LISTED_FILES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Changed { edits: usize },
    Unchanged,
    Missing,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub fix: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn new(fix: &str, dry_run: bool) -> Self {
        Self {
            fix: fix.to_string(),
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn modified(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|file| matches!(file.outcome, Outcome::Changed { .. }))
    }

    pub fn total_edits(&self) -> usize {
        self.files
            .iter()
            .map(|file| match file.outcome {
                Outcome::Changed { edits } => edits,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> usize {
        self.files
            .iter()
            .filter(|file| matches!(file.outcome, Outcome::Missing | Outcome::Failed { .. }))
            .count()
    }

    /// One marker line per file, then a summary block.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for file in &self.files {
            let path = file.path.display();
            match &file.outcome {
                Outcome::Changed { edits } => writeln!(out, "✓ {path}: {edits} edits")?,
                Outcome::Unchanged => writeln!(out, "- {path} (no changes)")?,
                Outcome::Missing => writeln!(out, "✗ {path}: not found")?,
                Outcome::Failed { error } => writeln!(out, "✗ {path}: {error}")?,
            }
        }

        let rule = "=".repeat(80);
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        if self.dry_run {
            writeln!(out, "SUMMARY: {} (dry run, nothing written)", self.fix)?;
        } else {
            writeln!(out, "SUMMARY: {}", self.fix)?;
        }
        writeln!(out, "{rule}")?;

        let modified: Vec<_> = self.modified().collect();
        writeln!(out, "Files processed: {}", self.files.len())?;
        writeln!(out, "Files modified: {}", modified.len())?;
        writeln!(out, "Total edits: {}", self.total_edits())?;
        writeln!(out, "Failures: {}", self.failures())?;

        if !modified.is_empty() {
            writeln!(out)?;
            writeln!(out, "Modified files:")?;
            for file in modified.iter().take(LISTED_FILES) {
                writeln!(out, "  - {}", file.path.display())?;
            }
            if modified.len() > LISTED_FILES {
                writeln!(out, "  ... and {} more files", modified.len() - LISTED_FILES)?;
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
