use super::{post_detail_only, Fix, Rewrite};
use crate::config::Targets;
use crate::scanner::line_sequence;

/// Removes lines left dangling by earlier print rewrites.
pub struct DropOrphanLines;

fn is_orphan(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed == ");" || (trimmed.starts_with("// ") && line.contains(").toList()"))
}

impl Fix for DropOrphanLines {
    fn name(&self) -> &'static str {
        "drop-orphan-lines"
    }

    fn summary(&self) -> &'static str {
        "delete lone `);` lines and commented-out `).toList()` fragments"
    }

    fn default_targets(&self) -> Targets {
        post_detail_only()
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        let mut out = Rewrite {
            text: String::with_capacity(content.len()),
            edits: 0,
        };

        for line in line_sequence(content) {
            if is_orphan(line) {
                out.edits += 1;
            } else {
                out.text.push_str(line);
            }
        }

        out
    }
}
