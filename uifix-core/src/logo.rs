//! Literal replacement of the hard-coded placeholder logo across markup files.
//!
//! The sidebar logo was committed as a styled `<div>O</div>` placeholder in
//! two spelling variants. Both are rewritten to the real `<img>` tag; only
//! files that actually change are written back.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{FixError, FixResult};

/// The two forms the placeholder logo `<div>` appears as in the tree.
pub const SEARCH_PATTERNS: [&str; 2] = [
    r#"<div className="w-8 h-8 bg-sidebar-primary rounded-lg flex items-center justify-center text-sidebar-primary-foreground font-bold">O</div>"#,
    r#"<div className="w-8 h-8 bg-sidebar-primary rounded-lg flex items-center justify-center text-sidebar-primary-foreground font-bold shrink-0">O</div>"#,
];

/// What every occurrence of a search pattern is rewritten to.
pub const LOGO_IMG: &str = r#"<img src="/logo.png" alt="Orbit" className="w-8 h-8 rounded-lg object-contain bg-sidebar-primary" />"#;

/// Extensions of files the replacer will open.
pub const MARKUP_EXTENSIONS: [&str; 2] = ["tsx", "js"];

/// Replace every pattern occurrence in `content`, patterns in list order.
///
/// Returns `None` when no pattern is present, so callers can skip the write.
pub fn replace_in_markup(content: &str) -> Option<String> {
    let mut out = content.to_string();
    let mut replaced = false;
    for pattern in SEARCH_PATTERNS {
        if out.contains(pattern) {
            out = out.replace(pattern, LOGO_IMG);
            replaced = true;
        }
    }
    replaced.then_some(out)
}

fn is_markup(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

/// Walk `root` and rewrite every markup file containing a search pattern.
///
/// Entries are visited in file-name order within each directory so output is
/// deterministic. `observe` fires once per rewritten file, immediately after
/// its write, so callers can stream paths even when a later file fails.
/// Errors abort the walk; files already rewritten stay rewritten.
pub fn replace_under(root: &Utf8Path, mut observe: impl FnMut(&Utf8Path)) -> FixResult<usize> {
    let mut updated = 0;
    let mut scanned = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|path| FixError::NonUtf8Path { path })?;
        if !is_markup(&path) {
            continue;
        }

        scanned += 1;
        let bytes = fs::read(&path)?;
        let content = String::from_utf8(bytes).map_err(|_| FixError::Decode {
            path: path.clone(),
        })?;

        if let Some(rewritten) = replace_in_markup(&content) {
            fs::write(&path, rewritten.as_bytes())?;
            observe(&path);
            updated += 1;
        }
    }

    debug!(
        "scanned {} markup files under {}, updated {}",
        scanned, root, updated
    );
    Ok(updated)
}
