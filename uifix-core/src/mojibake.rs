//! Repairs mis-decoded emoji sequences in a single source file.
//!
//! The landing page was saved once through a UTF-8 → Windows-1252 decode
//! round trip, so each emoji now sits in the file as a short garbled
//! character run. [`REPLACEMENTS`] maps each run back to the intended
//! character; [`fix_file`] applies the table to one file in place.

use camino::Utf8Path;
use fs_err as fs;
use tracing::debug;

use crate::error::{FixError, FixResult};

/// Garbled substring → intended character, applied in slice order.
///
/// Keys are spelled as `\u{..}` escapes: several contain trailing spaces or
/// U+00A0 and would not survive copy/paste as literals. No key is a
/// substring of another, so application order does not change the result.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    // 📚
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{E2}\u{20AC}\u{153}\u{C5}\u{A1}",
        "\u{1F4DA}",
    ),
    // ✍️
    (
        "\u{C3}\u{A2}\u{C5}\u{201C}\u{C2}\u{20}\u{C3}\u{AF}\u{C2}\u{B8}\u{C2}\u{20}",
        "\u{270D}\u{FE0F}",
    ),
    // 🔬
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{E2}\u{20AC}\u{20}\u{C2}\u{AC}",
        "\u{1F52C}",
    ),
    // 🏆
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{C2}\u{20}\u{E2}\u{20AC}\u{A0}",
        "\u{1F3C6}",
    ),
    // 📊
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{E2}\u{20AC}\u{153}\u{C5}\u{A0}",
        "\u{1F4CA}",
    ),
    // 👤
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{E2}\u{20AC}\u{2DC}\u{C2}\u{A4}",
        "\u{1F464}",
    ),
    // ✓
    (
        "\u{C3}\u{A2}\u{C5}\u{201C}\u{E2}\u{20AC}\u{153}",
        "\u{2713}",
    ),
    // 🎓
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{C5}\u{BD}\u{E2}\u{20AC}\u{153}",
        "\u{1F393}",
    ),
    // 📈
    (
        "\u{C3}\u{B0}\u{C5}\u{B8}\u{E2}\u{20AC}\u{153}\u{CB}\u{2020}",
        "\u{1F4C8}",
    ),
    // ⚙️
    (
        "\u{C3}\u{A2}\u{C5}\u{A1}\u{E2}\u{201E}\u{A2}\u{C3}\u{AF}\u{C2}\u{B8}\u{C2}\u{20}",
        "\u{2699}\u{FE0F}",
    ),
    // ©
    ("\u{C3}\u{201A}\u{C2}\u{A9}", "\u{A9}"),
];

/// Outcome of one [`fix_file`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingFixReport {
    /// Total garbled occurrences replaced, across all table entries.
    pub occurrences: usize,
    /// Whether the written content differs from what was read.
    pub changed: bool,
}

/// Apply every table entry to `text`, in table order.
pub fn repair_text(text: &str) -> String {
    let mut out = text.to_string();
    for (garbled, fixed) in REPLACEMENTS {
        if out.contains(garbled) {
            out = out.replace(garbled, fixed);
        }
    }
    out
}

fn count_occurrences(text: &str) -> usize {
    REPLACEMENTS
        .iter()
        .map(|(garbled, _)| text.matches(garbled).count())
        .sum()
}

/// Read `path`, decode as UTF-8, repair, and write the result back in place.
///
/// The write is unconditional once the decode succeeds. Content is fully
/// buffered before the write begins, so the file ends up holding either the
/// old text or the complete new text.
pub fn fix_file(path: &Utf8Path) -> FixResult<EncodingFixReport> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| FixError::Decode {
        path: path.to_owned(),
    })?;

    let occurrences = count_occurrences(&text);
    let repaired = repair_text(&text);
    debug!("replaced {} garbled runs in {}", occurrences, path);

    fs::write(path, repaired.as_bytes())?;
    Ok(EncodingFixReport {
        occurrences,
        changed: occurrences > 0,
    })
}
