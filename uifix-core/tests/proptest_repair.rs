//! Property-based tests for the mojibake repair table.
//!
//! These tests verify that:
//! - Repairing removes every garbled key, wherever it was inserted
//! - Repairing is idempotent (a second pass is a no-op)
//! - Text containing no garbled key passes through unchanged

use proptest::prelude::*;
use uifix_core::mojibake::{REPLACEMENTS, repair_text};

/// Strategy to generate printable-ASCII filler fragments.
///
/// Every table key starts with a non-ASCII character, so ASCII filler can
/// neither form a key on its own nor extend an inserted one.
fn arb_fragments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[ -~]{0,12}").unwrap(), 1..8)
}

fn arb_key_picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..REPLACEMENTS.len(), 0..8)
}

/// Weave filler fragments and table keys into one test document.
fn weave(fragments: &[String], picks: &[usize]) -> String {
    let mut text = String::new();
    let mut keys = picks.iter().map(|i| REPLACEMENTS[*i].0);
    for fragment in fragments {
        text.push_str(fragment);
        if let Some(key) = keys.next() {
            text.push_str(key);
        }
    }
    for key in keys {
        text.push_str(key);
    }
    text
}

proptest! {
    #[test]
    fn repair_removes_every_garbled_key(
        fragments in arb_fragments(),
        picks in arb_key_picks(),
    ) {
        let text = weave(&fragments, &picks);
        let repaired = repair_text(&text);

        for (garbled, _) in REPLACEMENTS {
            prop_assert!(
                !repaired.contains(garbled),
                "garbled key survived repair: {:?}",
                garbled
            );
        }
    }

    #[test]
    fn repair_is_idempotent(
        fragments in arb_fragments(),
        picks in arb_key_picks(),
    ) {
        let text = weave(&fragments, &picks);
        let once = repair_text(&text);
        let twice = repair_text(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn ascii_text_passes_through_unchanged(text in "[ -~]{0,64}") {
        prop_assert_eq!(repair_text(&text), text);
    }
}
