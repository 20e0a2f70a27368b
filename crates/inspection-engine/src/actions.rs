//! Corrective-actions composition and decomposition.
//!
//! The persisted `actions_taken` string is the selected catalog phrases in
//! catalog order, one per line, with the custom note as the final line.
//! Decomposition is lossy best-effort: a custom note that happens to contain
//! a catalog phrase as a substring is re-detected as a selected checkbox on
//! reload. That ambiguity is inherent to the stored format and is kept as-is.

use inspection_types::catalog::CORRECTIVE_ACTIONS;

/// Build the persisted composite string from the selected phrases and the
/// custom note. Phrases are emitted in catalog order regardless of the
/// order they were toggled in.
pub fn compose(selected: &[String], custom: &str) -> String {
    let mut parts: Vec<&str> = CORRECTIVE_ACTIONS
        .iter()
        .copied()
        .filter(|phrase| selected.iter().any(|s| s == phrase))
        .collect();

    let custom = custom.trim();
    if !custom.is_empty() {
        parts.push(custom);
    }
    parts.join("\n")
}

/// Split a stored composite string back into selected phrases and the
/// remaining custom note.
pub fn decompose(text: &str) -> (Vec<String>, String) {
    let mut selected = Vec::new();
    let mut remaining = text.to_string();

    for phrase in CORRECTIVE_ACTIONS {
        if remaining.contains(phrase) {
            selected.push(phrase.to_string());
            remaining = remaining.replacen(phrase, "", 1);
        }
    }

    (selected, collapse_separators(&remaining))
}

/// Collapse runs of newlines and commas left over after phrase stripping
/// into single spaces, then trim.
fn collapse_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator = false;
    for c in text.chars() {
        if c == '\n' || c == ',' {
            if !in_separator {
                out.push(' ');
                in_separator = true;
            }
        } else {
            out.push(c);
            in_separator = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compose_joins_phrases_then_custom_with_newlines() {
        let selected = vec![
            CORRECTIVE_ACTIONS[0].to_string(),
            CORRECTIVE_ACTIONS[2].to_string(),
        ];
        let composed = compose(&selected, "foo");
        assert_eq!(
            composed,
            format!("{}\n{}\nfoo", CORRECTIVE_ACTIONS[0], CORRECTIVE_ACTIONS[2])
        );
    }

    #[test]
    fn compose_orders_phrases_by_catalog_not_selection() {
        let selected = vec![
            CORRECTIVE_ACTIONS[3].to_string(),
            CORRECTIVE_ACTIONS[1].to_string(),
        ];
        let composed = compose(&selected, "");
        assert_eq!(
            composed,
            format!("{}\n{}", CORRECTIVE_ACTIONS[1], CORRECTIVE_ACTIONS[3])
        );
    }

    #[test]
    fn compose_skips_blank_custom_text() {
        assert_eq!(compose(&[], "   "), "");
    }

    #[test]
    fn decompose_recovers_phrases_and_custom_text() {
        let selected = vec![
            CORRECTIVE_ACTIONS[0].to_string(),
            CORRECTIVE_ACTIONS[1].to_string(),
        ];
        let composed = compose(&selected, "foo");

        let (found, custom) = decompose(&composed);
        assert_eq!(found, selected);
        assert_eq!(custom, "foo");
    }

    #[test]
    fn decompose_collapses_residual_separators() {
        let text = format!("{},\n\nextra scrubbing done", CORRECTIVE_ACTIONS[4]);
        let (found, custom) = decompose(&text);
        assert_eq!(found, vec![CORRECTIVE_ACTIONS[4].to_string()]);
        assert_eq!(custom, "extra scrubbing done");
    }

    #[test]
    fn decompose_of_empty_text_is_empty() {
        let (found, custom) = decompose("");
        assert!(found.is_empty());
        assert_eq!(custom, "");
    }

    // Documents the known limitation: custom text containing a catalog
    // phrase as a substring is re-detected as a selected checkbox.
    #[test]
    fn decompose_is_lossy_when_custom_text_embeds_a_phrase() {
        let custom = format!("Note: {} twice today", CORRECTIVE_ACTIONS[2]);
        let composed = compose(&[], &custom);

        let (found, remaining) = decompose(&composed);
        assert_eq!(found, vec![CORRECTIVE_ACTIONS[2].to_string()]);
        assert_eq!(remaining, "Note:  twice today");
    }
}
