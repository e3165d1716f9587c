//! DNS label canonicalization.
//!
//! The internal DNS system accepts labels drawn from [a-z0-9-], plus the
//! wildcard marker `*` which means "any value" for a segment and must
//! survive untouched wherever it appears.

/// Canonicalize one DNS label component.
///
/// Applied in order: lowercase alphabetics, turn `_` into `-`, then drop
/// everything outside [a-z0-9*-]. Total and idempotent; the output
/// alphabet is closed under the transformation.
pub fn canonicalize(label: &str) -> String {
    label
        .chars()
        .filter_map(|c| match c {
            '_' => Some('-'),
            '-' | '*' => Some(c),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::canonicalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(canonicalize("Diego_cell1"), "diego-cell1");
        assert_eq!(canonicalize("Default_123"), "default-123");
        assert_eq!(canonicalize("already-fine-9"), "already-fine-9");
    }

    #[test]
    fn strips_characters_outside_the_label_alphabet() {
        assert_eq!(canonicalize("Diego_cell1^."), "diego-cell1");
        assert_eq!(canonicalize("a b\tc"), "abc");
        assert_eq!(canonicalize("^.!@#"), "");
    }

    #[test]
    fn preserves_wildcards_in_place() {
        assert_eq!(canonicalize("*Die*go_cell1^.*"), "*die*go-cell1*");
        assert_eq!(canonicalize("*"), "*");
        assert_eq!(canonicalize("**"), "**");
    }

    #[test]
    fn non_ascii_is_dropped_not_lowercased() {
        assert_eq!(canonicalize("Émile_1"), "mile-1");
    }

    #[test]
    fn idempotent_on_own_output() {
        for label in ["*Die*go_cell1^.*", "Cf_1^.", "plain", "", "*_*"] {
            let once = canonicalize(label);
            assert_eq!(canonicalize(&once), once);
        }
    }
}
