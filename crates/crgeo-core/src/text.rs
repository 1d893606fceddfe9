// crates/crgeo-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Limón` -> `Limon`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use crgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Pérez Zeledón"), "perez zeledon");
/// assert_eq!(fold_key("CUREÑA"), "curena");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Folded substring test. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("San José"), "san jose");
        assert!(contains_folded("Guácimo", "GUACIMO"));
        assert!(contains_folded("Vázquez de Coronado", "coronado"));
        assert!(contains_folded("Ángeles", "ange"));
        assert!(!contains_folded("Carmen", "merced"));
    }
}
