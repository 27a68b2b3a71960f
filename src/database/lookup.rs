use crate::core::NameEntry;

/// Case-insensitive, exact-match name lookup.
///
/// Implementations must normalize the query the same way their keys were
/// normalized. No trimming or partial matching is performed.
pub trait EntryLookup {
    fn find_entry(&self, name: &str) -> Option<&NameEntry>;
}

/// Key normalization shared by the store and its queries.
///
/// Upper-casing first folds expansions such as `ß` -> `SS`, so a name and its
/// upper-case form always share a key.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn normalization_is_stable_under_upper_casing() {
        for name in ["Sam", "Strauß", "ǅemal", "Ὀδυσσεύς", "İlker"] {
            assert_eq!(normalize_name(name), normalize_name(&name.to_uppercase()), "{name}");
        }
        assert_eq!(normalize_name("Strauß"), "strauss");
    }
}
