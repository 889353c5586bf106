//! Shared naming utilities
//!
//! Helpers for deriving Java-flavored names from type names, plus the
//! unique-name pool used when allocating creator fields.

use std::collections::HashSet;

/// Lowercase the first character of a name
///
/// # Examples
/// ```
/// use wiregen::util::decapitalize;
/// assert_eq!(decapitalize("CartModule"), "cartModule");
/// assert_eq!(decapitalize("x"), "x");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip type arguments from a type name, keeping the package
///
/// Class literals and default construction always use the raw type.
///
/// # Examples
/// ```
/// use wiregen::util::raw_type;
/// assert_eq!(raw_type("com.example.Cache<String>"), "com.example.Cache");
/// assert_eq!(raw_type("com.example.Cache"), "com.example.Cache");
/// ```
pub fn raw_type(type_name: &str) -> String {
    match type_name.find('<') {
        Some(idx) => type_name[..idx].trim_end().to_string(),
        None => type_name.to_string(),
    }
}

/// The simple (unqualified, raw) name of a type
///
/// # Examples
/// ```
/// use wiregen::util::simple_name;
/// assert_eq!(simple_name("com.example.CartModule"), "CartModule");
/// assert_eq!(simple_name("CartModule"), "CartModule");
/// ```
pub fn simple_name(type_name: &str) -> String {
    let raw = raw_type(type_name);
    match raw.rfind('.') {
        Some(idx) => raw[idx + 1..].to_string(),
        None => raw,
    }
}

/// The preferred variable name for a value of the given type
///
/// # Examples
/// ```
/// use wiregen::util::simple_variable_name;
/// assert_eq!(simple_variable_name("com.example.CartModule"), "cartModule");
/// ```
pub fn simple_variable_name(type_name: &str) -> String {
    decapitalize(&simple_name(type_name))
}

/// A pool of claimed names, scoped to one declaration's namespace.
///
/// Colliding names get an integer suffix starting at 2, so two requirements
/// that both prefer `cartModule` become `cartModule` and `cartModule2`.
#[derive(Debug, Default)]
pub struct UniqueNameSet {
    claimed: HashSet<String>,
}

impl UniqueNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a name derived from `base`, unique within this set.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2u32;
        while !self.claimed.insert(candidate.clone()) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("CartModule"), "cartModule");
        assert_eq!(decapitalize("cartModule"), "cartModule");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_raw_type() {
        assert_eq!(raw_type("java.util.List<String>"), "java.util.List");
        assert_eq!(raw_type("Cache<K, V>"), "Cache");
        assert_eq!(raw_type("CartModule"), "CartModule");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("com.example.CartModule"), "CartModule");
        assert_eq!(simple_name("com.example.Cache<String>"), "Cache");
        assert_eq!(simple_name("CartModule"), "CartModule");
    }

    #[test]
    fn test_simple_variable_name() {
        assert_eq!(simple_variable_name("com.example.CartModule"), "cartModule");
        assert_eq!(simple_variable_name("HttpClient"), "httpClient");
    }

    #[test]
    fn test_unique_name_set() {
        let mut names = UniqueNameSet::new();
        assert_eq!(names.claim("cartModule"), "cartModule");
        assert_eq!(names.claim("cartModule"), "cartModule2");
        assert_eq!(names.claim("cartModule"), "cartModule3");
        assert_eq!(names.claim("other"), "other");
    }

    #[test]
    fn test_unique_name_set_suffix_collision() {
        let mut names = UniqueNameSet::new();
        assert_eq!(names.claim("field2"), "field2");
        assert_eq!(names.claim("field"), "field");
        // "field2" is taken, so the second "field" skips to "field3".
        assert_eq!(names.claim("field"), "field3");
    }
}
