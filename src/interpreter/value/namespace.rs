use crate::interpreter::value::core::Value;

/// Name of the callable hook honored when a namespace is applied.
pub const APPLY_HOOK: &str = "__apply__";
/// Name of the string hook honored when a namespace is stringified.
pub const STR_HOOK: &str = "__str__";

/// Checks whether a name is a legal identifier of the language.
///
/// Legal identifiers match `[A-Za-z_][A-Za-z0-9_]*`. This predicate is the
/// single authority on identifier legality: the lexer admits exactly these
/// names, and every lookup (context resolution and namespace application)
/// re-checks it so that values a host injected under other names can never
/// resolve.
///
/// ## Example
/// ```
/// use tuplet::interpreter::value::namespace::is_legal_identifier;
///
/// assert!(is_legal_identifier("size_hint"));
/// assert!(is_legal_identifier("_private"));
/// assert!(!is_legal_identifier("2fast"));
/// assert!(!is_legal_identifier("has-dash"));
/// assert!(!is_legal_identifier(""));
/// ```
#[must_use]
pub fn is_legal_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// An insertion-ordered mapping from identifiers to values.
///
/// `Bindings` backs both scope frames and namespace values. Insertion
/// order is preserved so that namespace literals and `enum` report entries
/// in the order they were bound; re-inserting an existing name updates the
/// value in place and keeps the original position.
///
/// Lookup only ever considers entries that were explicitly inserted, and
/// rejects names that are not legal identifiers, so no ambient
/// host-language machinery can leak into programs.
///
/// ## Example
/// ```
/// use tuplet::interpreter::value::{core::Value, namespace::Bindings};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("a", Value::Number(1.0));
/// bindings.insert("b", Value::Number(2.0));
/// bindings.insert("a", Value::Number(10.0));
///
/// assert_eq!(bindings.get("a"), Some(&Value::Number(10.0)));
/// let names: Vec<&str> = bindings.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a name, honoring the identifier whitelist.
    ///
    /// Returns `None` both for names that were never inserted and for
    /// names that are not legal identifiers, regardless of whether a host
    /// managed to insert something under them.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        if !is_legal_identifier(name) {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether a legal identifier is bound here.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts or updates a binding.
    ///
    /// An existing name keeps its position; a new name is appended.
    pub fn insert(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Compares two namespaces for equality.
///
/// Namespaces are equal when they own the same set of identifiers and each
/// identifier maps to equal values; the insertion order does not matter.
#[must_use]
pub fn namespace_eq(left: &Bindings, right: &Bindings) -> bool {
    left.len() == right.len()
    && left.iter()
           .all(|(name, value)| right.get(name) == Some(value))
}
