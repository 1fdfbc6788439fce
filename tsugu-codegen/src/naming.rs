//! Name sanitization, ordering, and word matching.
//!
//! Both emitters sort with [`ascending`] and sanitize with the same
//! convention so that repeated generation from the same input is
//! byte-identical.

use std::cmp::Ordering;

use regex::Regex;

/// Stable ascending byte-wise order over identifier strings.
///
/// This is the single comparator used for every sort in the emitters;
/// ties keep original order because all call sites use a stable sort.
pub fn ascending(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Convert a string to PascalCase (e.g. "pet_store-api" -> "PetStoreApi").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' ', '.'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g. "pet_id" -> "petId").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Map an arbitrary schema name to a valid declaration identifier.
///
/// Total over any input: generic markers are dropped, every other
/// non-identifier character becomes an underscore, and a leading digit is
/// prefixed. Distinct schema names stay distinct for the name alphabets
/// that occur in real documents.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '«' | '»' | '<' | '>' | '[' | ']' => {}
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            _ => out.push('_'),
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Language-specific naming conventions.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema name into a type identifier.
    pub type_name: fn(&str) -> String,
    /// Transform a parameter/property name into a value identifier.
    pub field_name: fn(&str) -> String,
    /// Reserved words in the target language.
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word.
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Sanitized, escaped type identifier.
    pub fn type_ident(&self, name: &str) -> String {
        self.safe_name(&(self.type_name)(name))
    }

    /// Sanitized, escaped value identifier.
    pub fn field_ident(&self, name: &str) -> String {
        self.safe_name(&(self.field_name)(name))
    }
}

/// Whether `ident` occurs in `corpus` as a complete token.
///
/// Matches on word boundaries, never substring containment: `Pet` is not
/// found inside `PetList`.
pub fn contains_word(corpus: &str, ident: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(ident));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(corpus),
        // An identifier the regex engine rejects cannot occur as a token.
        Err(_) => false,
    }
}
