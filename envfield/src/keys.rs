//! Candidate environment variable names for a field

use crate::case::to_snake_case;

/// Normalize a prefix so that it ends with exactly one separating `_`.
///
/// `None` and `Some("")` both mean "no prefix".
pub fn normalize_prefix(prefix: Option<&str>) -> String {
    match prefix {
        None | Some("") => String::new(),
        Some(p) if p.ends_with('_') => p.to_string(),
        Some(p) => format!("{}_", p),
    }
}

/// Base names to look up for a field, in lookup order.
///
/// The field name itself comes first, followed by its snake_case form when
/// that differs. Both get the normalized prefix. Case variants are not
/// included here; see [`expand_cases`].
pub fn candidate_keys(field_name: &str, prefix: Option<&str>) -> Vec<String> {
    let prefix = normalize_prefix(prefix);
    let mut keys = vec![format!("{}{}", prefix, field_name)];

    let snake = to_snake_case(field_name);
    if snake != field_name {
        keys.push(format!("{}{}", prefix, snake));
    }

    keys
}

/// Expand base names into the effective search order: each name as given,
/// then uppercased, then lowercased.
pub fn expand_cases(names: &[String]) -> Vec<String> {
    names
        .iter()
        .flat_map(|name| [name.clone(), name.to_uppercase(), name.to_lowercase()])
        .collect()
}
