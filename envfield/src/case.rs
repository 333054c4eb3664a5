//! Identifier case conversion

/// Convert a camelCase identifier to snake_case.
///
/// Words are split on a lowercase to uppercase transition, and a run of two
/// or more uppercase letters followed by a lowercase letter is kept together
/// as its own word, minus the last capital which starts the next word:
///
/// - `myProperty` -> `my_property`
/// - `myURLProperty` -> `my_url_property`
///
/// The first character is assumed to be lowercase. Identifiers without any
/// case transition (including ones that are already snake_case) are returned
/// unchanged.
pub fn to_snake_case(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = identifier.chars().collect();
    let end = chars.len();
    let find = |from: usize, pred: fn(&char) -> bool| {
        chars[from..].iter().position(pred).map(|offset| from + offset)
    };

    let mut words: Vec<(usize, usize)> = Vec::new();
    let mut word_start = 0;
    let mut search_start = 1;

    while search_start < end {
        let Some(upper) = find(search_start, |c| c.is_uppercase()) else {
            break;
        };
        words.push((word_start, upper));

        let Some(lower) = find(upper, |c| c.is_lowercase()) else {
            // Only capitals (or caseless characters) remain
            word_start = upper;
            break;
        };

        if lower == upper + 1 {
            word_start = upper;
        } else {
            // Acronym: everything up to the capital preceding the lowercase
            words.push((upper, lower - 1));
            word_start = lower - 1;
        }
        search_start = lower + 1;
    }
    words.push((word_start, end));

    words
        .into_iter()
        .map(|(start, stop)| {
            chars[start..stop]
                .iter()
                .flat_map(|c| c.to_lowercase())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_")
}
