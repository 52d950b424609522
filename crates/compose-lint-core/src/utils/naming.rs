//! Identifier case helpers.

/// `contentEmittersDenylist` -> `content_emitters_denylist`.
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `modifier-missing` -> `ModifierMissing`.
#[must_use]
pub fn kebab_to_pascal(name: &str) -> String {
    name.split('-').map(capitalize).collect()
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lower-cases the first character.
#[must_use]
pub fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Whether the name starts with an upper-case letter.
#[must_use]
pub fn starts_upper(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the name starts with a lower-case letter.
#[must_use]
pub fn starts_lower(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_cases() {
        assert_eq!(camel_to_snake("allowedCompositionLocals"), "allowed_composition_locals");
        assert_eq!(camel_to_snake("disallowMaterial2"), "disallow_material2");
        assert_eq!(kebab_to_pascal("modifier-missing"), "ModifierMissing");
        assert_eq!(capitalize("onClick"), "OnClick");
        assert_eq!(decapitalize("Content"), "content");
        assert!(starts_upper("Text"));
        assert!(starts_lower("remember"));
        assert!(!starts_upper(""));
    }
}
