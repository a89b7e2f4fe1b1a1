//! URL slug transform for drug names

/// Convert a human-readable drug name into a URL path segment.
///
/// Lowercases the name and replaces spaces with hyphens. Total function:
/// any input produces a slug, and applying it twice is a no-op. Non-ASCII
/// or special characters pass through unescaped.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_lowercased() {
        assert_eq!(slugify("Ativan"), "ativan");
    }

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(slugify("Cold Medicine"), "cold-medicine");
    }

    #[test]
    fn test_idempotent() {
        let once = slugify("Extra Strength Tylenol");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
    }
}
