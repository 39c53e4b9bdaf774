//! Field predicates shared by the request forms and the entity store.
//!
//! Lengths count characters, not bytes, to keep multi-byte content
//! from being rejected or accepted on encoding grounds.

/// A title is only publishable when at least one of these occurs
/// in it, case-sensitively.
pub const CLICKBAIT_PHRASES: &[&str] = &["Won't Believe", "Secret", "Top", "Guess"];

pub const CONTENT_MIN_CHARS: usize = 250;
pub const SUMMARY_MAX_CHARS: usize = 250;

pub const PHONE_NUMBER_DIGITS: usize = 10;

pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.len() == PHONE_NUMBER_DIGITS
        && phone_number.chars().all(|c| c.is_ascii_digit())
}

pub fn is_clickbait_title(title: &str) -> bool {
    CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase))
}

pub fn is_valid_category(category: &str) -> bool {
    matches!(category, "Fiction" | "Non-Fiction")
}

pub fn is_long_enough_content(content: &str) -> bool {
    content.chars().count() >= CONTENT_MIN_CHARS
}

pub fn is_short_enough_summary(summary: &str) -> bool {
    summary.chars().count() <= SUMMARY_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(is_valid_phone_number("0000000000"));

        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("12345678901"));
        assert!(!is_valid_phone_number("123-456-7890"));
        assert!(!is_valid_phone_number("12345six890"));
        // ten digit characters, but not ASCII ones
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_is_clickbait_title() {
        assert!(is_clickbait_title("You Won't Believe This"));
        assert!(is_clickbait_title("The Secret Life of Crabs"));
        assert!(is_clickbait_title("Top 10 Ferris Facts"));
        assert!(is_clickbait_title("Guess Who's Back"));

        assert!(!is_clickbait_title("An Ordinary Day"));
        // match is case-sensitive
        assert!(!is_clickbait_title("top 10 ferris facts"));
        assert!(!is_clickbait_title(""));
    }

    #[test]
    fn test_is_valid_category() {
        assert!(is_valid_category("Fiction"));
        assert!(is_valid_category("Non-Fiction"));

        assert!(!is_valid_category("fiction"));
        assert!(!is_valid_category("Poetry"));
        assert!(!is_valid_category(""));
    }

    #[test]
    fn test_content_and_summary_bounds() {
        let exactly_250 = "a".repeat(250);
        assert!(is_long_enough_content(&exactly_250));
        assert!(is_short_enough_summary(&exactly_250));

        assert!(!is_long_enough_content(&"a".repeat(249)));
        assert!(!is_short_enough_summary(&"a".repeat(251)));

        // 250 characters, far more than 250 bytes
        let multibyte = "é".repeat(250);
        assert!(is_long_enough_content(&multibyte));
        assert!(is_short_enough_summary(&multibyte));
    }
}
