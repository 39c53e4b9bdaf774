use serde::Deserialize;
use validator::{Validate, ValidateError};

use crate::util::validation::{
    is_clickbait_title, is_long_enough_content, is_short_enough_summary, is_valid_category,
};

/// Body of `POST /posts`.
///
/// `category` is optional in the payload but an absent category is
/// rejected like an invalid one; the membership check runs
/// unconditionally, so the field is effectively mandatory.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
}

impl Validate for CreatePost {
    fn validate(&self) -> Result<(), ValidateError> {
        validate_fields(
            &self.title,
            self.content.as_deref(),
            self.summary.as_deref(),
            self.category.as_deref(),
        )
    }
}

/// Body of `PATCH /posts/{id}`. Absent (or `null`) fields keep
/// their current value; validation runs on the merged result.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
}

/// Checks one full set of post fields, merged or not. Shared by the
/// create form above and [`Post::apply`](crate::schema::Post::apply).
pub(crate) fn validate_fields(
    title: &str,
    content: Option<&str>,
    summary: Option<&str>,
    category: Option<&str>,
) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();

    fields.insert("title", {
        let mut error = ValidateError::msg_builder();
        if title.is_empty() {
            error.insert("Title field is required.");
        } else if !is_clickbait_title(title) {
            error.insert("Title must contain clickbait phrases.");
        }
        error.build()
    });

    if let Some(content) = content {
        fields.insert("content", {
            let mut error = ValidateError::msg_builder();
            if !is_long_enough_content(content) {
                error.insert("Post content must be at least 250 characters long.");
            }
            error.build()
        });
    }

    if let Some(summary) = summary {
        fields.insert("summary", {
            let mut error = ValidateError::msg_builder();
            if !is_short_enough_summary(summary) {
                error.insert("Post summary must be at most 250 characters long.");
            }
            error.build()
        });
    }

    fields.insert("category", {
        let mut error = ValidateError::msg_builder();
        if !category.is_some_and(is_valid_category) {
            error.insert("Category must be 'Fiction' or 'Non-Fiction'.");
        }
        error.build()
    });

    fields.build().into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> CreatePost {
        CreatePost {
            title: title.to_string(),
            content: None,
            category: Some("Fiction".to_string()),
            summary: None,
        }
    }

    #[test]
    fn title_must_be_clickbait() {
        assert!(post("You Won't Believe This").validate().is_ok());
        assert!(post("The Secret Ingredient").validate().is_ok());
        assert!(post("Top 10 Borrow Checker Tricks").validate().is_ok());
        assert!(post("Guess What Happened Next").validate().is_ok());

        assert!(post("An Ordinary Day").validate().is_err());
        assert!(post("").validate().is_err());
    }

    // The membership check runs even when the payload omits the
    // category, so leaving it out is an error too.
    #[test]
    fn absent_category_is_rejected() {
        let mut form = post("Top News");
        form.category = None;

        let Err(ValidateError::Fields(fields)) = form.validate() else {
            panic!("expected field errors");
        };
        assert!(fields.contains_key("category"));
    }

    #[test]
    fn category_membership_is_exact() {
        for good in ["Fiction", "Non-Fiction"] {
            let mut form = post("Top News");
            form.category = Some(good.to_string());
            assert!(form.validate().is_ok(), "{good:?} should be accepted");
        }

        for bad in ["fiction", "NON-FICTION", "Poetry", ""] {
            let mut form = post("Top News");
            form.category = Some(bad.to_string());
            assert!(form.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn content_lower_bound_is_inclusive() {
        let mut form = post("Top News");
        form.content = Some("a".repeat(250));
        assert!(form.validate().is_ok());

        form.content = Some("a".repeat(249));
        assert!(form.validate().is_err());
    }

    // an empty string is a present value, not an omitted field, so it
    // goes through the length check and fails it
    #[test]
    fn empty_content_is_rejected_like_any_short_content() {
        let mut form = post("Top News");
        form.content = Some(String::new());
        assert!(form.validate().is_err());
    }

    #[test]
    fn summary_upper_bound_is_inclusive() {
        let mut form = post("Top News");
        form.summary = Some("b".repeat(250));
        assert!(form.validate().is_ok());

        form.summary = Some("b".repeat(251));
        assert!(form.validate().is_err());
    }

    #[test]
    fn merged_updates_share_the_same_rules() {
        assert!(validate_fields("Guess Again", None, None, Some("Fiction")).is_ok());
        assert!(validate_fields("Guess Again", None, None, None).is_err());
        assert!(validate_fields("", None, None, Some("Fiction")).is_err());
    }
}
