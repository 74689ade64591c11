// src/application/commands/articles/validate.rs
use std::collections::BTreeMap;

use super::create::ArticleDraft;

/// Field name -> rule name -> human-readable message.
pub type FieldErrors = BTreeMap<&'static str, BTreeMap<&'static str, String>>;

pub const TITLE_MIN_LENGTH: usize = 10;

/// Explicit pre-persistence check for the JSON create flow. The form add
/// flow deliberately skips this and relies on entity-level rules alone.
pub fn validate_draft(draft: &ArticleDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match draft.title.as_deref() {
        None => {
            rule(&mut errors, "title", "_required", "This field is required");
        }
        Some(title) if title.trim().is_empty() => {
            rule(&mut errors, "title", "_empty", "A title is required");
        }
        Some(title) if title.chars().count() < TITLE_MIN_LENGTH => {
            rule(
                &mut errors,
                "title",
                "length",
                "Titles need to be at least 10 characters long",
            );
        }
        Some(_) => {}
    }

    match draft.body.as_deref() {
        None => {
            rule(&mut errors, "body", "_required", "This field is required");
        }
        Some(body) if body.trim().is_empty() => {
            rule(&mut errors, "body", "_empty", "Text for the body is required");
        }
        Some(_) => {}
    }

    errors
}

fn rule(errors: &mut FieldErrors, field: &'static str, name: &'static str, message: &str) {
    errors
        .entry(field)
        .or_default()
        .insert(name, message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_required() {
        let errors = validate_draft(&ArticleDraft {
            title: None,
            body: None,
        });
        assert_eq!(errors["title"]["_required"], "This field is required");
        assert_eq!(errors["body"]["_required"], "This field is required");
    }

    #[test]
    fn short_title_fails_the_length_rule() {
        let errors = validate_draft(&ArticleDraft {
            title: Some("short".into()),
            body: Some("x".into()),
        });
        assert_eq!(
            errors["title"]["length"],
            "Titles need to be at least 10 characters long"
        );
        assert!(!errors.contains_key("body"));
    }

    #[test]
    fn empty_strings_get_their_own_messages() {
        let errors = validate_draft(&ArticleDraft {
            title: Some("  ".into()),
            body: Some(String::new()),
        });
        assert_eq!(errors["title"]["_empty"], "A title is required");
        assert_eq!(errors["body"]["_empty"], "Text for the body is required");
    }

    #[test]
    fn valid_draft_passes_clean() {
        let errors = validate_draft(&ArticleDraft {
            title: Some("A sufficiently long title".into()),
            body: Some("content".into()),
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn length_rule_counts_characters_not_bytes() {
        let errors = validate_draft(&ArticleDraft {
            title: Some("ながいたいとるです".into()),
            body: Some("content".into()),
        });
        // nine characters, many more bytes
        assert!(errors.contains_key("title"));
    }
}
