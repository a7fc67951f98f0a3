use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// BlogPost entity - the single resource exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID.
    ///
    /// `created` defaults to now when not supplied.
    pub fn new(
        title: String,
        content: String,
        author: Author,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created: created.unwrap_or_else(Utc::now),
        }
    }

    /// Check the invariants every persisted post must hold.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("`title` must not be empty".into()));
        }
        if self.author.first_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "`author.firstName` must not be empty".into(),
            ));
        }
        if self.author.last_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "`author.lastName` must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply a partial update. Only `title` and `content` are mutable.
    pub fn apply(&mut self, update: BlogPostUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(
                "update must include `title` or `content`".into(),
            ));
        }
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation("`title` must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost::new(
            "Hello".to_string(),
            "World".to_string(),
            Author::new("Ada", "Lovelace"),
            None,
        )
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_created_defaults_to_now() {
        let before = Utc::now();
        let post = sample();
        assert!(post.created >= before);
        assert!(post.created <= Utc::now());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut post = sample();
        post.title = "   ".to_string();
        assert!(matches!(post.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_missing_author_name() {
        let mut post = sample();
        post.author.last_name.clear();
        assert!(post.validate().is_err());
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_apply_only_touches_title_and_content() {
        let mut post = sample();
        let original = post.clone();
        post.apply(BlogPostUpdate {
            title: Some("New title".to_string()),
            content: None,
        });

        assert_eq!(post.title, "New title");
        assert_eq!(post.content, original.content);
        assert_eq!(post.author, original.author);
        assert_eq!(post.created, original.created);
        assert_eq!(post.id, original.id);
    }

    #[test]
    fn test_empty_update_is_invalid() {
        assert!(BlogPostUpdate::default().validate().is_err());
        let blank_title = BlogPostUpdate {
            title: Some(String::new()),
            content: Some("body".to_string()),
        };
        assert!(blank_title.validate().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Author::new("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }
}
