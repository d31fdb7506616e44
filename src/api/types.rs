//! Wire types for the blog API
//!
//! The backend speaks loosely-shaped JSON; everything is parsed into these
//! explicit types at the client boundary so the rest of the app never touches
//! raw `serde_json::Value`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Gates the admin console and comment moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

/// Resolved user profile, as returned by login/signup and `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A published (or draft) article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// Plain text; newlines delimit paragraph blocks for display
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published: bool,
}

impl Article {
    /// Paragraph blocks for display. Blank lines survive as empty entries so
    /// the renderer can keep the author's spacing.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// A reader comment attached to one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub article_id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Credentials submitted to login or signup
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login/signup response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body for creating or updating an article
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Body for posting a comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_lowercase() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"ed","role":"admin"}"#).unwrap();
        assert!(user.is_admin());

        let user: User =
            serde_json::from_str(r#"{"id":2,"username":"rd","role":"member"}"#).unwrap();
        assert!(!user.is_admin());
    }

    #[test]
    fn role_defaults_to_member_when_absent() {
        let user: User = serde_json::from_str(r#"{"id":3,"username":"anon"}"#).unwrap();
        assert_eq!(user.role, Role::Member);
    }

    #[test]
    fn paragraphs_preserve_blank_lines() {
        let article = Article {
            id: 1,
            title: "t".into(),
            content: "first\n\nsecond".into(),
            author_id: 1,
            author_name: "a".into(),
            created_at: Utc::now(),
            published: true,
        };
        let blocks: Vec<&str> = article.paragraphs().collect();
        assert_eq!(blocks, vec!["first", "", "second"]);
    }
}
