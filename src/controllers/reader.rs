// Article detail controller
//
// Owns one article plus its comment collection. Both fetches must settle
// before the view renders; an article that never arrives renders a distinct
// not-found state instead of an error screen. Posting a comment re-fetches
// the whole collection (no optimistic append); deleting one removes it from
// local state by id after the backend's 204.

use crate::api::types::{Article, Comment, User};
use crate::tui::input::TextArea;

/// Reject empty or whitespace-only comment content without a network call;
/// otherwise hand back the content to submit as-is.
pub fn validate_comment(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Comment moderation gate: only the *article's* author may delete comments
/// on it. Having written the comment grants nothing.
pub fn can_moderate(user: Option<&User>, article: Option<&Article>) -> bool {
    match (user, article) {
        (Some(user), Some(article)) => user.id == article.author_id,
        _ => false,
    }
}

/// State for the article detail view
#[derive(Debug, Default)]
pub struct ReaderState {
    pub article_id: i64,
    pub article: Option<Article>,
    /// The article fetch finished, successfully or not
    article_settled: bool,
    pub comments: Vec<Comment>,
    comments_settled: bool,
    /// Keystrokes currently go to the comment composer
    pub composing: bool,
    pub comment_input: TextArea,
    /// A comment post is in flight; suppresses re-submission
    pub submitting: bool,
    /// Index into `comments` for moderation
    pub selected_comment: usize,
    /// Vertical scroll offset of the article body
    pub scroll: u16,
}

impl ReaderState {
    pub fn new(article_id: i64) -> Self {
        Self {
            article_id,
            ..Self::default()
        }
    }

    /// Both fetches have settled; the view may render
    pub fn ready(&self) -> bool {
        self.article_settled && self.comments_settled
    }

    /// Settled without an article: the distinct not-found state
    pub fn not_found(&self) -> bool {
        self.ready() && self.article.is_none()
    }

    pub fn on_article(&mut self, article: Option<Article>) {
        self.article = article;
        self.article_settled = true;
    }

    pub fn on_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        self.comments_settled = true;
        self.clamp_comment_selection();
    }

    pub fn on_comments_failed(&mut self) {
        // Silent read failure: the view settles with whatever it has
        self.comments_settled = true;
    }

    /// Successful post: the collection was re-fetched by the caller; clear
    /// the composer so the next comment starts fresh
    pub fn on_posted(&mut self) {
        self.submitting = false;
        self.comment_input.clear();
        self.composing = false;
    }

    /// Failed post: input stays populated for another attempt
    pub fn on_post_failed(&mut self) {
        self.submitting = false;
    }

    /// Remove a deleted comment from local state by id
    pub fn remove_comment(&mut self, comment_id: i64) {
        self.comments.retain(|c| c.id != comment_id);
        self.clamp_comment_selection();
    }

    pub fn selected_comment(&self) -> Option<&Comment> {
        self.comments.get(self.selected_comment)
    }

    pub fn select_next_comment(&mut self) {
        if !self.comments.is_empty() {
            self.selected_comment = (self.selected_comment + 1) % self.comments.len();
        }
    }

    fn clamp_comment_selection(&mut self) {
        if self.selected_comment >= self.comments.len() {
            self.selected_comment = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;
    use chrono::Utc;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            role: Role::Member,
        }
    }

    fn article(id: i64, author_id: i64) -> Article {
        Article {
            id,
            title: "T".into(),
            content: "body".into(),
            author_id,
            author_name: "author".into(),
            created_at: Utc::now(),
            published: true,
        }
    }

    fn comment(id: i64, username: &str) -> Comment {
        Comment {
            id,
            article_id: 1,
            username: username.into(),
            content: "hi".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn blank_comments_are_rejected_locally() {
        assert_eq!(validate_comment(""), None);
        assert_eq!(validate_comment("   \n\t "), None);
        assert_eq!(validate_comment(" hi "), Some(" hi ".to_string()));
    }

    #[test]
    fn only_the_article_author_may_moderate() {
        let author = user(7);
        let commenter = user(8);
        let art = article(1, 7);

        assert!(can_moderate(Some(&author), Some(&art)));
        // Writing the comment grants no delete rights
        assert!(!can_moderate(Some(&commenter), Some(&art)));
        assert!(!can_moderate(None, Some(&art)));
        assert!(!can_moderate(Some(&author), None));
    }

    #[test]
    fn view_renders_only_after_both_fetches_settle() {
        let mut state = ReaderState::new(1);
        assert!(!state.ready());

        state.on_article(Some(article(1, 7)));
        assert!(!state.ready());

        state.on_comments(vec![]);
        assert!(state.ready());
        assert!(!state.not_found());
    }

    #[test]
    fn missing_article_is_not_found_not_an_error() {
        let mut state = ReaderState::new(9);
        state.on_article(None);
        state.on_comments_failed();
        assert!(state.ready());
        assert!(state.not_found());
    }

    #[test]
    fn failed_post_keeps_the_input() {
        let mut state = ReaderState::new(1);
        state.comment_input = TextArea::new("my hot take");
        state.submitting = true;

        state.on_post_failed();
        assert!(!state.submitting);
        assert_eq!(state.comment_input.value(), "my hot take");

        state.submitting = true;
        state.on_posted();
        assert!(state.comment_input.is_empty());
    }

    #[test]
    fn delete_removes_by_id_and_clamps_selection() {
        let mut state = ReaderState::new(1);
        state.on_comments(vec![comment(1, "a"), comment(2, "b"), comment(3, "c")]);
        state.select_next_comment();
        state.select_next_comment();
        assert_eq!(state.selected_comment().unwrap().id, 3);

        state.remove_comment(3);
        assert_eq!(state.comments.len(), 2);
        assert!(state.selected_comment().is_some());

        state.remove_comment(99); // unknown id: no-op
        assert_eq!(state.comments.len(), 2);
    }
}
