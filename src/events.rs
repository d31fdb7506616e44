// Events that flow from spawned request tasks back to the UI loop
//
// Every network operation runs in its own tokio task and reports its result
// as one of these messages over an mpsc channel. The UI task owns all state,
// so this is the only way request outcomes reach it. Events that belong to a
// view the user has already left are discarded on arrival.

use crate::api::types::{Article, AuthResponse, Comment, User};
use crate::api::ApiError;

/// Completion message for one async API call
#[derive(Debug)]
pub enum AppEvent {
    /// The persisted token was resolved (or rejected) by /api/auth/me
    SessionResolved(Result<User, ApiError>),

    /// Login or signup finished
    AuthFinished(Result<AuthResponse, ApiError>),

    /// The public article collection arrived
    ArticlesLoaded(Result<Vec<Article>, ApiError>),

    /// A single article arrived for the reader view
    ArticleLoaded {
        article_id: i64,
        result: Result<Article, ApiError>,
    },

    /// The comment collection for an article arrived
    CommentsLoaded {
        article_id: i64,
        result: Result<Vec<Comment>, ApiError>,
    },

    /// A comment post finished; success triggers a comment re-fetch
    CommentPosted {
        article_id: i64,
        result: Result<(), ApiError>,
    },

    /// A comment delete finished
    CommentDeleted {
        article_id: i64,
        comment_id: i64,
        result: Result<(), ApiError>,
    },

    /// The acting user's own articles arrived for the admin console
    MyArticlesLoaded(Result<Vec<Article>, ApiError>),

    /// An article create or update finished
    DraftSaved(Result<(), ApiError>),

    /// An article delete finished
    ArticleDeleted {
        article_id: i64,
        result: Result<(), ApiError>,
    },
}
