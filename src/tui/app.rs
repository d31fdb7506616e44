// TUI application state
//
// Owns every piece of client state: the session, the active view, one
// controller per screen, the modal slot and the toast. Network work is
// spawned from here and reports back as AppEvents; handle_event() applies
// results and discards any that belong to a view the user already left.

use super::clipboard;
use super::input::TextField;
use super::modal::{Modal, ModalAction, PendingAction};
use super::toast::Toast;
use crate::api::types::{Article, CommentPayload, Credentials, User};
use crate::api::ApiClient;
use crate::config::Config;
use crate::controllers::admin::AdminState;
use crate::controllers::articles::ArticleListState;
use crate::controllers::reader::{self, ReaderState};
use crate::events::AppEvent;
use crate::session::SessionStore;
use crate::share;
use tokio::sync::mpsc;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    ArticleList,
    ArticleDetail(i64),
    AdminConsole,
    AdminEditor,
}

impl View {
    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::ArticleList => "Front page",
            View::ArticleDetail(_) => "Article",
            View::AdminConsole => "Editor's desk",
            View::AdminEditor => "Manuscript",
        }
    }
}

/// Navigation requests, before gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Articles,
    Article(i64),
    Admin,
    /// Anything that matched no known target
    Unknown,
}

/// Parse a path-style navigation target (e.g. from `--open`)
pub fn parse_route(s: &str) -> Route {
    let path = s.trim().trim_start_matches('/');
    match path {
        "" => Route::Articles,
        "login" => Route::Login,
        "admin" => Route::Admin,
        _ => match path.strip_prefix("blog/") {
            Some(id) => id.parse().map(Route::Article).unwrap_or(Route::Unknown),
            None => Route::Unknown,
        },
    }
}

/// Gate a navigation request against the session
///
/// Unauthenticated requests all land on the login screen; the admin console
/// is reachable only with the admin role; anything unknown (or a login
/// request while already signed in) falls through to the article list -
/// a catch-all redirect, never an error screen.
pub fn resolve_route(route: Route, authenticated: bool, is_admin: bool) -> View {
    if !authenticated {
        return View::Login;
    }
    match route {
        Route::Articles => View::ArticleList,
        Route::Article(id) => View::ArticleDetail(id),
        Route::Admin if is_admin => View::AdminConsole,
        Route::Admin => View::ArticleList,
        Route::Login | Route::Unknown => View::ArticleList,
    }
}

/// Login/signup toggle on the one auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFocus {
    #[default]
    Username,
    Password,
}

/// State of the authentication form
#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub focus: AuthFocus,
    pub username: TextField,
    pub password: TextField,
    /// Inline error line; auth failures never raise modals
    pub error: Option<String>,
    pub submitting: bool,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.error = None;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AuthFocus::Username => AuthFocus::Password,
            AuthFocus::Password => AuthFocus::Username,
        };
    }

    pub fn reset(&mut self) {
        *self = AuthForm::default();
    }
}

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub api: ApiClient,
    pub session: SessionStore,
    pub view: View,
    pub auth: AuthForm,
    pub articles: ArticleListState,
    pub reader: ReaderState,
    pub admin: AdminState,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    /// The persisted token is being resolved via /api/auth/me
    pub resolving_session: bool,
    tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: Config,
        api: ApiClient,
        session: SessionStore,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        // Initial state is decided synchronously from token presence alone;
        // resolution of the profile happens in the background
        let view = if session.is_authenticated() {
            View::ArticleList
        } else {
            View::Login
        };
        Self {
            config,
            api,
            session,
            view,
            auth: AuthForm::default(),
            articles: ArticleListState::default(),
            reader: ReaderState::default(),
            admin: AdminState::default(),
            modal: None,
            toast: None,
            should_quit: false,
            resolving_session: false,
            tx,
        }
    }

    /// Kick off the cold-start work: resolve a persisted token and load the
    /// initial view's data
    pub fn start(&mut self, initial: Option<Route>) {
        if let Some(token) = self.session.token().map(str::to_owned) {
            self.resolving_session = true;
            let api = self.api.clone();
            let tx = self.tx.clone();
            tokio::spawn(async move {
                let result = api.me(&token).await;
                let _ = tx.send(AppEvent::SessionResolved(result)).await;
            });
        }
        match initial {
            Some(route) => self.navigate(route),
            None => self.enter_view(),
        }
    }

    // ── navigation ──────────────────────────────────────────────────────────

    pub fn navigate(&mut self, route: Route) {
        let is_admin = self.session.user().map(User::is_admin).unwrap_or(false);
        let target = resolve_route(route, self.session.is_authenticated(), is_admin);
        if target == View::AdminConsole && self.view == View::AdminConsole {
            return;
        }
        self.view = target;
        self.enter_view();
    }

    /// Per-view entry work; the list views re-fetch every time they become
    /// active again
    fn enter_view(&mut self) {
        match self.view {
            View::Login | View::AdminEditor => {}
            View::ArticleList => self.refresh_articles(),
            View::ArticleDetail(id) => self.load_article(id),
            View::AdminConsole => self.refresh_my_articles(),
        }
    }

    /// Open the manuscript editor with an empty draft or a copy of `article`
    pub fn open_editor(&mut self, article: Option<&Article>) {
        if self.view != View::AdminConsole {
            return;
        }
        self.admin.open_editor(article);
        self.view = View::AdminEditor;
    }

    /// Leave the editor without saving
    pub fn cancel_editor(&mut self) {
        if self.view == View::AdminEditor {
            self.view = View::AdminConsole;
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.articles = ArticleListState::default();
        self.reader = ReaderState::default();
        self.admin = AdminState::default();
        self.auth.reset();
        self.modal = None;
        self.view = View::Login;
    }

    // ── spawned requests ────────────────────────────────────────────────────

    pub fn refresh_articles(&mut self) {
        self.articles.loading = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.articles().await;
            let _ = tx.send(AppEvent::ArticlesLoaded(result)).await;
        });
    }

    fn load_article(&mut self, id: i64) {
        self.reader = ReaderState::new(id);
        let api = self.api.clone();
        let tx = self.tx.clone();
        let token = self.session.token().map(str::to_owned);
        tokio::spawn(async move {
            // Article and comments load concurrently; the view waits for both
            let (article, comments) = tokio::join!(
                api.article(id, token.as_deref()),
                api.comments(id, token.as_deref()),
            );
            let _ = tx
                .send(AppEvent::ArticleLoaded {
                    article_id: id,
                    result: article,
                })
                .await;
            let _ = tx
                .send(AppEvent::CommentsLoaded {
                    article_id: id,
                    result: comments,
                })
                .await;
        });
    }

    fn fetch_comments(&self, article_id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let token = self.session.token().map(str::to_owned);
        tokio::spawn(async move {
            let result = api.comments(article_id, token.as_deref()).await;
            let _ = tx
                .send(AppEvent::CommentsLoaded { article_id, result })
                .await;
        });
    }

    pub fn refresh_my_articles(&mut self) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        self.admin.loading = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.my_articles(&token).await;
            let _ = tx.send(AppEvent::MyArticlesLoaded(result)).await;
        });
    }

    /// Submit the auth form (login or signup depending on mode)
    pub fn submit_auth(&mut self) {
        if self.auth.submitting {
            return;
        }
        if self.auth.username.is_empty() || self.auth.password.is_empty() {
            self.auth.error = Some("Username and password are required".into());
            return;
        }
        self.auth.error = None;
        self.auth.submitting = true;

        let credentials = Credentials {
            username: self.auth.username.value().to_string(),
            password: self.auth.password.value().to_string(),
        };
        let mode = self.auth.mode;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                AuthMode::Login => api.login(&credentials).await,
                AuthMode::Signup => api.signup(&credentials).await,
            };
            let _ = tx.send(AppEvent::AuthFinished(result)).await;
        });
    }

    /// Post the composed comment; whitespace-only content never leaves the
    /// client
    pub fn submit_comment(&mut self) {
        if self.reader.submitting {
            return;
        }
        let Some(content) = reader::validate_comment(self.reader.comment_input.value()) else {
            return;
        };
        let View::ArticleDetail(article_id) = self.view else {
            return;
        };
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        self.reader.submitting = true;

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api
                .post_comment(article_id, &CommentPayload { content }, &token)
                .await;
            let _ = tx
                .send(AppEvent::CommentPosted { article_id, result })
                .await;
        });
    }

    /// Ask for confirmation before deleting the selected comment; only the
    /// article's author ever gets this far
    pub fn request_delete_comment(&mut self) {
        if !reader::can_moderate(self.session.user(), self.reader.article.as_ref()) {
            return;
        }
        let View::ArticleDetail(article_id) = self.view else {
            return;
        };
        let Some(comment) = self.reader.selected_comment() else {
            return;
        };
        self.modal = Some(Modal::confirm(
            format!("Delete the comment by @{}?", comment.username),
            PendingAction::DeleteComment {
                article_id,
                comment_id: comment.id,
            },
        ));
    }

    /// Ask for confirmation before deleting the selected owned article
    pub fn request_delete_article(&mut self) {
        if self.admin.deleting {
            return;
        }
        let Some(article) = self.admin.selected_article() else {
            return;
        };
        self.modal = Some(Modal::confirm(
            format!("Permanently remove \"{}\"?", article.title),
            PendingAction::DeleteArticle(article.id),
        ));
    }

    /// Save the editor draft: POST for a new article, PUT when the draft
    /// carries an id
    pub fn save_draft(&mut self) {
        if self.admin.saving {
            return;
        }
        let Some(payload) = self.admin.draft.payload() else {
            // The form refuses while a field is empty
            return;
        };
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        self.admin.saving = true;

        let id = self.admin.draft.id;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match id {
                Some(id) => api.update_article(id, &payload, &token).await,
                None => api.create_article(&payload, &token).await,
            };
            let _ = tx.send(AppEvent::DraftSaved(result)).await;
        });
    }

    fn run_pending(&mut self, action: PendingAction) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        let api = self.api.clone();
        let tx = self.tx.clone();
        match action {
            PendingAction::DeleteArticle(article_id) => {
                self.admin.deleting = true;
                tokio::spawn(async move {
                    let result = api.delete_article(article_id, &token).await;
                    let _ = tx
                        .send(AppEvent::ArticleDeleted { article_id, result })
                        .await;
                });
            }
            PendingAction::DeleteComment {
                article_id,
                comment_id,
            } => {
                tokio::spawn(async move {
                    let result = api.delete_comment(article_id, comment_id, &token).await;
                    let _ = tx
                        .send(AppEvent::CommentDeleted {
                            article_id,
                            comment_id,
                            result,
                        })
                        .await;
                });
            }
        }
    }

    // ── event handling ──────────────────────────────────────────────────────

    /// Apply one request result. Results for views the user has navigated
    /// away from are dropped here.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionResolved(result) => {
                self.resolving_session = false;
                match result {
                    Ok(user) => self.session.attach_user(user),
                    Err(e) => {
                        // The one unconditional, fatal-to-the-session path
                        tracing::warn!("session resolution failed: {}", e.message());
                        self.session.invalidate();
                        self.auth.reset();
                        self.auth.error = Some("Session expired, please sign in again".into());
                        self.view = View::Login;
                    }
                }
            }
            AppEvent::AuthFinished(result) => {
                self.auth.submitting = false;
                match result {
                    Ok(auth) => {
                        self.session.login(auth.token, auth.user);
                        self.auth.reset();
                        self.navigate(Route::Articles);
                    }
                    Err(e) => {
                        self.auth.error = Some(e.message().to_string());
                    }
                }
            }
            AppEvent::ArticlesLoaded(result) => {
                if self.view != View::ArticleList {
                    return;
                }
                match result {
                    Ok(articles) => self.articles.on_loaded(articles),
                    Err(e) => {
                        tracing::error!("failed to fetch articles: {}", e.message());
                        self.articles.on_load_failed();
                    }
                }
            }
            AppEvent::ArticleLoaded { article_id, result } => {
                if self.view != View::ArticleDetail(article_id) {
                    return;
                }
                match result {
                    Ok(article) => self.reader.on_article(Some(article)),
                    Err(e) => {
                        // Renders the not-found state, not an error screen
                        tracing::error!("failed to fetch article {article_id}: {}", e.message());
                        self.reader.on_article(None);
                    }
                }
            }
            AppEvent::CommentsLoaded { article_id, result } => {
                if self.view != View::ArticleDetail(article_id) {
                    return;
                }
                match result {
                    Ok(comments) => self.reader.on_comments(comments),
                    Err(e) => {
                        tracing::error!(
                            "failed to fetch comments for {article_id}: {}",
                            e.message()
                        );
                        self.reader.on_comments_failed();
                    }
                }
            }
            AppEvent::CommentPosted { article_id, result } => {
                if self.view != View::ArticleDetail(article_id) {
                    return;
                }
                match result {
                    Ok(()) => {
                        self.reader.on_posted();
                        // Re-fetch the whole collection; no optimistic append
                        self.fetch_comments(article_id);
                    }
                    Err(e) => {
                        tracing::error!("failed to post comment: {}", e.message());
                        self.reader.on_post_failed();
                        self.modal =
                            Some(Modal::notice("Failed to post comment. Please try again."));
                    }
                }
            }
            AppEvent::CommentDeleted {
                article_id,
                comment_id,
                result,
            } => {
                if self.view != View::ArticleDetail(article_id) {
                    return;
                }
                match result {
                    Ok(()) => self.reader.remove_comment(comment_id),
                    Err(e) => {
                        tracing::error!("failed to delete comment {comment_id}: {}", e.message());
                        self.modal = Some(Modal::notice("Delete failed"));
                    }
                }
            }
            AppEvent::MyArticlesLoaded(result) => {
                if !matches!(self.view, View::AdminConsole | View::AdminEditor) {
                    return;
                }
                match result {
                    Ok(articles) => self.admin.on_loaded(articles),
                    Err(e) => {
                        tracing::error!("failed to fetch own articles: {}", e.message());
                        self.admin.on_load_failed();
                    }
                }
            }
            AppEvent::DraftSaved(result) => match result {
                Ok(()) => {
                    self.admin.on_saved();
                    if self.view == View::AdminEditor {
                        self.view = View::AdminConsole;
                    }
                    self.refresh_my_articles();
                }
                Err(e) => {
                    tracing::error!("failed to save article: {}", e.message());
                    self.admin.on_save_failed();
                    self.modal = Some(Modal::notice("Save failed"));
                }
            },
            AppEvent::ArticleDeleted { article_id, result } => match result {
                Ok(()) => self.admin.remove_article(article_id),
                Err(e) => {
                    tracing::error!("failed to delete article {article_id}: {}", e.message());
                    self.admin.deleting = false;
                    self.modal = Some(Modal::notice("Delete failed"));
                }
            },
        }
    }

    // ── modal / toast plumbing ──────────────────────────────────────────────

    /// Route a key into the open modal; returns true if one was open
    pub fn handle_modal_key(&mut self, key: crossterm::event::KeyCode) -> bool {
        let Some(ref mut modal) = self.modal else {
            return false;
        };
        match modal.handle_input(key) {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::Confirm(action) => {
                self.modal = None;
                self.run_pending(action);
            }
            ModalAction::Copy { label, text } => {
                self.copy_with_toast(label, &text);
            }
        }
        true
    }

    /// Open the share popover for one article
    pub fn open_share(&mut self, article: &Article) {
        let url = share::article_url(&self.config.site_url, article.id);
        let links = share::share_links(&self.config.site_url, article);
        self.modal = Some(Modal::share(article.title.clone(), url, links));
    }

    /// Copy text and acknowledge with a transient toast
    pub fn copy_with_toast(&mut self, label: &str, text: &str) {
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => self.show_toast(format!("✓ Copied {label}")),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e:#}");
                self.show_toast("✗ Copy failed");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic tick: expire the toast
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Whether keystrokes currently belong to a text input (which suspends
    /// single-letter shortcuts)
    pub fn text_input_active(&self) -> bool {
        match self.view {
            View::Login | View::AdminEditor => true,
            View::ArticleList => self.articles.searching,
            View::ArticleDetail(_) => self.reader.composing,
            View::AdminConsole => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AuthResponse, Role};
    use crate::api::ApiError;
    use chrono::Utc;
    use std::path::PathBuf;

    fn temp_session(test: &str) -> SessionStore {
        let path: PathBuf = std::env::temp_dir()
            .join(format!("broadsheet-app-{}-{test}", std::process::id()))
            .join("token");
        let _ = std::fs::remove_file(&path);
        SessionStore::load(path)
    }

    fn test_app(test: &str) -> (App, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel(64);
        let app = App::new(
            Config::default(),
            // Nothing listens here; spawned requests fail fast and are
            // irrelevant to state-machine tests
            ApiClient::new("http://127.0.0.1:1"),
            temp_session(test),
            tx,
        );
        (app, rx)
    }

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            username: format!("user{id}"),
            role,
        }
    }

    fn auth_ok(role: Role) -> AppEvent {
        AppEvent::AuthFinished(Ok(AuthResponse {
            token: "tok".into(),
            user: user(1, role),
        }))
    }

    #[test]
    fn route_parsing_covers_known_paths() {
        assert_eq!(parse_route("/"), Route::Articles);
        assert_eq!(parse_route("/admin"), Route::Admin);
        assert_eq!(parse_route("/blog/42"), Route::Article(42));
        assert_eq!(parse_route("login"), Route::Login);
        assert_eq!(parse_route("/blog/not-a-number"), Route::Unknown);
        assert_eq!(parse_route("/nowhere"), Route::Unknown);
    }

    #[test]
    fn unauthenticated_requests_all_land_on_login() {
        for route in [
            Route::Articles,
            Route::Article(1),
            Route::Admin,
            Route::Unknown,
        ] {
            assert_eq!(resolve_route(route, false, false), View::Login);
        }
    }

    #[test]
    fn admin_console_is_role_gated() {
        assert_eq!(resolve_route(Route::Admin, true, true), View::AdminConsole);
        // Non-admins are redirected to the list, not an error page
        assert_eq!(resolve_route(Route::Admin, true, false), View::ArticleList);
    }

    #[test]
    fn unknown_targets_fall_through_to_the_list() {
        assert_eq!(resolve_route(Route::Unknown, true, false), View::ArticleList);
        assert_eq!(resolve_route(Route::Login, true, false), View::ArticleList);
    }

    #[tokio::test]
    async fn login_transitions_to_the_article_list() {
        let (mut app, _rx) = test_app("login-transition");
        assert_eq!(app.view, View::Login);

        app.handle_event(auth_ok(Role::Member));
        assert_eq!(app.view, View::ArticleList);
        assert!(app.session.is_authenticated());
        app.session.logout();
    }

    #[tokio::test]
    async fn failed_auth_shows_an_inline_error() {
        let (mut app, _rx) = test_app("auth-error");
        app.handle_event(AppEvent::AuthFinished(Err(ApiError::failed(
            "Invalid credentials",
        ))));
        assert_eq!(app.view, View::Login);
        assert_eq!(app.auth.error.as_deref(), Some("Invalid credentials"));
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn rejected_session_forces_logout_and_clears_the_token() {
        let (mut app, _rx) = test_app("session-reject");
        app.handle_event(auth_ok(Role::Member));
        assert!(app.session.is_authenticated());

        app.handle_event(AppEvent::SessionResolved(Err(ApiError::failed("expired"))));
        assert_eq!(app.view, View::Login);
        assert!(!app.session.is_authenticated());
        assert!(app.session.token().is_none());
    }

    #[tokio::test]
    async fn logout_returns_to_login_from_any_view() {
        let (mut app, _rx) = test_app("logout");
        app.handle_event(auth_ok(Role::Admin));
        app.navigate(Route::Admin);
        assert_eq!(app.view, View::AdminConsole);

        app.logout();
        assert_eq!(app.view, View::Login);
        assert!(!app.session.is_authenticated());
    }

    #[tokio::test]
    async fn stale_article_results_are_discarded() {
        let (mut app, _rx) = test_app("stale");
        app.handle_event(auth_ok(Role::Member));
        assert_eq!(app.view, View::ArticleList);

        // A detail response arrives after the user went back to the list
        app.handle_event(AppEvent::ArticleLoaded {
            article_id: 5,
            result: Err(ApiError::failed("late")),
        });
        assert!(app.reader.article.is_none());
        assert!(!app.reader.ready());
        app.session.logout();
    }

    #[tokio::test]
    async fn editor_round_trips_through_save() {
        let (mut app, _rx) = test_app("editor");
        app.handle_event(auth_ok(Role::Admin));
        app.navigate(Route::Admin);

        app.open_editor(None);
        assert_eq!(app.view, View::AdminEditor);
        assert!(!app.admin.draft.is_update());

        app.handle_event(AppEvent::DraftSaved(Ok(())));
        assert_eq!(app.view, View::AdminConsole);
        assert!(app.admin.draft.title.is_empty());
        app.session.logout();
    }

    #[tokio::test]
    async fn failed_save_raises_a_blocking_notice() {
        let (mut app, _rx) = test_app("save-fail");
        app.handle_event(auth_ok(Role::Admin));
        app.navigate(Route::Admin);
        app.open_editor(None);

        app.handle_event(AppEvent::DraftSaved(Err(ApiError::failed("boom"))));
        assert_eq!(app.view, View::AdminEditor);
        assert!(matches!(app.modal, Some(Modal::Notice(_))));
        app.session.logout();
    }

    #[tokio::test]
    async fn comment_post_failure_keeps_input_and_raises_notice() {
        let (mut app, _rx) = test_app("comment-fail");
        app.handle_event(auth_ok(Role::Member));
        app.navigate(Route::Article(3));
        app.reader.comment_input = super::super::input::TextArea::new("draft text");
        app.reader.submitting = true;

        app.handle_event(AppEvent::CommentPosted {
            article_id: 3,
            result: Err(ApiError::failed("nope")),
        });
        assert_eq!(app.reader.comment_input.value(), "draft text");
        assert!(matches!(app.modal, Some(Modal::Notice(_))));
        app.session.logout();
    }

    #[tokio::test]
    async fn moderation_request_is_refused_for_non_authors() {
        let (mut app, _rx) = test_app("moderation");
        app.handle_event(auth_ok(Role::Member)); // user id 1
        app.navigate(Route::Article(3));
        app.reader.on_article(Some(Article {
            id: 3,
            title: "T".into(),
            content: "c".into(),
            author_id: 99, // someone else's article
            author_name: "other".into(),
            created_at: Utc::now(),
            published: true,
        }));
        app.reader.on_comments(vec![crate::api::types::Comment {
            id: 1,
            article_id: 3,
            username: "user1".into(), // we wrote this comment ourselves
            content: "mine".into(),
            created_at: Utc::now(),
        }]);

        app.request_delete_comment();
        // No confirmation dialog, no endpoint call: article ownership governs
        assert!(app.modal.is_none());
        app.session.logout();
    }
}
