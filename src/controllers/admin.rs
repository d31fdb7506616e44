// Admin console controller
//
// Works exclusively against the acting user's own articles (/api/blogs/my),
// never the public collection. One draft form doubles as create and update,
// discriminated by the presence of an id. Deletes filter local state by id
// after the backend's 204.

use crate::api::types::{Article, ArticlePayload};
use crate::tui::input::{TextArea, TextField};

/// Which editor field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Title,
    Content,
}

/// The working draft behind the editor form
///
/// `id` present means the save goes out as an update (PUT), absent as a
/// create (POST).
#[derive(Debug, Default)]
pub struct Draft {
    pub id: Option<i64>,
    pub title: TextField,
    pub content: TextArea,
    pub published: bool,
}

impl Draft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: Some(article.id),
            title: TextField::new(article.title.clone()),
            content: TextArea::new(article.content.clone()),
            published: article.published,
        }
    }

    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// The form refuses to fire with an empty title or body; there is no
    /// separate validation pass beyond this.
    pub fn payload(&self) -> Option<ArticlePayload> {
        if self.title.is_empty() || self.content.is_empty() {
            return None;
        }
        Some(ArticlePayload {
            title: self.title.value().to_string(),
            content: self.content.value().to_string(),
            published: self.published,
        })
    }
}

/// State for the admin console and its editor
#[derive(Debug, Default)]
pub struct AdminState {
    /// The acting user's own articles only
    pub articles: Vec<Article>,
    pub selected: usize,
    pub loading: bool,
    pub loaded_once: bool,
    pub draft: Draft,
    pub focus: EditorFocus,
    /// A save is in flight; suppresses re-submission
    pub saving: bool,
    /// A delete is in flight
    pub deleting: bool,
}

impl AdminState {
    /// Open the editor with an empty draft (create) or a row's copy (update)
    pub fn open_editor(&mut self, article: Option<&Article>) {
        self.draft = match article {
            Some(article) => Draft::from_article(article),
            None => Draft::default(),
        };
        self.focus = EditorFocus::Title;
    }

    /// Successful save: reset the draft; the caller re-fetches the list
    pub fn on_saved(&mut self) {
        self.saving = false;
        self.draft = Draft::default();
    }

    pub fn on_save_failed(&mut self) {
        self.saving = false;
    }

    pub fn on_loaded(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.loading = false;
        self.loaded_once = true;
        self.clamp_selection();
    }

    pub fn on_load_failed(&mut self) {
        self.loading = false;
        self.loaded_once = true;
    }

    /// Remove a deleted article from local state by id
    pub fn remove_article(&mut self, article_id: i64) {
        self.deleting = false;
        self.articles.retain(|a| a.id != article_id);
        self.clamp_selection();
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.articles.is_empty() {
            self.selected = (self.selected + 1).min(self.articles.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.articles.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.articles.len() {
            self.selected = self.articles.len() - 1;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Title => EditorFocus::Content,
            EditorFocus::Content => EditorFocus::Title,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: i64) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            content: "body".into(),
            author_id: 1,
            author_name: "me".into(),
            created_at: Utc::now(),
            published: true,
        }
    }

    #[test]
    fn empty_draft_refuses_to_produce_a_payload() {
        let draft = Draft::default();
        assert!(draft.payload().is_none());

        let mut titled = Draft::default();
        titled.title = TextField::new("Title only");
        assert!(titled.payload().is_none());

        titled.content = TextArea::new("And a body");
        let payload = titled.payload().unwrap();
        assert_eq!(payload.title, "Title only");
    }

    #[test]
    fn draft_id_discriminates_create_from_update() {
        let mut state = AdminState::default();
        state.open_editor(None);
        assert!(!state.draft.is_update());

        let existing = article(12);
        state.open_editor(Some(&existing));
        assert!(state.draft.is_update());
        assert_eq!(state.draft.id, Some(12));
        assert_eq!(state.draft.title.value(), "Article 12");
    }

    #[test]
    fn saved_draft_resets_for_the_next_edit() {
        let mut state = AdminState::default();
        state.open_editor(Some(&article(5)));
        state.saving = true;

        state.on_saved();
        assert!(!state.saving);
        assert!(state.draft.id.is_none());
        assert!(state.draft.title.is_empty());
    }

    #[test]
    fn delete_filters_local_state_by_id() {
        let mut state = AdminState::default();
        state.on_loaded(vec![article(1), article(2), article(3)]);
        state.select_next();
        state.select_next();

        state.remove_article(3);
        let ids: Vec<i64> = state.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(state.selected_article().is_some());
    }
}
