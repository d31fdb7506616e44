// Article list controller
//
// Fetches the public collection and filters it client-side: a live,
// case-insensitive substring match of the search term against titles only.
// No network traffic per keystroke, and no re-sorting - the backend's order
// is displayed as-is.

use crate::api::types::Article;
use crate::tui::input::TextField;

/// Case-insensitive title filter over an already-fetched collection
///
/// An empty term returns the full set. Matching is on the title alone,
/// never content or author.
pub fn filter_by_title<'a>(articles: &'a [Article], term: &str) -> Vec<&'a Article> {
    if term.is_empty() {
        return articles.iter().collect();
    }
    let needle = term.to_lowercase();
    articles
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .collect()
}

/// State for the article list view
#[derive(Debug, Default)]
pub struct ArticleListState {
    pub articles: Vec<Article>,
    pub search: TextField,
    /// Whether keystrokes currently go to the search box
    pub searching: bool,
    /// Index into the *filtered* list
    pub selected: usize,
    pub loading: bool,
    /// Set after the first fetch settles; distinguishes "still empty because
    /// nothing was ever loaded" from "the archive really is empty"
    pub loaded_once: bool,
}

impl ArticleListState {
    pub fn filtered(&self) -> Vec<&Article> {
        filter_by_title(&self.articles, self.search.value())
    }

    /// Article currently under the cursor, after filtering
    pub fn selected_article(&self) -> Option<&Article> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside the filtered list as the term changes
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn on_loaded(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.loading = false;
        self.loaded_once = true;
        self.clamp_selection();
    }

    pub fn on_load_failed(&mut self) {
        // Read failures are silent from the UI's perspective
        self.loading = false;
        self.loaded_once = true;
    }

    /// Message for an empty list: "no articles at all" and "search matched
    /// nothing" are distinct states
    pub fn empty_message(&self) -> &'static str {
        if self.search.value().is_empty() {
            "The archives are empty."
        } else {
            "No matching articles."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: i64, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            content: String::new(),
            author_id: 1,
            author_name: "ed".to_string(),
            created_at: Utc::now(),
            published: true,
        }
    }

    #[test]
    fn empty_term_returns_full_set_in_backend_order() {
        let articles = vec![article(3, "C"), article(1, "A"), article(2, "B")];
        let filtered = filter_by_title(&articles, "");
        let ids: Vec<i64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_title() {
        let articles = vec![
            article(1, "Rust in Production"),
            article(2, "Why I stopped using rust"),
            article(3, "Gardening notes"),
        ];
        let ids: Vec<i64> = filter_by_title(&articles, "RUST")
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        // Substring anywhere in the title counts
        assert_eq!(filter_by_title(&articles, "notes").len(), 1);
        // Content is never searched
        assert!(filter_by_title(&articles, "xyzzy").is_empty());
    }

    #[test]
    fn empty_states_are_distinguished() {
        let mut state = ArticleListState::default();
        state.on_loaded(vec![]);
        assert_eq!(state.empty_message(), "The archives are empty.");

        state.on_loaded(vec![article(1, "Hello")]);
        for c in "zzz".chars() {
            state.search.insert(c);
        }
        assert!(state.filtered().is_empty());
        assert_eq!(state.empty_message(), "No matching articles.");
    }

    #[test]
    fn selection_clamps_when_filter_shrinks() {
        let mut state = ArticleListState::default();
        state.on_loaded(vec![
            article(1, "Alpha"),
            article(2, "Beta"),
            article(3, "Alpine"),
        ]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_article().unwrap().id, 3);

        for c in "alp".chars() {
            state.search.insert(c);
        }
        state.clamp_selection();
        assert_eq!(state.filtered().len(), 2);
        assert!(state.selected < 2);
    }
}
