use crate::content::{CategoryFilter, ContentStore};
use crate::utils::theme_loader::ThemeMode;

/// The currently rendered top-level view. One variant per screen, with the
/// selection carried inside the variant, so a "detail view with the about
/// panel open" cannot be represented at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Listing,
    PostDetail { post_id: String },
    About,
}

/// Session-scoped navigation and selection state. Created once with defaults
/// and mutated only by the transition methods below; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub screen: Screen,
    pub active_category: CategoryFilter,
    pub search_query: String,
    pub theme_mode: ThemeMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Listing,
            active_category: CategoryFilter::All,
            search_query: String::new(),
            theme_mode: ThemeMode::Light,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the listing to a category. Always lands on Listing, dropping
    /// any open detail or about view. The search query is kept.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
        self.screen = Screen::Listing;
    }

    /// Open a post from the listing. An id the store does not know is a
    /// no-op: the state stays where it is and the caller is told so.
    pub fn open_post(&mut self, store: &ContentStore, id: &str) -> bool {
        if store.post_by_id(id).is_none() {
            tracing::warn!("open_post: unknown post id '{}'", id);
            return false;
        }
        self.screen = Screen::PostDetail {
            post_id: id.to_string(),
        };
        true
    }

    /// Leave the detail view. Category and search query are untouched.
    pub fn back_to_list(&mut self) {
        self.screen = Screen::Listing;
    }

    /// Open the about screen, dropping any post selection.
    pub fn open_about(&mut self) {
        self.screen = Screen::About;
    }

    /// Logo click: back to the listing with the category reset to All.
    pub fn go_home(&mut self) {
        self.active_category = CategoryFilter::All;
        self.screen = Screen::Listing;
    }

    /// Replace the search query. Category and screen are unchanged; the
    /// caller only reaches this from the listing.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Flip light/dark. Navigation fields are untouched.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
    }

    pub fn selected_post_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::PostDetail { post_id } => Some(post_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn store() -> ContentStore {
        ContentStore::load().unwrap()
    }

    #[test]
    fn defaults_are_listing_all_light() {
        let state = ViewState::new();
        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(state.active_category, CategoryFilter::All);
        assert_eq!(state.search_query, "");
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn select_category_leaves_detail_and_about() {
        let store = store();
        let mut state = ViewState::new();

        assert!(state.open_post(&store, "1"));
        state.select_category(CategoryFilter::Only(Category::SpringBoot));
        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(state.selected_post_id(), None);

        state.open_about();
        state.select_category(CategoryFilter::All);
        assert_eq!(state.screen, Screen::Listing);
    }

    #[test]
    fn open_about_clears_post_selection() {
        let store = store();
        let mut state = ViewState::new();
        assert!(state.open_post(&store, "2"));

        state.open_about();
        assert_eq!(state.screen, Screen::About);
        assert_eq!(state.selected_post_id(), None);
    }

    #[test]
    fn back_to_list_preserves_active_category() {
        let store = store();
        let mut state = ViewState::new();
        state.select_category(CategoryFilter::Only(Category::JavaSe));

        assert!(state.open_post(&store, "1"));
        state.back_to_list();
        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(
            state.active_category,
            CategoryFilter::Only(Category::JavaSe)
        );
    }

    #[test]
    fn go_home_resets_category_and_screen() {
        let store = store();
        let mut state = ViewState::new();
        state.select_category(CategoryFilter::Only(Category::SpringBoot));
        assert!(state.open_post(&store, "1"));

        state.go_home();
        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(state.active_category, CategoryFilter::All);
    }

    #[test]
    fn open_post_with_unknown_id_is_a_noop() {
        let store = store();
        let mut state = ViewState::new();
        state.select_category(CategoryFilter::Only(Category::JavaSe));

        assert!(!state.open_post(&store, "999"));
        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(
            state.active_category,
            CategoryFilter::Only(Category::JavaSe)
        );
    }

    #[test]
    fn toggle_theme_does_not_touch_navigation() {
        let store = store();
        let mut state = ViewState::new();
        assert!(state.open_post(&store, "1"));
        state.set_search_query("hash");

        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.selected_post_id(), Some("1"));
        assert_eq!(state.search_query, "hash");

        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn set_search_query_keeps_category_and_screen() {
        let mut state = ViewState::new();
        state.select_category(CategoryFilter::Only(Category::SystemDesign));
        state.set_search_query("cap theorem");

        assert_eq!(state.screen, Screen::Listing);
        assert_eq!(
            state.active_category,
            CategoryFilter::Only(Category::SystemDesign)
        );
        assert_eq!(state.search_query, "cap theorem");
    }
}
