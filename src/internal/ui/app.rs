use anyhow::Result;
use std::path::Path;

use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use strum::IntoEnumIterator;

use crate::config::AppConfig;
use crate::content::{Category, CategoryFilter, ContentStore, Post};
use crate::internal::filter::filter_posts;
use crate::internal::nav::{Screen, ViewState};
use crate::internal::notification::Notification;
use crate::utils::theme_loader::{ThemeMode, TuiTheme, load_theme};

use ratatui::widgets::ListState;

/// Input modes for the UI.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Search,
}

/// Actions/messages sent through the app action channel.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    Enter,
    Back,
    SelectCategory(CategoryFilter),
    OpenAbout,
    Home,
    ToggleTheme,
    ScrollDetailUp,
    ScrollDetailDown,
    ClearSearch,
}

/// Main application state: the fixed content store, the session view state,
/// and the presentation bookkeeping around them.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub store: ContentStore,
    pub state: ViewState,
    pub theme: TuiTheme,
    pub list_state: ListState,
    pub input_mode: InputMode,
    pub detail_scroll: usize,
    pub notification: Option<Notification>,
    pub config: AppConfig,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new() -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = AppConfig::load();
        let store = ContentStore::load()?;

        let mut state = ViewState::new();
        if let Some(mode) = ThemeMode::parse(&config.theme_mode) {
            state.theme_mode = mode;
        } else if !config.theme_mode.trim().is_empty() {
            tracing::warn!("Unknown theme_mode '{}', using light", config.theme_mode);
        }
        let theme = Self::resolve_theme(&config, state.theme_mode);

        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            store,
            state,
            theme,
            list_state,
            input_mode: InputMode::Normal,
            detail_scroll: 0,
            notification: None,
            config,
            action_tx,
            action_rx,
        })
    }

    /// Palette for the given mode: the configured theme file when one is set
    /// and loads, otherwise the built-in palette.
    fn resolve_theme(config: &AppConfig, mode: ThemeMode) -> TuiTheme {
        if config.theme_file.trim().is_empty() {
            return TuiTheme::builtin(mode);
        }
        match load_theme(Path::new(&config.theme_file), mode) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(
                    "Failed to load theme file '{}': {e:#}; using built-in palette",
                    config.theme_file
                );
                TuiTheme::builtin(mode)
            }
        }
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        let mut event_interval = tokio::time::interval(std::time::Duration::from_millis(16));

        loop {
            tui.draw(|f| crate::internal::ui::view::draw(self, f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    // Check for terminal events
                    if event::poll(std::time::Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                            && key.kind == KeyEventKind::Press {
                                self.handle_key_event(key);
                            }

                    if let Some(n) = &self.notification
                        && n.should_dismiss()
                    {
                        self.notification = None;
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if !self.running {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_input(key),
            InputMode::Normal => self.handle_normal_input(key),
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => {
                // Ignore / in search mode (it's the key that enters search mode)
            }
            KeyCode::Char(c) => {
                self.state.search_query.push(c);
                self.reset_selection();
            }
            KeyCode::Backspace => {
                self.state.search_query.pop();
                self.reset_selection();
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                match self.state.screen {
                    Screen::Listing => {
                        let _ = self.action_tx.send(Action::Quit);
                    }
                    Screen::PostDetail { .. } | Screen::About => {
                        let _ = self.action_tx.send(Action::Back);
                    }
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if matches!(self.state.screen, Screen::PostDetail { .. }) {
                    let _ = self.action_tx.send(Action::ScrollDetailDown);
                } else {
                    let _ = self.action_tx.send(Action::NavigateDown);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if matches!(self.state.screen, Screen::PostDetail { .. }) {
                    let _ = self.action_tx.send(Action::ScrollDetailUp);
                } else {
                    let _ = self.action_tx.send(Action::NavigateUp);
                }
            }
            KeyCode::Enter => {
                let _ = self.action_tx.send(Action::Enter);
            }
            KeyCode::Char('1') => {
                let _ = self.action_tx.send(Action::SelectCategory(CategoryFilter::All));
            }
            // 2-5 map onto the categories in declaration order.
            KeyCode::Char(c @ '2'..='5') => {
                let index = c as usize - '2' as usize;
                if let Some(category) = Category::iter().nth(index) {
                    let _ = self
                        .action_tx
                        .send(Action::SelectCategory(CategoryFilter::Only(category)));
                }
            }
            KeyCode::Char('a') => {
                let _ = self.action_tx.send(Action::OpenAbout);
            }
            KeyCode::Char('h') => {
                let _ = self.action_tx.send(Action::Home);
            }
            KeyCode::Char('t') => {
                let _ = self.action_tx.send(Action::ToggleTheme);
            }
            KeyCode::Char('/') => {
                if self.state.screen == Screen::Listing {
                    self.input_mode = InputMode::Search;
                }
            }
            KeyCode::Char('C') => {
                if !self.state.search_query.is_empty() {
                    let _ = self.action_tx.send(Action::ClearSearch);
                }
            }
            _ => {}
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NavigateUp => self.select_prev(),
            Action::NavigateDown => self.select_next(),
            Action::Enter => {
                if self.state.screen != Screen::Listing {
                    return;
                }
                // Map the selected index (which refers to the displayed/filtered
                // list) back to the post shown on that row.
                let id = self
                    .list_state
                    .selected()
                    .and_then(|index| self.filtered_posts().get(index).map(|p| p.id.clone()));
                if let Some(id) = id {
                    if self.state.open_post(&self.store, &id) {
                        self.detail_scroll = 0;
                    } else {
                        self.notification =
                            Some(Notification::warning(format!("Post '{}' not found", id)));
                    }
                }
            }
            Action::Back => match self.state.screen {
                Screen::PostDetail { .. } => {
                    self.state.back_to_list();
                    self.detail_scroll = 0;
                }
                Screen::About => {
                    // Leaving About keeps the category, same as re-selecting it.
                    let category = self.state.active_category;
                    self.state.select_category(category);
                }
                Screen::Listing => {}
            },
            Action::SelectCategory(category) => {
                self.state.select_category(category);
                self.detail_scroll = 0;
                self.reset_selection();
            }
            Action::OpenAbout => {
                self.state.open_about();
            }
            Action::Home => {
                self.state.go_home();
                self.detail_scroll = 0;
                self.reset_selection();
            }
            Action::ToggleTheme => {
                self.state.toggle_theme();
                self.theme = Self::resolve_theme(&self.config, self.state.theme_mode);
                self.notification =
                    Some(Notification::info(format!("Theme: {}", self.state.theme_mode)));
            }
            Action::ScrollDetailUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            Action::ScrollDetailDown => {
                self.detail_scroll += 1;
            }
            Action::ClearSearch => {
                self.state.set_search_query("");
                self.reset_selection();
            }
        }
    }

    /// The posts currently shown on the listing, in authoring order.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        filter_posts(
            self.store.posts(),
            self.state.active_category,
            &self.state.search_query,
        )
    }

    /// Reset list selection after the filter changed so the cursor never
    /// points past the end of the displayed list.
    fn reset_selection(&mut self) {
        let len = self.filtered_posts().len();
        self.list_state
            .select(if len > 0 { Some(0) } else { None });
    }

    fn select_next(&mut self) {
        let len = self.filtered_posts().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.filtered_posts().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
