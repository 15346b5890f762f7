use crossterm::event::KeyCode;
use indexmap::IndexMap;
use ratatui::Frame;
use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::lookup::MealApi;
use crate::models::{FavoriteRecord, Meal};
use crate::state::{Favorites, contains_meal};

use super::ui;

pub enum AppAction {
    Continue, // Keep running
    Exit,     // Quit requested
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    Random,
    Search,
    Favorites,
}

/// Result of a background lookup task, delivered to the render loop.
pub enum FetchEvent {
    Random(Result<Option<Meal>, String>),
    Search(Result<Vec<Meal>, String>),
}

/// View state for the random meal screen.
#[derive(Debug, Clone)]
pub struct RandomMealState {
    pub loading: bool,
    pub meal: Option<Meal>,
    pub error: Option<String>,
}

impl Default for RandomMealState {
    fn default() -> Self {
        Self {
            loading: true,
            meal: None,
            error: None,
        }
    }
}

/// View state for the search screen. Results are keyed by meal id,
/// preserving the order the API returned them.
#[derive(Debug, Clone, Default)]
pub struct SearchMealState {
    pub query: String,
    pub loading: bool,
    pub meals: IndexMap<String, Meal>,
    pub selected: usize,
    pub error: Option<String>,
}

pub struct MealApp {
    pub(crate) screen: Screen,
    pub(crate) random: RandomMealState,
    pub(crate) search: SearchMealState,
    pub(crate) favorites_selected: usize,
    pub(crate) favorites_rx: watch::Receiver<Vec<FavoriteRecord>>,
    favorites: Favorites,
    api: MealApi,
    fetch_tx: mpsc::UnboundedSender<FetchEvent>,
}

impl MealApp {
    /// Build the app and kick off the initial random meal fetch.
    /// The returned receiver delivers lookup results to the caller's
    /// event loop, which feeds them back through [`MealApp::on_fetch`].
    pub fn new(api: MealApi, favorites: Favorites) -> (Self, mpsc::UnboundedReceiver<FetchEvent>) {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            screen: Screen::Random,
            random: RandomMealState::default(),
            search: SearchMealState::default(),
            favorites_selected: 0,
            favorites_rx: favorites.subscribe(),
            favorites,
            api,
            fetch_tx,
        };
        app.fetch_random();

        (app, fetch_rx)
    }

    pub fn render(&self, frame: &mut Frame) {
        ui::render(self, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // Esc always quits; 'q' only where it cannot be search input
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }
        if key == KeyCode::Char('q') && self.screen != Screen::Search {
            return AppAction::Exit;
        }

        match key {
            KeyCode::Tab => self.next_screen(),
            _ => match self.screen {
                Screen::Random => self.handle_random_key(key),
                Screen::Search => self.handle_search_key(key),
                Screen::Favorites => self.handle_favorites_key(key),
            },
        }

        AppAction::Continue
    }

    /// Apply a finished background lookup to the view state.
    pub fn on_fetch(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Random(Ok(meal)) => {
                self.random = RandomMealState {
                    loading: false,
                    meal,
                    error: None,
                };
            }
            FetchEvent::Random(Err(err)) => {
                self.random = RandomMealState {
                    loading: false,
                    meal: None,
                    error: Some(format!("Error fetching a random meal: {err}")),
                };
            }
            FetchEvent::Search(Ok(meals)) => {
                self.search.loading = false;
                self.search.error = None;
                self.search.meals = meals.into_iter().map(|m| (m.meal_id.clone(), m)).collect();
                self.search.selected = 0;
            }
            FetchEvent::Search(Err(err)) => {
                self.search.loading = false;
                self.search.error = Some(format!("Error searching meals: {err}"));
            }
        }
    }

    fn next_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Random => Screen::Search,
            Screen::Search => Screen::Favorites,
            Screen::Favorites => Screen::Random,
        };
    }

    fn handle_random_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') => self.fetch_random(),
            KeyCode::Char('f') => {
                if let Some(meal) = self.random.meal.clone() {
                    self.toggle_favorite(meal);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                self.search.query.push(c);
            }
            KeyCode::Backspace => {
                self.search.query.pop();
            }
            KeyCode::Enter => self.fetch_search(),
            KeyCode::Up => {
                self.search.selected = self.search.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !self.search.meals.is_empty() {
                    self.search.selected =
                        (self.search.selected + 1).min(self.search.meals.len() - 1);
                }
            }
            // Right toggles the selected result; plain chars belong to the query
            KeyCode::Right => {
                if let Some((_, meal)) = self.search.meals.get_index(self.search.selected) {
                    self.toggle_favorite(meal.clone());
                }
            }
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, key: KeyCode) {
        let favorites_len = self.favorites_rx.borrow().len();

        match key {
            KeyCode::Up => {
                self.favorites_selected = self.favorites_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if favorites_len > 0 {
                    self.favorites_selected = (self.favorites_selected + 1).min(favorites_len - 1);
                }
            }
            KeyCode::Char('d') | KeyCode::Char('f') => {
                let selected_id = self
                    .favorites_rx
                    .borrow()
                    .get(self.favorites_selected.min(favorites_len.saturating_sub(1)))
                    .map(|record| record.meal_id.clone());

                if let Some(meal_id) = selected_id {
                    self.remove_favorite(meal_id);
                }
            }
            _ => {}
        }
    }

    fn fetch_random(&mut self) {
        self.random.loading = true;
        self.random.error = None;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = api.random_meal().await.map_err(|e| e.to_string());
            let _ = tx.send(FetchEvent::Random(result));
        });
    }

    fn fetch_search(&mut self) {
        if self.search.query.trim().is_empty() {
            return;
        }

        self.search.loading = true;
        self.search.error = None;

        let api = self.api.clone();
        let query = self.search.query.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = api.search_meals(&query).await.map_err(|e| e.to_string());
            let _ = tx.send(FetchEvent::Search(result));
        });
    }

    /// Issue the add or remove for a displayed meal, fire-and-forget.
    /// The indicator only changes when the favorites snapshot
    /// republishes, so a failed write leaves it in its prior state.
    fn toggle_favorite(&mut self, meal: Meal) {
        let favorited = contains_meal(&self.favorites_rx.borrow(), &meal.meal_id);

        let favorites = self.favorites.clone();
        tokio::spawn(async move {
            let result = if favorited {
                favorites.remove(&meal.meal_id).await
            } else {
                favorites.add(&meal).await
            };

            if let Err(err) = result {
                warn!(meal_id = %meal.meal_id, %err, "favorite toggle failed");
            }
        });
    }

    fn remove_favorite(&mut self, meal_id: String) {
        let favorites = self.favorites.clone();
        tokio::spawn(async move {
            if let Err(err) = favorites.remove(&meal_id).await {
                warn!(%meal_id, %err, "favorite removal failed");
            }
        });
    }
}
