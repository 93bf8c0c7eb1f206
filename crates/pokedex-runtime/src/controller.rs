use crate::catalog::{CatalogState, FetchTicket};
use crate::client::FetchedCatalog;
use crate::error::FetchError;
use pokedex_engine::{DerivedView, ViewMemo, ViewParameters};
use pokedex_store::PreferenceStore;
use pokedex_types::{
    Entity, EntityId, FavoriteSet, SortKey, Theme, TypeChip, visible_type_filters,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Scroll offset past which the "return to top" affordance shows.
pub const SCROLL_THRESHOLD: f64 = 500.0;

/// User actions and viewport signals.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetSearchTerm(String),
    ClearSearch,
    SelectType(String),
    ToggleMoreTypes,
    SetSortKey(SortKey),
    RequestRandomEntity,
    SelectEntity(EntityId),
    DismissDetail,
    ToggleFavorite(EntityId),
    ToggleTheme,
    LoadMore,
    ScrollPositionChanged(f64),
    ScrollToTop,
    RetryFetch,
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run a fetch cycle and hand the result to [`Controller::complete_fetch`]
    Fetch(FetchTicket),
}

/// Sole writer of view inputs, selection and preferences.
///
/// Every transition is synchronous and infallible. Favorite and theme changes
/// are applied in memory first and then written to the store before the
/// transition returns; a failed write is logged and the in-memory value kept.
pub struct Controller<P: PreferenceStore> {
    catalog: CatalogState,
    params: ViewParameters,
    selection: Option<Entity>,
    favorites: FavoriteSet,
    theme: Theme,
    show_more_types: bool,
    scroll_y: f64,
    scrolled_past_threshold: bool,
    memo: ViewMemo,
    store: P,
    rng: StdRng,
}

impl<P: PreferenceStore> Controller<P> {
    pub fn new(store: P) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Deterministic random selection, for tests and replays.
    pub fn with_seed(store: P, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: P, rng: StdRng) -> Self {
        let favorites = store.load_favorites().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load favorites; starting empty");
            FavoriteSet::default()
        });
        let theme = store.load_theme().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load theme; using default");
            Theme::default()
        });

        Self {
            catalog: CatalogState::new(),
            params: ViewParameters::default(),
            selection: None,
            favorites,
            theme,
            show_more_types: false,
            scroll_y: 0.0,
            scrolled_past_threshold: false,
            memo: ViewMemo::new(),
            store,
            rng,
        }
    }

    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::SetSearchTerm(term) => self.set_search_term(term),
            Event::ClearSearch => self.clear_search(),
            Event::SelectType(type_name) => self.select_type(type_name),
            Event::ToggleMoreTypes => self.toggle_more_types(),
            Event::SetSortKey(key) => self.set_sort_key(key),
            Event::RequestRandomEntity => self.request_random_entity(),
            Event::SelectEntity(id) => self.select_entity(id),
            Event::DismissDetail => self.dismiss_detail(),
            Event::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Event::ToggleTheme => {
                self.toggle_theme();
            }
            Event::LoadMore => self.load_more(),
            Event::ScrollPositionChanged(y) => self.scroll_position_changed(y),
            Event::ScrollToTop => self.scroll_to_top(),
            Event::RetryFetch => return Effect::Fetch(self.retry_fetch()),
        }
        Effect::None
    }

    /// Stored verbatim; no trimming.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.params.search_term.clear();
    }

    /// Replaces the active type filter (`"all"` disables filtering).
    pub fn select_type(&mut self, type_name: impl Into<String>) {
        self.params.selected_type = type_name.into();
    }

    /// Reveals the secondary type filters. Once shown they stay shown, and the
    /// active filter is left alone.
    pub fn toggle_more_types(&mut self) {
        self.show_more_types = true;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.params.sort_key = key;
    }

    /// Select a uniformly random entity of the full catalog. No-op when empty.
    pub fn request_random_entity(&mut self) {
        if let Some(entity) = self.catalog.entities().choose(&mut self.rng) {
            self.selection = Some(entity.clone());
        }
    }

    /// Opens `id` for detail view. Unknown ids leave the selection unchanged.
    pub fn select_entity(&mut self, id: EntityId) {
        match self.catalog.get(id) {
            Some(entity) => self.selection = Some(entity.clone()),
            None => tracing::debug!(%id, "ignoring selection of unknown entity"),
        }
    }

    pub fn open_detail(&mut self, id: EntityId) {
        self.select_entity(id);
    }

    pub fn dismiss_detail(&mut self) {
        self.selection = None;
    }

    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: EntityId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        if let Err(err) = self.store.save_favorites(&self.favorites) {
            tracing::warn!(%id, error = %err, "favorites changed in memory but were not persisted");
        }
        now_favorite
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.save_theme(self.theme) {
            tracing::warn!(theme = %self.theme, error = %err, "theme changed in memory but was not persisted");
        }
        self.theme
    }

    /// Grows the page by one increment while more filtered entities remain.
    pub fn load_more(&mut self) {
        if self.view().has_more {
            self.params.load_more();
        }
    }

    pub fn scroll_position_changed(&mut self, y: f64) {
        self.scroll_y = y;
        self.scrolled_past_threshold = y > SCROLL_THRESHOLD;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_position_changed(0.0);
    }

    /// Begin a new fetch cycle: page size back to its start, error cleared.
    pub fn retry_fetch(&mut self) -> FetchTicket {
        self.params.reset_page_size();
        self.catalog.begin_fetch()
    }

    /// Returns false when the ticket was superseded by a newer cycle.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchedCatalog, FetchError>,
    ) -> bool {
        self.catalog.complete_fetch(ticket, result)
    }

    /// Derived view, recomputed only if the catalog or parameters changed.
    pub fn view(&mut self) -> &DerivedView {
        self.memo
            .get(self.catalog.version(), self.catalog.entities(), &self.params)
    }

    pub fn view_recomputations(&self) -> usize {
        self.memo.recomputations()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    pub fn selection(&self) -> Option<&Entity> {
        self.selection.as_ref()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: EntityId) -> bool {
        self.favorites.contains(id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn show_more_types(&self) -> bool {
        self.show_more_types
    }

    pub fn type_filters(&self) -> Vec<TypeChip> {
        visible_type_filters(self.show_more_types)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_scrolled_past_threshold(&self) -> bool {
        self.scrolled_past_threshold
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
