//! The selector controller.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bgs_catalog::{Catalog, descriptor_for};
use bgs_color::validate_brand_color;
use bgs_model::{
    BackgroundDescriptor, BackgroundVariation, BrandColors, ColorFamily, SelectorMode,
    ValidationResult,
};
use bgs_validate::{ValidationContext, validate};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::SelectorConfig;
use crate::error::{ApplyError, Result, SelectorError};
use crate::state::{SearchState, SelectionState};
use crate::store::{BackgroundStore, StoreError};

/// User intents handled by [`SelectorController::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetMode(SelectorMode),
    SetBrandColors(Option<BrandColors>),
    /// Select a catalog entry by id.
    SelectVariation(String),
    Preview(Option<BackgroundDescriptor>),
    Apply,
    Reset,
}

/// What a handled command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ModeChanged(SelectorMode),
    BrandColorsChanged,
    Selected { id: String },
    Previewing,
    PreviewCleared,
    Applied { at: DateTime<Utc> },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchKey {
    mode: SelectorMode,
    base_color: ColorFamily,
    brand: Option<BrandColors>,
}

/// A started apply. Hosts that persist asynchronously take the ticket from
/// [`SelectorController::begin_apply`] and hand it back to
/// [`SelectorController::finish_apply`].
#[derive(Debug, Clone)]
pub struct ApplyTicket {
    background: BackgroundDescriptor,
    started: Instant,
}

impl ApplyTicket {
    pub fn background(&self) -> &BackgroundDescriptor {
        &self.background
    }
}

/// Owns the selector's mode, brand colors, selection, preview and the
/// search cache.
#[derive(Debug)]
pub struct SelectorController<S> {
    catalog: Arc<Catalog>,
    store: S,
    config: SelectorConfig,
    mode: SelectorMode,
    brand_colors: Option<BrandColors>,
    current: BackgroundDescriptor,
    selected_id: Option<String>,
    selected: Option<BackgroundDescriptor>,
    preview: Option<BackgroundDescriptor>,
    validation: Option<ValidationResult>,
    options: Vec<BackgroundVariation>,
    cache: HashMap<SearchKey, Vec<BackgroundVariation>>,
    search_state: SearchState,
    selection_state: SelectionState,
    last_failure: Option<ApplyError>,
}

impl<S: BackgroundStore> SelectorController<S> {
    /// Create a controller for the page's `current` background. A current
    /// background without a primary token is replaced by the safe default.
    pub fn new(catalog: Arc<Catalog>, store: S, current: BackgroundDescriptor) -> Self {
        let current = if current.has_primary() {
            current
        } else {
            warn!("current background is incomplete, using safe default");
            BackgroundDescriptor::safe_default()
        };
        Self {
            catalog,
            store,
            config: SelectorConfig::default(),
            mode: SelectorMode::Recommended,
            brand_colors: None,
            current,
            selected_id: None,
            selected: None,
            preview: None,
            validation: None,
            options: Vec::new(),
            cache: HashMap::new(),
            search_state: SearchState::Idle,
            selection_state: SelectionState::NoSelection,
            last_failure: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(&self) -> SelectorMode {
        self.mode
    }

    pub fn brand_colors(&self) -> Option<&BrandColors> {
        self.brand_colors.as_ref()
    }

    /// The background currently applied to the page.
    pub fn current(&self) -> &BackgroundDescriptor {
        &self.current
    }

    pub fn selected(&self) -> Option<&BackgroundDescriptor> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn preview(&self) -> Option<&BackgroundDescriptor> {
        self.preview.as_ref()
    }

    /// Validation of the selection, or of the preview when nothing is
    /// selected.
    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn options(&self) -> &[BackgroundVariation] {
        &self.options
    }

    pub fn search_state(&self) -> SearchState {
        self.search_state
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection_state
    }

    pub fn last_failure(&self) -> Option<&ApplyError> {
        self.last_failure.as_ref()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn handle(&mut self, command: Command) -> Result<Event> {
        self.handle_at(command, Instant::now())
    }

    /// Handle `command` as if it arrived at `now`.
    pub fn handle_at(&mut self, command: Command, now: Instant) -> Result<Event> {
        match command {
            Command::SetMode(mode) => {
                self.set_mode(mode, now);
                Ok(Event::ModeChanged(mode))
            }
            Command::SetBrandColors(colors) => {
                self.set_brand_colors(colors, now);
                Ok(Event::BrandColorsChanged)
            }
            Command::SelectVariation(id) => self.select_variation(id),
            Command::Preview(background) => Ok(self.set_preview(background)),
            Command::Apply => {
                let ticket = self.begin_apply(now)?;
                let call = Instant::now();
                let outcome = self.store.apply(ticket.background());
                let at = self.finish_apply(ticket, outcome, now + call.elapsed())?;
                Ok(Event::Applied { at })
            }
            Command::Reset => {
                self.reset(now)?;
                Ok(Event::Reset)
            }
        }
    }

    /// Mark the options stale. The search runs on a later
    /// [`poll_search`](Self::poll_search) once the debounce has elapsed.
    pub fn request_search(&mut self, now: Instant) {
        self.search_state = SearchState::SearchPending { requested_at: now };
    }

    /// Run a pending search if its debounce has elapsed at `now`.
    ///
    /// Returns `true` when the options were refreshed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        let SearchState::SearchPending { requested_at } = self.search_state else {
            return false;
        };
        if !self
            .config
            .should_search(self.mode, now.saturating_duration_since(requested_at))
        {
            return false;
        }

        let key = SearchKey {
            mode: self.mode,
            base_color: self.current.base_color,
            brand: self.search_brand().cloned(),
        };
        if let Some(cached) = self.cache.get(&key) {
            debug!(mode = %self.mode, count = cached.len(), "using cached compatibility results");
            self.options = cached.clone();
        } else {
            let results = self.run_search();
            debug!(mode = %self.mode, count = results.len(), "found compatible backgrounds");
            self.cache.insert(key, results.clone());
            self.options = results;
        }
        self.search_state = SearchState::OptionsReady;
        true
    }

    /// True when a background is selected or previewed, it passes every
    /// apply check, and no apply is in flight.
    pub fn can_apply(&self) -> bool {
        !self.selection_state.is_applying() && self.selection_problems().is_empty()
    }

    /// Everything that currently prevents an apply, in check order.
    pub fn selection_problems(&self) -> Vec<ApplyError> {
        let Some(background) = self.target() else {
            return vec![ApplyError::NoSelection];
        };
        let mut problems = Vec::new();

        if !background.has_primary() {
            problems.push(ApplyError::MissingPrimary);
        }
        if background.base_color == ColorFamily::Unknown {
            problems.push(ApplyError::MissingBaseColor);
        }
        if self.mode == SelectorMode::Brand {
            match self.brand_colors.as_ref().filter(|b| b.has_primary()) {
                None => problems.push(ApplyError::MissingBrandColors),
                Some(brand) => {
                    if let Err(err) = validate_brand_color(brand.primary.trim()) {
                        problems.push(ApplyError::InvalidBrandColor(err));
                    }
                    if let Some(Err(err)) = brand.secondary().map(validate_brand_color) {
                        problems.push(ApplyError::InvalidSecondaryBrandColor(err));
                    }
                }
            }
        }
        if background.primary == background.secondary {
            problems.push(ApplyError::IdenticalLayers);
        }
        if let Some(result) = &self.validation {
            let ids: Vec<String> = result
                .errors
                .iter()
                .filter(|e| e.blocking)
                .map(|e| e.id.clone())
                .collect();
            if !ids.is_empty() {
                problems.push(ApplyError::Blocked { ids });
            }
        }
        problems
    }

    /// Check the selection and move to `Applying`.
    pub fn begin_apply(&mut self, now: Instant) -> std::result::Result<ApplyTicket, ApplyError> {
        if self.selection_state.is_applying() {
            return Err(ApplyError::InFlight);
        }
        if let Some(problem) = self.selection_problems().into_iter().next() {
            warn!(%problem, "cannot apply background");
            return Err(problem);
        }
        let Some(background) = self.target().cloned() else {
            return Err(ApplyError::NoSelection);
        };
        self.selection_state = SelectionState::Applying;
        Ok(ApplyTicket {
            background,
            started: now,
        })
    }

    /// Complete an apply with the store's `outcome`, observed at `finished`.
    ///
    /// A store call that took longer than the configured timeout is
    /// reported as [`ApplyError::Timeout`]. When the late call still
    /// succeeded, the store holds the new background, so
    /// [`current`](Self::current) follows it.
    pub fn finish_apply(
        &mut self,
        ticket: ApplyTicket,
        outcome: std::result::Result<(), StoreError>,
        finished: Instant,
    ) -> std::result::Result<DateTime<Utc>, ApplyError> {
        let late = self.timeout_error(ticket.started, finished);
        match (outcome, late) {
            (Ok(()), None) => {
                let at = Utc::now();
                info!(
                    mode = %self.mode,
                    base_color = %ticket.background.base_color,
                    accent_color = %ticket.background.accent_color,
                    "background system applied"
                );
                self.current = ticket.background;
                self.selection_state = SelectionState::Applied { at };
                self.last_failure = None;
                self.request_search(finished);
                Ok(at)
            }
            (Ok(()), Some(err)) => {
                warn!(error = %err, "background stored after the apply deadline");
                self.current = ticket.background;
                self.request_search(finished);
                Err(self.record_failure(err))
            }
            (Err(store), _) => {
                let err = ApplyError::from(store);
                warn!(error = %err, "failed to apply background system");
                Err(self.record_failure(err))
            }
        }
    }

    fn record_failure(&mut self, err: ApplyError) -> ApplyError {
        self.selection_state = self.resting_state();
        self.last_failure = Some(err.clone());
        err
    }

    fn timeout_error(&self, started: Instant, finished: Instant) -> Option<ApplyError> {
        (finished.saturating_duration_since(started) > self.config.apply_timeout()).then(|| {
            ApplyError::Timeout {
                limit_ms: self.config.apply_timeout_ms,
            }
        })
    }

    fn set_mode(&mut self, mode: SelectorMode, now: Instant) {
        debug!(from = %self.mode, to = %mode, "background selector mode changing");
        self.mode = mode;
        self.clear_selection();
        if mode != SelectorMode::Brand {
            self.brand_colors = None;
        } else if self.brand_colors.is_none() {
            self.brand_colors = Some(BrandColors::starter());
        }
        self.cache.clear();
        self.request_search(now);
    }

    fn set_brand_colors(&mut self, colors: Option<BrandColors>, now: Instant) {
        self.brand_colors = colors;
        self.last_failure = None;
        self.cache.clear();
        self.revalidate();
        self.request_search(now);
    }

    fn select_variation(&mut self, id: String) -> Result<Event> {
        let variation = self
            .catalog
            .get(&id)
            .ok_or_else(|| SelectorError::UnknownVariation { id: id.clone() })?;
        self.selected = Some(descriptor_for(variation));
        self.selected_id = Some(id.clone());
        self.selection_state = SelectionState::Selected;
        self.revalidate();
        Ok(Event::Selected { id })
    }

    fn set_preview(&mut self, background: Option<BackgroundDescriptor>) -> Event {
        let event = if background.is_some() {
            Event::Previewing
        } else {
            Event::PreviewCleared
        };
        self.preview = background;
        if !self.selection_state.is_applying() {
            self.selection_state = self.resting_state();
        }
        self.revalidate();
        event
    }

    fn reset(&mut self, now: Instant) -> std::result::Result<(), ApplyError> {
        if self.selection_state.is_applying() {
            return Err(ApplyError::InFlight);
        }
        let background = BackgroundDescriptor::safe_default();
        let call = Instant::now();
        if let Err(store) = self.store.apply(&background) {
            let err = ApplyError::from(store);
            warn!(error = %err, "failed to reset background");
            self.last_failure = Some(err.clone());
            return Err(err);
        }
        let late = self.timeout_error(now, now + call.elapsed());

        self.current = background;
        self.mode = SelectorMode::Recommended;
        self.brand_colors = None;
        self.clear_selection();
        self.cache.clear();
        self.last_failure = None;
        self.request_search(now);
        if let Some(err) = late {
            warn!(error = %err, "safe default stored after the reset deadline");
            self.last_failure = Some(err.clone());
            return Err(err);
        }
        info!("reset to generated background");
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.selected_id = None;
        self.preview = None;
        self.validation = None;
        self.selection_state = SelectionState::NoSelection;
    }

    fn target(&self) -> Option<&BackgroundDescriptor> {
        self.selected.as_ref().or(self.preview.as_ref())
    }

    fn resting_state(&self) -> SelectionState {
        if self.selected.is_some() {
            SelectionState::Selected
        } else if self.preview.is_some() {
            SelectionState::Previewing
        } else {
            SelectionState::NoSelection
        }
    }

    /// Brand colors that take part in search and validation: only in brand
    /// mode.
    fn search_brand(&self) -> Option<&BrandColors> {
        match self.mode {
            SelectorMode::Brand => self.brand_colors.as_ref(),
            SelectorMode::Recommended | SelectorMode::Custom => None,
        }
    }

    fn run_search(&self) -> Vec<BackgroundVariation> {
        let brand = self.search_brand();
        if let Some(colors) = brand.filter(|b| b.has_primary())
            && let Err(err) = validate_brand_color(colors.primary.trim())
        {
            warn!(error = %err, "brand color rejected, no options");
            return Vec::new();
        }
        bgs_search::search(&self.catalog, self.mode, brand, &self.current)
    }

    fn revalidate(&mut self) {
        let context = ValidationContext::for_mode(self.mode);
        self.validation = self
            .target()
            .map(|background| validate(background, self.search_brand(), &context));
    }
}
