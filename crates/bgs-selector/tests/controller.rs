use std::sync::Arc;
use std::time::{Duration, Instant};

use bgs_catalog::Catalog;
use bgs_color::BrandColorError;
use bgs_model::{BackgroundDescriptor, BrandColors, ColorFamily, SelectorMode};
use bgs_selector::{
    ApplyError, BackgroundStore, Command, Event, MemoryStore, SearchState, SelectionState,
    SelectorConfig, SelectorController, SelectorError, StoreError,
};

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().unwrap())
}

fn controller() -> SelectorController<MemoryStore> {
    SelectorController::new(catalog(), MemoryStore::new(), BackgroundDescriptor::safe_default())
}

fn first_id(family: ColorFamily) -> String {
    catalog()
        .by_base_color(family)
        .next()
        .map(|v| v.id().to_string())
        .unwrap()
}

struct FailingStore;

impl BackgroundStore for FailingStore {
    fn apply(&mut self, _background: &BackgroundDescriptor) -> Result<(), StoreError> {
        Err(StoreError::new("theme store is read-only"))
    }
}

#[test]
fn recommended_search_is_cached() {
    let mut ctl = controller();
    let t0 = Instant::now();
    ctl.handle_at(Command::SetMode(SelectorMode::Recommended), t0)
        .unwrap();
    assert!(ctl.poll_search(t0 + Duration::from_millis(150)));

    let options = ctl.options().to_vec();
    assert!(!options.is_empty() && options.len() <= 8);
    assert!(options.iter().all(|v| v.base_color() == ColorFamily::Blue));
    assert_eq!(ctl.cache_len(), 1);

    ctl.request_search(t0);
    assert!(ctl.poll_search(t0 + Duration::from_secs(1)));
    assert_eq!(ctl.cache_len(), 1);
    assert_eq!(ctl.options(), options.as_slice());
}

#[test]
fn brand_mode_waits_longer() {
    let mut ctl = controller();
    let t0 = Instant::now();
    ctl.handle_at(Command::SetMode(SelectorMode::Brand), t0)
        .unwrap();
    assert!(!ctl.poll_search(t0 + Duration::from_millis(150)));
    assert!(ctl.poll_search(t0 + Duration::from_millis(500)));
    assert!(!ctl.options().is_empty() && ctl.options().len() <= 12);
}

#[test]
fn brand_colors_change_clears_cache() {
    let mut ctl = controller();
    let t0 = Instant::now();
    ctl.handle_at(Command::SetMode(SelectorMode::Brand), t0)
        .unwrap();
    ctl.poll_search(t0 + Duration::from_secs(1));
    assert_eq!(ctl.cache_len(), 1);

    ctl.handle_at(
        Command::SetBrandColors(Some(BrandColors::new("#FFFFFF"))),
        t0 + Duration::from_secs(1),
    )
    .unwrap();
    assert_eq!(ctl.cache_len(), 0);
    assert!(ctl.poll_search(t0 + Duration::from_secs(2)));
    assert!(ctl.options().is_empty());

    ctl.handle(Command::SelectVariation(first_id(ColorFamily::Blue)))
        .unwrap();
    assert!(!ctl.can_apply());
    assert!(
        ctl.selection_problems()
            .contains(&ApplyError::InvalidBrandColor(BrandColorError::TooLight))
    );
}

#[test]
fn select_and_apply() {
    let mut ctl = controller();
    let id = first_id(ColorFamily::Purple);
    let event = ctl.handle(Command::SelectVariation(id.clone())).unwrap();
    assert_eq!(event, Event::Selected { id: id.clone() });
    assert_eq!(ctl.selection_state(), SelectionState::Selected);
    assert!(ctl.can_apply());

    let Event::Applied { at } = ctl.handle(Command::Apply).unwrap() else {
        panic!("expected applied event");
    };
    assert_eq!(ctl.selection_state(), SelectionState::Applied { at });
    assert_eq!(ctl.current().base_color, ColorFamily::Purple);
    assert_eq!(ctl.store().history().len(), 1);
    assert_eq!(ctl.store().current(), Some(ctl.current()));

    // Applying changes the base color, so recommendations follow it.
    assert!(ctl.search_state().is_pending());
    assert!(ctl.poll_search(Instant::now() + Duration::from_secs(1)));
    assert!(
        ctl.options()
            .iter()
            .all(|v| v.base_color() == ColorFamily::Purple)
    );
}

#[test]
fn unknown_variation_is_rejected() {
    let mut ctl = controller();
    let err = ctl
        .handle(Command::SelectVariation("no-such-background".to_string()))
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::UnknownVariation {
            id: "no-such-background".to_string()
        }
    );
    assert_eq!(ctl.selection_state(), SelectionState::NoSelection);
}

#[test]
fn apply_without_selection() {
    let mut ctl = controller();
    assert!(!ctl.can_apply());
    let err = ctl.handle(Command::Apply).unwrap_err();
    assert_eq!(err, SelectorError::Apply(ApplyError::NoSelection));
    assert!(ctl.store().history().is_empty());
}

#[test]
fn only_one_apply_in_flight() {
    let mut ctl = controller();
    ctl.handle(Command::SelectVariation(first_id(ColorFamily::Blue)))
        .unwrap();

    let t0 = Instant::now();
    let ticket = ctl.begin_apply(t0).unwrap();
    assert_eq!(ctl.selection_state(), SelectionState::Applying);
    assert!(!ctl.can_apply());
    assert_eq!(ctl.begin_apply(t0).unwrap_err(), ApplyError::InFlight);
    assert_eq!(
        ctl.handle(Command::Reset).unwrap_err(),
        SelectorError::Apply(ApplyError::InFlight)
    );

    let err = ctl
        .finish_apply(ticket, Ok(()), t0 + Duration::from_secs(6))
        .unwrap_err();
    assert_eq!(err, ApplyError::Timeout { limit_ms: 5_000 });
    assert_eq!(ctl.selection_state(), SelectionState::Selected);
    assert_eq!(ctl.last_failure(), Some(&err));
    // The late store call succeeded, so the page follows the store.
    assert_eq!(ctl.current().base_color, ColorFamily::Blue);
    assert_ne!(ctl.current(), &BackgroundDescriptor::safe_default());
}

#[test]
fn apply_timeout_measures_the_store_call() {
    let mut ctl = controller();
    let earlier = Instant::now()
        .checked_sub(Duration::from_secs(10))
        .unwrap();
    ctl.handle_at(Command::SelectVariation(first_id(ColorFamily::Green)), earlier)
        .unwrap();

    let event = ctl.handle_at(Command::Apply, earlier).unwrap();
    assert!(matches!(event, Event::Applied { .. }));
    assert_eq!(ctl.current().base_color, ColorFamily::Green);
    assert_eq!(ctl.store().current(), Some(ctl.current()));

    assert_eq!(ctl.handle_at(Command::Reset, earlier).unwrap(), Event::Reset);
    assert_eq!(ctl.last_failure(), None);
    assert_eq!(ctl.store().current(), Some(ctl.current()));
    assert_eq!(ctl.store().history().len(), 2);
}

#[derive(Default)]
struct SlowStore {
    stored: Option<BackgroundDescriptor>,
}

impl BackgroundStore for SlowStore {
    fn apply(&mut self, background: &BackgroundDescriptor) -> Result<(), StoreError> {
        std::thread::sleep(Duration::from_millis(30));
        self.stored = Some(background.clone());
        Ok(())
    }
}

#[test]
fn slow_store_times_out_but_current_follows_store() {
    let config = SelectorConfig {
        apply_timeout_ms: 5,
        ..SelectorConfig::default()
    };
    let mut ctl =
        SelectorController::new(catalog(), SlowStore::default(), BackgroundDescriptor::safe_default())
            .with_config(config);
    ctl.handle(Command::SelectVariation(first_id(ColorFamily::Teal)))
        .unwrap();

    let err = ctl.handle(Command::Apply).unwrap_err();
    assert_eq!(err, SelectorError::Apply(ApplyError::Timeout { limit_ms: 5 }));
    assert_eq!(ctl.selection_state(), SelectionState::Selected);
    assert_eq!(ctl.store().stored.as_ref(), Some(ctl.current()));
    assert_eq!(ctl.current().base_color, ColorFamily::Teal);
}

#[test]
fn store_failure_returns_to_selected() {
    let mut ctl =
        SelectorController::new(catalog(), FailingStore, BackgroundDescriptor::safe_default());
    ctl.handle(Command::SelectVariation(first_id(ColorFamily::Teal)))
        .unwrap();
    let err = ctl.handle(Command::Apply).unwrap_err();
    assert!(matches!(err, SelectorError::Apply(ApplyError::Store(_))));
    assert_eq!(ctl.selection_state(), SelectionState::Selected);
    assert!(ctl.can_apply());
}

#[test]
fn reset_restores_safe_default() {
    let mut ctl = controller();
    let t0 = Instant::now();
    ctl.handle_at(Command::SetMode(SelectorMode::Brand), t0)
        .unwrap();
    ctl.poll_search(t0 + Duration::from_secs(1));
    ctl.handle(Command::SelectVariation(first_id(ColorFamily::Gray)))
        .unwrap();
    ctl.handle(Command::Apply).unwrap();

    assert_eq!(ctl.handle(Command::Reset).unwrap(), Event::Reset);
    assert_eq!(ctl.mode(), SelectorMode::Recommended);
    assert_eq!(ctl.brand_colors(), None);
    assert_eq!(ctl.selected(), None);
    assert_eq!(ctl.selection_state(), SelectionState::NoSelection);
    assert_eq!(ctl.cache_len(), 0);
    assert!(matches!(ctl.search_state(), SearchState::SearchPending { .. }));
    assert_eq!(ctl.current(), &BackgroundDescriptor::safe_default());
    assert_eq!(
        ctl.store().current(),
        Some(&BackgroundDescriptor::safe_default())
    );
}
