//! Persistence seam for applied backgrounds.

use bgs_model::BackgroundDescriptor;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Destination for applied background systems (theme store, project file,
/// remote document).
pub trait BackgroundStore {
    fn apply(&mut self, background: &BackgroundDescriptor) -> Result<(), StoreError>;
}

impl<S: BackgroundStore + ?Sized> BackgroundStore for &mut S {
    fn apply(&mut self, background: &BackgroundDescriptor) -> Result<(), StoreError> {
        (**self).apply(background)
    }
}

/// In-memory store keeping every applied background.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    history: Vec<BackgroundDescriptor>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&BackgroundDescriptor> {
        self.history.last()
    }

    pub fn history(&self) -> &[BackgroundDescriptor] {
        &self.history
    }
}

impl BackgroundStore for MemoryStore {
    fn apply(&mut self, background: &BackgroundDescriptor) -> Result<(), StoreError> {
        self.history.push(background.clone());
        Ok(())
    }
}
