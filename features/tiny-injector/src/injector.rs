use std::sync::Arc;

use crate::{
    container::DiContainer,
    discovery::ComponentSource,
    errors::{RetrieveError, ScanError},
    initiator::DiInitiator,
    types::{Injectable, Instance, TypeInfo},
};

/// Owns the singletons of exactly one scan
///
/// `scan` may be called once. A failed scan leaves the injector unusable, nothing it built
/// is ever retrievable.
#[derive(Debug, Default)]
pub struct Injector {
    state: ScanState,
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Unscanned,
    Failed,
    Scanned(DiContainer),
}

impl Injector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every component of `source`
    pub fn scan(&mut self, source: impl ComponentSource) -> Result<(), ScanError> {
        if !matches!(self.state, ScanState::Unscanned) {
            tracing::error!("Tried to scan components a second time");
            return Err(ScanError::AlreadyScanned);
        }

        self.state = ScanState::Failed;
        let container = DiInitiator::new().initiate(source.into_components())?;
        self.state = ScanState::Scanned(container);

        Ok(())
    }

    /// Gets the singleton of the requested type
    pub fn retrieve<T: Injectable>(&self) -> Result<Arc<T>, RetrieveError> {
        self.container()?.retrieve()
    }

    /// Gets the untyped singleton of `info`
    pub fn get(&self, info: &TypeInfo) -> Result<&Instance, RetrieveError> {
        self.container()?.get(info)
    }

    /// The container of the completed scan
    pub fn container(&self) -> Result<&DiContainer, RetrieveError> {
        match &self.state {
            ScanState::Scanned(container) => Ok(container),
            ScanState::Unscanned | ScanState::Failed => Err(RetrieveError::NotScanned),
        }
    }

    pub fn is_scanned(&self) -> bool {
        matches!(self.state, ScanState::Scanned(_))
    }
}
