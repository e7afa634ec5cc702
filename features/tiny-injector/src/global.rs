//! The process wide injector
//!
//! Scanning is allowed once per process, whether it succeeds or not. Retrieval is lock free
//! and may happen from any thread once the scan returned.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, OnceLock,
};

use crate::{
    container::DiContainer,
    discovery::ComponentSource,
    errors::{RetrieveError, ScanError},
    initiator::DiInitiator,
    types::Injectable,
};

static SCANNED: AtomicBool = AtomicBool::new(false);
static CONTAINER: OnceLock<DiContainer> = OnceLock::new();

/// Builds every component of `source` into the process wide container
pub fn scan(source: impl ComponentSource) -> Result<(), ScanError> {
    if SCANNED.swap(true, Ordering::SeqCst) {
        tracing::error!("Tried to scan components a second time");
        return Err(ScanError::AlreadyScanned);
    }

    let container = DiInitiator::new().initiate(source.into_components())?;
    // Only the first caller gets past SCANNED, so this is never set twice
    let _ = CONTAINER.set(container);

    Ok(())
}

/// Gets the process wide singleton of the requested type
pub fn retrieve<T: Injectable>() -> Result<Arc<T>, RetrieveError> {
    container()?.retrieve()
}

/// The process wide container
pub fn container() -> Result<&'static DiContainer, RetrieveError> {
    CONTAINER.get().ok_or(RetrieveError::NotScanned)
}
