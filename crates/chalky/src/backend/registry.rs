use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chalkytty::console::Stream;

use super::{AnsiBackend, Backend, BackendKind, LegacyConsoleBackend};

/// A shared, lockable backend.
pub type SharedBackend = Arc<Mutex<Box<dyn Backend>>>;

/// A registry of backends, one per output stream.
///
/// The registry creates a stream's backend on first request and thereafter
/// returns the same instance. Hence backend state, such as the legacy
/// console's default attributes, is established only once.
#[derive(Default)]
pub struct Registry {
    backends: Mutex<HashMap<Stream, SharedBackend>>,
}

impl Registry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Get the backend for the stream.
    ///
    /// If the stream has no backend yet, this method creates one of the given
    /// kind. Otherwise, it returns the existing backend and ignores the kind.
    pub fn backend(&self, stream: Stream, kind: BackendKind) -> SharedBackend {
        let mut backends = self.backends.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(backends.entry(stream).or_insert_with(|| {
            let kind = kind.resolve(stream);
            tracing::debug!(
                stream = stream.name(),
                backend = kind.name(),
                "creating backend"
            );

            let backend: Box<dyn Backend> = match kind {
                BackendKind::LegacyConsole => Box::new(LegacyConsoleBackend::new(stream)),
                BackendKind::Ansi | BackendKind::Auto => Box::new(AnsiBackend::for_stream(stream)),
            };
            Arc::new(Mutex::new(backend))
        }))
    }

    /// Install the backend for the stream.
    ///
    /// A stream's backend never changes once created. Hence, if the stream
    /// already has a backend, this method leaves it in place and returns it as
    /// the error.
    pub fn insert(
        &self,
        stream: Stream,
        backend: Box<dyn Backend>,
    ) -> Result<SharedBackend, SharedBackend> {
        let mut backends = self.backends.lock().unwrap_or_else(PoisonError::into_inner);
        match backends.entry(stream) {
            Entry::Occupied(entry) => Err(Arc::clone(entry.get())),
            Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(Arc::new(Mutex::new(backend))))),
        }
    }

    /// Determine whether the stream has a backend.
    pub fn contains(&self, stream: Stream) -> bool {
        self.backends
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&stream)
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let backends = self.backends.lock().unwrap_or_else(PoisonError::into_inner);
        let mut streams = backends.keys().collect::<Vec<_>>();
        streams.sort();
        f.debug_struct("Registry")
            .field("streams", &streams)
            .finish()
    }
}
