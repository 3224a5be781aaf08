//! The rendering context and the process-wide switch for disabling styles.
//!
//! A [`Context`] determines how chalks are applied to text: whether styling is
//! disabled altogether, which output stream the text is destined for, and
//! which kind of backend renders for that stream. Contexts are plain values
//! created with a [`ContextBuilder`]. [`Context::global`] seeds a context from
//! the process-wide switch controlled by [`configure`].
//!
//!
//! # Example
//!
//! ```
//! # use chalky::{Chalk, Color, context::Context};
//! let context = Context::builder().disabled(true).build();
//! let chalk = Chalk::new().with_foreground(Color::Red);
//! assert_eq!(context.apply(&chalk, "plain"), "plain");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::PoisonError;

use chalkytty::console::Stream;

use crate::backend::{BackendKind, Registry, Render};
use crate::chalk::Chalk;

static DISABLED: AtomicBool = AtomicBool::new(false);

/// Enable or disable styling for the entire process.
pub fn configure(disable: bool) {
    DISABLED.store(disable, Ordering::Relaxed);
}

/// Determine whether styling is disabled for the entire process.
pub fn is_disabled() -> bool {
    DISABLED.load(Ordering::Relaxed)
}

// ----------------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ContextData {
    disabled: bool,
    stream: Stream,
    backend: BackendKind,
}

impl ContextData {
    const fn new() -> Self {
        Self {
            disabled: false,
            stream: Stream::Stdout,
            backend: BackendKind::Auto,
        }
    }
}

/// A builder of contexts.
#[derive(Debug)]
pub struct ContextBuilder(ContextData);

impl ContextBuilder {
    /// Disable styling.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.0.disabled = disabled;
        self
    }

    /// Set the output stream.
    pub fn stream(&mut self, stream: Stream) -> &mut Self {
        self.0.stream = stream;
        self
    }

    /// Set the backend kind.
    ///
    /// The kind only takes effect if the stream has no backend yet.
    pub fn backend(&mut self, backend: BackendKind) -> &mut Self {
        self.0.backend = backend;
        self
    }

    /// Instantiate the context.
    pub fn build(&self) -> Context {
        Context(self.0)
    }
}

/// A rendering context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context(ContextData);

impl Default for Context {
    fn default() -> Self {
        Self(ContextData::new())
    }
}

impl Context {
    /// Create a new builder with the default settings.
    pub fn builder() -> ContextBuilder {
        ContextBuilder(ContextData::new())
    }

    /// Get a context reflecting the process-wide switch.
    pub fn global() -> Self {
        Self::builder().disabled(is_disabled()).build()
    }

    /// Determine whether styling is disabled.
    pub fn is_disabled(&self) -> bool {
        self.0.disabled
    }

    /// Get the output stream.
    pub fn stream(&self) -> Stream {
        self.0.stream
    }

    /// Get the kind of backend used when the stream has none yet.
    pub fn backend(&self) -> BackendKind {
        self.0.backend
    }

    /// Apply the chalk to the text.
    ///
    /// This method renders with the stream's backend from the global
    /// [`Registry`].
    pub fn apply(&self, chalk: &Chalk, text: &str) -> String {
        self.apply_in(Registry::global(), chalk, text)
    }

    /// Apply the chalk to the text, rendering with the stream's backend from
    /// the given registry.
    ///
    /// If styling is disabled, this method returns the text as is. The same
    /// holds if the backend cannot render, e.g., because it is the legacy
    /// console.
    pub fn apply_in(&self, registry: &Registry, chalk: &Chalk, text: &str) -> String {
        if self.is_disabled() {
            return text.to_string();
        }

        let backend = registry.backend(self.stream(), self.backend());
        let backend = backend.lock().unwrap_or_else(PoisonError::into_inner);
        match backend.renderer() {
            Some(renderer) => self.apply_with(renderer, chalk, text),
            None => {
                tracing::debug!(
                    stream = self.stream().name(),
                    "backend cannot render styles; falling back to plain text"
                );
                text.to_string()
            }
        }
    }

    /// Apply the chalk to the text with the given renderer.
    pub fn apply_with(&self, renderer: &dyn Render, chalk: &Chalk, text: &str) -> String {
        if self.is_disabled() {
            return text.to_string();
        }

        renderer.apply(text, chalk.style(), chalk.background(), chalk.foreground())
    }
}
