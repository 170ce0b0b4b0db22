//! Request-scoped context values
//!
//! This module provides:
//! - `Context`: Immutable typed value store, extended by derivation
//! - `ContextExtractor`: Logger-side hook that turns a context into a `Body`
//! - `log_values`: The built-in extractor for `Context::with_values` data

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::body::Body;

/// Immutable, request-scoped value store.
///
/// A `Context` is never mutated: `with` and `with_values` return a derived
/// context and leave the parent untouched, so a context captured by one
/// thread can never observe another thread's additions. Cloning is cheap
/// (the entry table is shared behind an `Arc`).
///
/// # Example
///
/// ```
/// use kvlog::{body, Context};
///
/// let base = Context::new();
/// let ctx = base.with_values(body! { "request_id" => "abc-123" });
///
/// assert!(base.values().is_empty());
/// assert!(!ctx.values().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    entries: Option<Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>,
}

/// Key type for the body attached via `with_values`. Private, so user
/// entries can never collide with it.
struct LogValues(Body);

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self { entries: None }
    }

    /// Derive a context that additionally carries `value`, keyed by its type.
    ///
    /// A later `with` for the same type shadows the earlier value in the
    /// derived context only.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>> =
            self.entries.as_deref().cloned().unwrap_or_default();
        entries.insert(TypeId::of::<T>(), Arc::new(value));
        Self {
            entries: Some(Arc::new(entries)),
        }
    }

    /// Get the value of type `T`, if one was attached.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.entries
            .as_ref()?
            .get(&TypeId::of::<T>())?
            .downcast_ref::<T>()
    }

    /// Derive a context carrying `values` merged over any previously
    /// attached log values (the new entries win on key collision).
    #[must_use]
    pub fn with_values(&self, values: Body) -> Self {
        let mut merged = self.values();
        merged.merge(values);
        self.with(LogValues(merged))
    }

    /// The body attached via `with_values`; empty if none was attached.
    pub fn values(&self) -> Body {
        self.get::<LogValues>()
            .map(|held| held.0.clone())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.as_ref().map_or(0, |entries| entries.len());
        f.debug_struct("Context").field("entries", &len).finish()
    }
}

/// Logger-side value source: turns an ambient context into a `Body` that is
/// merged below every call-site body.
///
/// Extraction is infallible by contract; an extractor that panics is
/// skipped and reported, never surfaced to the logging call site.
pub trait ContextExtractor: Send + Sync {
    fn extract(&self, ctx: &Context) -> Body;
}

impl<F> ContextExtractor for F
where
    F: Fn(&Context) -> Body + Send + Sync,
{
    fn extract(&self, ctx: &Context) -> Body {
        self(ctx)
    }
}

/// Extractor reading the body attached with [`Context::with_values`].
///
/// Installed by `Logger::new`; builder-assembled loggers opt in with
/// `.extractor(log_values)`.
pub fn log_values(ctx: &Context) -> Body {
    ctx.values()
}
