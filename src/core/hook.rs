//! Middleware hooks run around each emission

use super::context::Context;
use super::error::Result;
use super::event::LogEvent;
use super::metrics::LoggerMetrics;

/// An interceptor invoked with the ambient context and the mutable in-flight
/// event. Before-hooks run between merging and serialization, after-hooks
/// after the appender; both run in registration order.
///
/// A hook returning `Err` or panicking is reported on the diagnostic path
/// and the remaining hooks (and the output) still run.
///
/// Closures implement the trait directly:
///
/// # Example
///
/// ```
/// use kvlog::{Context, Hook, LogEvent};
///
/// fn redact(_ctx: &Context, event: &mut LogEvent) -> kvlog::Result<()> {
///     event.body.remove("password");
///     Ok(())
/// }
///
/// let hook: Box<dyn Hook> = Box::new(redact);
/// ```
pub trait Hook: Send + Sync {
    fn call(&self, ctx: &Context, event: &mut LogEvent) -> Result<()>;
}

impl<F> Hook for F
where
    F: Fn(&Context, &mut LogEvent) -> Result<()> + Send + Sync,
{
    fn call(&self, ctx: &Context, event: &mut LogEvent) -> Result<()> {
        self(ctx, event)
    }
}

/// Run every hook of one chain in registration order.
///
/// Failures are counted and reported through plain stderr rather than the
/// logger itself, so a failing hook can never recurse into the pipeline
/// that is reporting it.
pub(crate) fn run_chain(
    stage: &'static str,
    hooks: &[Box<dyn Hook>],
    ctx: &Context,
    event: &mut LogEvent,
    metrics: &LoggerMetrics,
) {
    for (idx, hook) in hooks.iter().enumerate() {
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| hook.call(ctx, event)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                metrics.record_hook_failure();
                eprintln!("[LOGGER ERROR] {} hook #{} failed: {}", stage, idx, e);
            }
            Err(_) => {
                metrics.record_hook_failure();
                eprintln!("[LOGGER ERROR] {} hook #{} panicked", stage, idx);
            }
        }
    }
}
