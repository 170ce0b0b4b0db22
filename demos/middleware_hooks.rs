//! Middleware hooks example
//!
//! Demonstrates before/after hooks, event mutation, and failure isolation.
//!
//! Run with: cargo run --example middleware_hooks

use kvlog::body;
use kvlog::prelude::*;

fn main() -> Result<()> {
    println!("=== kvlog - Middleware Hooks Example ===\n");

    let logger = Logger::builder()
        .level("DEBUG")
        .extractor(log_values)
        // Stamp every event with the service name
        .before_each(|_: &Context, event: &mut LogEvent| {
            event.body.set("service", "api-gateway");
            Ok(())
        })
        // Redact credentials before they reach the output
        .before_each(|_: &Context, event: &mut LogEvent| {
            if event.body.contains_key("password") {
                event.body.set("password", "[redacted]");
            }
            Ok(())
        })
        .after_each(|_: &Context, event: &mut LogEvent| {
            if event.level == "ERROR" {
                eprintln!("(after-hook) error observed: {}", event.title);
            }
            Ok(())
        })
        .build();

    let ctx = Context::new();

    println!("1. Every event carries the service field added by the first hook:");
    logger.info(&ctx, "server-started", &[]);

    println!("\n2. The redaction hook rewrites sensitive fields in flight:");
    logger.warn(
        &ctx,
        "login-attempt",
        &[body! { "user" => "alice", "password" => "hunter2" }],
    );

    println!("\n3. After-hooks observe the final event without changing the output:");
    logger.error(&ctx, "upstream-timeout", &[body! { "upstream" => "billing" }]);

    println!("\n4. A failing hook never blocks emission:");
    let mut logger = logger;
    logger.add_before_each(|_: &Context, _: &mut LogEvent| {
        Err(LoggerError::hook("simulated hook failure"))
    });
    logger.info(&ctx, "still-emitted", &[]);
    println!("   hook failures recorded: {}", logger.metrics().hook_failures());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
