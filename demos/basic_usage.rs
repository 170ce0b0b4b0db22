//! Basic logger usage example
//!
//! Demonstrates leveled emission, call-site bodies, context values, and
//! merge precedence.
//!
//! Run with: cargo run --example basic_usage

use kvlog::body;
use kvlog::prelude::*;

fn main() -> Result<()> {
    println!("=== kvlog - Basic Usage Example ===\n");

    // Create a logger with an INFO threshold
    let logger = Logger::new("INFO");
    let ctx = Context::new();

    println!("1. Leveled emission (debug is below the threshold):");
    logger.debug(&ctx, "testing-debug-wont-show-up", &[]);
    logger.info(&ctx, "testing-log", &[]);

    println!("\n2. Call-site bodies:");
    logger.warn(&ctx, "testing-log-with-values", &[body! { "msg" => "it worked!" }]);

    println!("\n3. Context values travel with the context:");
    let ctx = ctx.with_values(body! { "user_id" => 41 });
    logger.error(&ctx, "testing-log-with-context", &[]);

    // Deriving again merges over the previous values
    let ctx = ctx.with_values(body! { "user_id" => 42, "company_id" => 22 });
    logger.info(&ctx, "testing-log-with-merged-context-values", &[]);

    println!("\n4. Merge precedence (left to right, last write wins):");
    logger.info(
        &ctx,
        "testing-log-precedence",
        &[
            body! { "user_id" => 43, "company_id" => 23 },
            body! { "user_id" => 44 },
        ],
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
