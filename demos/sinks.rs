//! Output sink example
//!
//! Demonstrates routing the canonical line to file, channel, and in-memory
//! appenders.
//!
//! Run with: cargo run --example sinks

use kvlog::body;
use kvlog::prelude::*;

fn main() -> Result<()> {
    println!("=== kvlog - Sinks Example ===\n");

    println!("1. File appender (JSON lines appended to application.log):");
    let file_logger = Logger::builder()
        .extractor(log_values)
        .appender(FileAppender::new("application.log")?)
        .build();

    let ctx = Context::new().with_values(body! { "run" => "sinks-demo" });
    file_logger.info(&ctx, "application-started", &[]);
    for i in 1..=5 {
        file_logger.info(&ctx, "item-processed", &[body! { "item" => i, "total" => 5 }]);
        if i == 3 {
            file_logger.warn(&ctx, "item-slow", &[body! { "item" => i }]);
        }
    }
    file_logger.flush()?;
    println!("   wrote {} lines, check 'application.log'", file_logger.metrics().emitted_count());

    println!("\n2. Channel appender (lines handed to a consumer thread):");
    let (appender, receiver) = ChannelAppender::unbounded();
    let channel_logger = Logger::builder().appender(appender).build();

    let consumer = std::thread::spawn(move || {
        let mut received = 0;
        while let Ok(line) = receiver.recv() {
            println!("   consumer got: {}", line);
            received += 1;
        }
        received
    });

    channel_logger.info(&Context::new(), "queued-first", &[]);
    channel_logger.info(&Context::new(), "queued-second", &[]);
    drop(channel_logger);

    let received = consumer.join().expect("Consumer thread panicked");
    println!("   consumer received {} lines", received);

    println!("\n3. Memory appender (lines captured for inspection):");
    let sink = MemoryAppender::new();
    let memory_logger = Logger::builder().appender(sink.clone()).build();

    memory_logger.info(&Context::new(), "captured", &[body! { "n" => 1 }]);
    memory_logger.error(&Context::new(), "also-captured", &[]);
    for line in sink.lines() {
        println!("   captured: {}", line);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
