//! Criterion benchmarks for kvlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kvlog::prelude::*;
use kvlog::{body, Serializer};
use std::sync::Arc;

/// Discards every line so benchmarks measure the pipeline, not a sink
struct NullAppender;

impl Appender for NullAppender {
    fn append(&self, _line: &str, _event: &LogEvent) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn pipeline_logger(level: &str) -> Logger {
    Logger::builder()
        .level(level)
        .extractor(log_values)
        .appender(NullAppender)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new(black_box("INFO"));
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .level(black_box("DEBUG"))
                .extractor(log_values)
                .appender(NullAppender)
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = pipeline_logger("DEBUG");
    let ctx = Context::new();

    group.bench_function("bare_title", |b| {
        b.iter(|| {
            logger.info(&ctx, black_box("request-handled"), &[]);
        });
    });

    group.bench_function("one_body", |b| {
        b.iter(|| {
            logger.info(
                &ctx,
                black_box("request-handled"),
                &[body! { "status" => 200, "path" => "/api/users" }],
            );
        });
    });

    group.bench_function("three_bodies", |b| {
        b.iter(|| {
            logger.info(
                &ctx,
                black_box("request-handled"),
                &[
                    body! { "status" => 200 },
                    body! { "path" => "/api/users" },
                    body! { "status" => 201, "elapsed_ms" => 12 },
                ],
            );
        });
    });

    let ctx_with_values = Context::new().with_values(body! {
        "request_id" => "abc-123",
        "user_id" => 42,
        "tenant" => "acme",
        "region" => "eu-west-1",
        "version" => "1.4.2",
    });

    group.bench_function("context_values", |b| {
        b.iter(|| {
            logger.info(&ctx_with_values, black_box("request-handled"), &[]);
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = pipeline_logger("WARN");
    let ctx = Context::new();

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(&ctx, black_box("filtered"), &[body! { "n" => 1 }]);
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(&ctx, black_box("emitted"), &[body! { "n" => 1 }]);
        });
    });

    group.finish();
}

// ============================================================================
// Hook Benchmarks
// ============================================================================

fn bench_hooks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hooks");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .before_each(|_: &Context, event: &mut LogEvent| {
            event.body.set("service", "api-gateway");
            Ok(())
        })
        .before_each(|_: &Context, event: &mut LogEvent| {
            event.body.set("version", "1.4.2");
            Ok(())
        })
        .before_each(|_: &Context, event: &mut LogEvent| {
            event.title.insert_str(0, "[api] ");
            Ok(())
        })
        .appender(NullAppender)
        .build();
    let ctx = Context::new();

    group.bench_function("three_before_hooks", |b| {
        b.iter(|| {
            logger.info(&ctx, black_box("request-handled"), &[]);
        });
    });

    group.finish();
}

// ============================================================================
// Body Merge Benchmarks
// ============================================================================

fn bench_body_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_merge");
    group.throughput(Throughput::Elements(1));

    let first = body! { "a" => 1, "b" => 2, "c" => 3 };
    let second = body! { "b" => 20, "d" => 4 };
    let third = body! { "a" => 100, "e" => 5 };

    group.bench_function("merge_three", |b| {
        b.iter(|| {
            let merged = Body::merged([&first, &second, &third]);
            black_box(merged)
        });
    });

    group.bench_function("construct_literal", |b| {
        b.iter(|| {
            let body = body! { "status" => 200, "path" => "/api/users", "ok" => true };
            black_box(body)
        });
    });

    group.finish();
}

// ============================================================================
// Serialization Benchmarks
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.throughput(Throughput::Elements(1));

    let serializer = Serializer::new();
    let small = LogEvent::new("INFO", "request-handled", body! { "status" => 200 });
    let wide = LogEvent::new(
        "INFO",
        "request-handled",
        body! {
            "status" => 200,
            "path" => "/api/users",
            "method" => "GET",
            "elapsed_ms" => 12,
            "bytes" => 4096,
            "cache" => "hit",
            "region" => "eu-west-1",
            "user_id" => 42,
            "retries" => 0,
            "ok" => true,
        },
    );
    let reserved = LogEvent::new(
        "INFO",
        "request-handled",
        body! { "level" => "clash", "title" => "clash", "timestamp" => "clash" },
    );

    group.bench_function("small_event", |b| {
        b.iter(|| black_box(serializer.serialize(&small)));
    });

    group.bench_function("ten_field_event", |b| {
        b.iter(|| black_box(serializer.serialize(&wide)));
    });

    group.bench_function("reserved_key_rename", |b| {
        b.iter(|| black_box(serializer.serialize(&reserved)));
    });

    group.finish();
}

// ============================================================================
// Concurrent Emission Benchmarks
// ============================================================================

fn bench_concurrent_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_emission");

    let logger = Arc::new(pipeline_logger("INFO"));

    group.bench_function("single_thread", |b| {
        let logger = Arc::clone(&logger);
        let ctx = Context::new();
        b.iter(|| {
            logger.info(&ctx, black_box("concurrent"), &[]);
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(&Context::new(), black_box("concurrent"), &[]);
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_hooks,
    bench_body_merge,
    bench_serialization,
    bench_concurrent_emission
);

criterion_main!(benches);
