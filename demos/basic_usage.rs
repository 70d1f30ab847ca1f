//! Basic usage of the module-scoped logging facility

use modlog::prelude::*;

fn main() {
    // Development mode: threshold starts at Debug, console sink
    let ctx = modlog::init(false).expect("first initialization");

    let mailer = ctx.for_module("Mailer").expect("valid module name");
    let scheduler = ctx.for_module("Scheduler").expect("valid module name");

    mailer.info("started");
    scheduler.warn("queue depth above watermark");
    mailer.debug_with(
        "delivery state",
        serde_json::json!({"pending": 3, "sent": 42}).into(),
    );

    // Timing spans report at debug verbosity
    scheduler.time("tick");
    let _sum: u64 = (0..1_000_000u64).sum();
    scheduler.time_end("tick");

    // Raising the threshold silences everything below Warn, for every logger
    modlog::set_level(LogLevel::Warn);
    mailer.info("not shown");
    mailer.error("still shown");

    // The default logger needs no lookup
    modlog::default_logger().info("not shown either");
    modlog::default_logger().warn("convenience call site");
}
