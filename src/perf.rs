/// Performance instrumentation utilities

/// Minimal timing macro, logs elapsed time at debug level
/// Usage: timed!("operation name", { code })
#[macro_export]
macro_rules! timed {
    ($name:expr, $block:expr) => {{
        let _t = std::time::Instant::now();
        let r = $block;
        tracing::debug!(elapsed = ?_t.elapsed(), "{}", $name);
        r
    }};
}
