//! JSON trace log behind the `trace` feature. Without the feature
//! `init_tracing` does nothing.

use std::path::Path;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "pinyin-trace.jsonl";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "pinyin_engine=debug,pinyin_core=debug";

/// Install a global JSON subscriber writing to `log_dir/pinyin-trace.jsonl`.
/// Only the first call has an effect. `RUST_LOG` overrides the filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Dropping the guard stops the writer thread.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if let Err(e) = installed {
            tracing::warn!("trace log not installed: {e}");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}
