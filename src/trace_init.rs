//! JSON trace log for the GUI process, written to `<log_dir>/arabin-trace.jsonl`.
//! Only the `trace` feature installs a subscriber; otherwise every call is a no-op.

use std::path::Path;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "arabin-trace.jsonl";

/// Engine, core and session spans; override with `RUST_LOG`.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "arabin_engine=debug,arabin_core=debug,arabin_session=debug";

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // The host may already own the global subscriber.
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
        if installed {
            // flushes for the life of the GUI process
            std::mem::forget(guard);
            tracing::debug!(dir = %log_dir.display(), "trace log opened");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}
