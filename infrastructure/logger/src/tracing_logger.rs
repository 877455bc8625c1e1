use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Logger port adapter over the `tracing` crate.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Storefront -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Storefront -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Storefront -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Storefront -- ", "{}", message);
    }
}

/// Initializes the global tracing subscriber with the `RUST_LOG` env
/// filter, defaulting to `info`. Call once at process start.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
