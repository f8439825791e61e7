//! Subscriber installation for the `fixdict` binary

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output format of a consolidation run's logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Readable lines at `fixdict=debug`, including per-segment change reasons
    /// when `RUST_LOG` raises it to trace
    Development,
    /// One JSON object per event at `fixdict=info`; every data-quality warning
    /// carries `warning_kind`, `subject` and `run_id` for post-run triage
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber before the repository is loaded
///
/// Logs go to stderr so the consolidated JSON on stdout stays parseable.
/// `RUST_LOG` overrides the profile's filter. Later calls, and calls made
/// after a test capture was installed, leave the existing subscriber alone.
///
/// ```
/// use fixdict_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = |default: &str| {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
        };
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter("fixdict=debug"))
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter("fixdict=info"))
                .finish()
                .try_init(),
        };
        installed.ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(Profile::Production);
        init(Profile::Production);
        init(Profile::Development);
    }
}
