use std::env;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `ICONLINE_LOG` takes an `EnvFilter` directive; otherwise `ICONLINE_DEBUG`
/// switches the crate to debug level. Safe to call more than once.
pub fn init_logging() {
    let filter = env::var("ICONLINE_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| {
            if env::var("ICONLINE_DEBUG").is_ok() {
                EnvFilter::new("iconline=debug")
            } else {
                EnvFilter::new("warn")
            }
        });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
        tracing::debug!("logger initialised");
    }
}
