use crate::layer::OverlayLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber with the overlay layer attached next to
/// the usual fmt output. When `debug` is enabled the default level is
/// `debug` and `RUST_LOG` may override it; otherwise the level is forced to
/// `info` regardless of the environment, which prevents accidental verbose
/// output if the variable happens to be set.
pub fn init(debug: bool, overlay: OverlayLayer) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(overlay)
        .try_init();
}
