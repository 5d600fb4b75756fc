//! Log and error-report setup shared by the binaries

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info"
    } else {
        "info,products_api=debug,domain_products=debug,domain_users=debug,database=debug,tower_http=debug"
    }
}

/// Install the color-eyre panic and report hooks.
///
/// Reports show the error location and omit the environment section.
/// Later calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Install the global subscriber.
///
/// Production writes flattened JSON lines without targets; development
/// writes pretty multi-line events. `RUST_LOG` replaces [`default_filter`].
/// `tracing_error::ErrorLayer` is installed in both modes so eyre reports
/// carry span traces. Only the first call installs anything.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let registry = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(filter);

    let installed = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_file(false))
            .try_init()
    };

    if installed.is_ok() {
        info!(environment = ?environment, "Tracing initialized");
    } else {
        debug!("Tracing already initialized");
    }
}
