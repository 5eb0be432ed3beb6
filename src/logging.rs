use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is not set.
///
/// 0 = warn, 1 = debug (hyper connection chatter suppressed), 2+ = trace
pub fn default_filter(verbose_level: u8) -> &'static str {
    match verbose_level {
        0 => "warn",
        1 => "debug,hyper=warn,hyper_util=warn,reqwest=info",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// list and JSON output. Calling it twice is a no-op.
pub fn init_logging(verbose_level: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose_level)));

    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
