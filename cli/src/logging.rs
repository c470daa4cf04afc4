use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with data on stdout.
/// `RUST_LOG` wins when set; otherwise only warnings are shown.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
