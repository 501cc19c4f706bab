use tracing_subscriber::EnvFilter;

/// CLI logger: human-readable output, level controlled by RUST_LOG or the
/// verbose flag.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "customer_transform=debug,info"
    } else {
        "customer_transform=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so stdout stays clean for the profile JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
