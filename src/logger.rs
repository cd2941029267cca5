/// Initializes `env_logger`: debug output with `--verbose`, progress otherwise.
/// `RUST_LOG` still overrides the default level.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
