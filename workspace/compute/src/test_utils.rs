use model::PeriodDataStore;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Routes test logs to stderr at the level named by `RUST_LOG`, WARN
/// otherwise. Keep the guard alive for the duration of the test.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Built-in store with test tracing installed.
pub fn traced_store() -> (PeriodDataStore, tracing::subscriber::DefaultGuard) {
    let guard = init_test_tracing();
    (PeriodDataStore::builtin(), guard)
}
