use time::format_description;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

// Sets up tracing. Goes to stderr, filtered by TRACE env var.
// Levels are: trace, debug, info, warn, error
//
// EnvFilter has a standard syntax, but basically can be boiled down to (for example):
//
// All targets, info level:                       info
// All modules under bookkeeping, debug level:    acb_journal::portfolio::bookkeeping=debug
// Global at info, ledger at trace:               info,acb_journal::portfolio::bookkeeping::ledger=trace
//
// More generally: target[span{field=value}]=level
// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
pub fn setup_tracing() {
    // 5 digits of sub-second precision is plenty.
    let time_format =
        match format_description::parse("[hour]:[minute]:[second].[subsecond digits:5]") {
            Ok(f) => f,
            Err(_) => return,
        };

    let time_offset = crate::util::date::local_utc_offset()
        .unwrap_or(time::UtcOffset::UTC);
    let timer = fmt::time::OffsetTime::new(time_offset, time_format);

    // It will use the TRACE env var for filtering, and is off by default
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_env("TRACE"))
        .with_timer(timer)
        .finish();

    // Tests call this repeatedly; only the first call installs the subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
