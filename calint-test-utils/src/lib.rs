use std::sync::Once;

static INIT: Once = Once::new();

/// Install a `tracing` subscriber for test binaries. Safe to call multiple times.
///
/// Honours `RUST_LOG` when set and otherwise shows warnings only, so parser trace output
/// stays quiet unless asked for (e.g. `RUST_LOG=calint_parse=trace`).
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(feature = "auto-init")]
mod auto {
    // Use ctor to run at binary init time to avoid having to call init in every test.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}
