use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
///
/// Honors `RUST_LOG` when set; defaults to `info` otherwise. Adapter tests
/// rely on this to surface the skip-phase warnings.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt().with_env_filter(filter).with_target(false).init();
    });
}


#[cfg(feature = "auto-init")]
mod auto {
    // Runs at binary init so individual tests never have to call init.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}
