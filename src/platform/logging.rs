use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once
///
/// Uses `RUST_LOG` when set (`env_logger` filter syntax, e.g.
/// "shapes_sandbox=debug,wgpu=warn"), otherwise `info`. Subsequent calls
/// are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder
                .filter_level(log::LevelFilter::Info)
                // wgpu is chatty at info
                .filter_module("wgpu_core", log::LevelFilter::Warn)
                .filter_module("wgpu_hal", log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
