#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the solver.
///
/// # Behavior
/// - **Native (CLI):** logs go to stderr (the report may be on stdout);
///   Info by default, Debug when `debug_enabled`, and `RUST_LOG` wins if set.
/// - **WASM:** browser console, Debug or Info depending on `debug_enabled`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        if let Err(e) = console_log::init_with_level(level) {
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
        } else {
            log::info!("WASM logger initialized at {level:?} level");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = native_level(debug_enabled);

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_level() {
        assert_eq!(native_level(true), LevelFilter::Debug);
        assert_eq!(native_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
    }
}
