//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate provides WASM bindings to expose the retouch-core editing
//! session to a browser UI.
//!
//! # Module Structure
//!
//! - `session` - The editing session (load, capture, apply edit, revert, render)
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG, JPEG)
//! - `encode` - Image encoding bindings (PNG, JPEG)
//! - `preview` - Channel isolation and display fitting
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, set_log_level } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//! set_log_level('debug');
//!
//! const session = new JsEditSession();
//! session.loadBytes(new Uint8Array(await file.arrayBuffer()));
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod preview;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, get_orientation};
pub use encode::{encode_jpeg, encode_png};
pub use preview::{extract_channel, fit_to_display};
pub use session::JsEditSession;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}

/// Change how much the core logs to the console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level = parse_level(level).map_err(types::js_error)?;
    log::set_max_level(level);
    Ok(())
}

fn parse_level(level: &str) -> Result<log::LevelFilter, log::ParseLevelError> {
    level.trim().parse()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_level(" WARN ").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), log::LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_set_log_level_only_changes_filter() {
        let before = log::max_level();
        set_log_level("warn").unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        log::set_max_level(before);
    }
}
