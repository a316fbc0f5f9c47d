//! Small crate-wide convenience macros.

/// `format!`-style logging to the browser console.
///
/// Only debug builds running on wasm32 emit anything; on release builds and
/// native test runs the arguments are type-checked and discarded, so the
/// simulation core can log without touching JS imports under `cargo test`.
///
/// ```rust,ignore
/// debug_log!("resized to {}x{}", width, height);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Like [`debug_log!`] but always emitted on wasm32 via `console.error`.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
