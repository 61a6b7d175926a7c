//! Small crate-wide convenience macros.

/// Print a `format!`-style message to the browser console in debug builds.
/// Release builds compile the call away entirely.
///
/// ```rust,ignore
/// debug_log!("sending question ({} chars)", question.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
