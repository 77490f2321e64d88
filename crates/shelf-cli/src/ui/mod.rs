//! Terminal status output.
//!
//! Progress lines go to stderr through the helpers in [`messages`]; the
//! manifests themselves are the only files written.
//!
//! # Examples
//!
//! ```no_run
//! use shelf_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Generating registry for Button...");
//! ui::success("Generated registry/Button.json");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Determine whether colors should be used for terminal output.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection
/// on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support for status lines.
///
/// Should be called early in `main`. `no_color` comes from `--no-color`.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
