//! Side channel for the overlay's own failures. Used when the normal
//! pipeline cannot be (for example when the event channel itself is gone),
//! so it must never panic and never feed back into the overlay.

use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

type Hook = Box<dyn Fn(&str) + Send + Sync>;

static SELF_LOG_HOOK: Lazy<Mutex<Option<Hook>>> = Lazy::new(|| Mutex::new(None));

/// Route self-diagnostic lines somewhere other than stderr. `None` restores
/// the default.
pub fn set_hook(hook: Option<Hook>) {
    if let Ok(mut guard) = SELF_LOG_HOOK.lock() {
        *guard = hook;
    }
}

/// Report a sink-internal failure. Goes to the installed hook when there is
/// one, otherwise to stderr with a timestamp prefix.
pub fn write(message: &str) {
    if let Ok(guard) = SELF_LOG_HOOK.lock() {
        if let Some(ref hook) = *guard {
            hook(message);
            return;
        }
    }
    eprintln!("{} - {}", Local::now().to_rfc3339(), message);
}
