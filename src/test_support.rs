use std::sync::{Mutex, MutexGuard};

static CWD: Mutex<()> = Mutex::new(());

/// Serialise tests that move the process working directory.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
