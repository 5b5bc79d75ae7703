//! Main-thread detection.
//!
//! Some JNI work (Android UI objects, AppKit bridges) is only legal on the
//! process's main thread. These helpers let callers check before calling into
//! Java.

use crate::error::{Error, Result};

/// Whether the calling thread is the process's main thread.
///
/// On Linux and Android the kernel gives the main thread a thread id equal to
/// the process id.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn is_main_thread() -> bool {
    nix::unistd::gettid() == nix::unistd::getpid()
}

/// Whether the calling thread is the process's main thread.
#[cfg(target_vendor = "apple")]
pub fn is_main_thread() -> bool {
    extern "C" {
        fn pthread_main_np() -> std::os::raw::c_int;
    }
    unsafe { pthread_main_np() != 0 }
}

/// Fail with [`Error::WrongThread`] unless called on the main thread.
#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
pub fn require_main_thread(what: &'static str) -> Result<()> {
    if is_main_thread() {
        Ok(())
    } else {
        log::warn!("{what} called off the main thread");
        Err(Error::WrongThread(what))
    }
}
