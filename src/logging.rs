//! Platform logger setup.
//!
//! The crate logs through the `log` facade. On Android nothing would reach
//! logcat without a backend, so [`init`] installs `android_logger` there. On
//! other targets the host application picks its own backend and [`init`] does
//! nothing.

/// Tag used for logcat output.
pub const TAG: &str = "jni-bridge";

/// Install the platform logger. Safe to call more than once.
#[cfg(target_os = "android")]
pub fn init() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(TAG),
    );
}

#[cfg(not(target_os = "android"))]
pub fn init() {}
