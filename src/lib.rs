//! # jni-bridge
//!
//! JNI bindings for Rust libraries loaded into a Java VM (or hosting one).
//!
//! - Raw FFI bindings to the complete JNI function table, JNI 1.1 through 24
//! - A safe [`JniEnv`] wrapper where every call returns [`Result`]
//! - A process-wide VM handle recorded in `JNI_OnLoad`, usable from any thread
//! - Calling methods and reading fields by name, with the descriptor derived
//!   from Rust argument and return types
//! - [`is_main_thread`] for code that must run on the process's main thread
//!
//! ## Quick Start
//!
//! **1. Build a `cdylib`:**
//! ```toml
//! [lib]
//! crate-type = ["cdylib"]
//!
//! [dependencies]
//! jni-bridge = "0.1"
//! ```
//!
//! **2. Export `JNI_OnLoad` and implement a native method:**
//! ```rust,ignore
//! use jni_bridge::sys::jni;
//! use jni_bridge::JniEnv;
//!
//! jni_bridge::export_jni_onload!();
//!
//! #[no_mangle]
//! pub extern "system" fn Java_com_example_Native_greet(
//!     env: *mut jni::JNIEnv,
//!     _class: jni::jclass,
//!     name: jni::jstring,
//! ) -> jni::jstring {
//!     let env = unsafe { JniEnv::from_raw(env) };
//!     let greeting = env
//!         .get_string(name)
//!         .and_then(|name| env.new_string_utf(&format!("Hello, {name}!")));
//!     greeting.unwrap_or(std::ptr::null_mut())
//! }
//! ```
//!
//! **3. Load it from Java:** `System.loadLibrary("my_native")`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Your Native Code                       │
//! ├─────────────────────────────────────────────────────────┤
//! │            Objects, Callbacks, Call-by-Name              │
//! │   JniObject, JavaCallback, JniEnv::call / get_field      │
//! │   JavaArgument / FromJava (signature derivation)         │
//! ├─────────────────────────────────────────────────────────┤
//! │                 Safe Wrappers                            │
//! │   JniEnv - every JNI function with Result returns        │
//! │   Jni - the VM handle, attach/detach, JNI_OnLoad         │
//! │   LocalRef, GlobalRef, WeakRef - RAII reference guards   │
//! ├─────────────────────────────────────────────────────────┤
//! │               Raw FFI Bindings (sys module)              │
//! │   sys::jni - JNI types, vtable (236 slots)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sys::jni`] | Raw JNI types and function tables (for FFI) |
//! | [`env`] | [`JniEnv`], the per-thread environment |
//! | [`vm`] | [`Jni`], the VM handle, and `JNI_OnLoad` support |
//! | [`strings`], [`arrays`] | String and array helpers on [`JniEnv`] |
//! | [`methods`], [`fields`] | Call methods and access fields by name |
//! | [`object`], [`callback`] | Owned instances and `void` callbacks |
//! | [`signature`] | Building and parsing type descriptors |
//! | `embed` | Start a JVM from Rust (feature `embed`) |
//!
//! ## Threads
//!
//! A [`JniEnv`] belongs to one thread. To reach Java from another thread, go
//! through the VM handle:
//!
//! ```rust,ignore
//! std::thread::spawn(|| -> jni_bridge::Result<()> {
//!     let env = jni_bridge::jni()?.env()?; // attaches, detaches on thread exit
//!     env.call_static("ping", cls, &[])
//! });
//! ```
//!
//! ## Version Compatibility
//!
//! | JNI Version | Functions | Notes |
//! |-------------|-----------|-------|
//! | 1.6 (Android) | 229 | Baseline, last slot `GetObjectRefType` |
//! | 9           | 230       | +GetModule |
//! | 21          | 231       | +IsVirtualThread |
//! | 24          | 232       | +GetStringUTFLengthAsLong |
//!
//! Wrappers for the newer functions check [`JniEnv::get_version`] first and
//! fail with [`Error::UnsupportedVersion`] instead of reading past the end of
//! an older table.

#[macro_use]
mod macros;

pub mod sys;

pub mod arrays;
pub mod callback;
pub mod convert;
pub mod env;
pub mod error;
pub mod fields;
pub mod logging;
pub mod methods;
pub mod object;
pub mod refs;
pub mod signature;
pub mod strings;
#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
pub mod thread;
pub mod vm;

#[cfg(feature = "embed")]
pub mod embed;

pub mod prelude;

pub use crate::sys::jni;

pub use crate::callback::JavaCallback;
pub use crate::convert::{FromJava, JavaArgument, JavaContext, JavaObject, TypedObject};
pub use crate::env::{JniEnv, NativeMethod};
pub use crate::error::{Error, Result};
pub use crate::object::JniObject;
pub use crate::refs::{GlobalRef, LocalRef, WeakRef};
#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
pub use crate::thread::{is_main_thread, require_main_thread};
pub use crate::vm::{detach_current_thread, jni, on_load, on_load_with, on_unload, Jni};
