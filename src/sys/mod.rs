//! Raw FFI layer. Everything here mirrors `jni.h`; nothing is checked.

pub mod jni;
