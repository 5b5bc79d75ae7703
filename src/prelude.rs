//! Common imports for native libraries.
//!
//! Covers the handles, guards and conversion traits most code needs.

pub use crate::convert::{FromJava, JavaArgument, JavaObject};
pub use crate::env::JniEnv;
pub use crate::error::{Error, Result};
pub use crate::export_jni_onload;
pub use crate::refs::{GlobalRef, LocalRef};
pub use crate::sys::jni;
pub use crate::vm::Jni;
pub use crate::{JavaCallback, JniObject};
#[cfg(feature = "embed")]
pub use crate::embed::{EmbeddedVm, JavaVmBuilder};
