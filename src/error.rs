//! Crate-wide error type.

use std::ffi::NulError;
use std::fmt;

use crate::sys::jni::jint;

/// Errors returned by the safe JNI layer.
#[derive(Debug)]
pub enum Error {
    /// A name, signature or message contained an interior NUL byte.
    Nul(NulError),
    /// The VM returned a null handle where a value was expected.
    NullResult(&'static str),
    /// The VM's function table leaves this slot empty.
    MissingFunction(&'static str),
    /// A JNI function returned a status other than `JNI_OK`.
    Status { call: &'static str, code: jint },
    /// A Java exception was pending after a call. It has been described to
    /// stderr and cleared.
    JavaException,
    InvalidMethodId { name: String, signature: String },
    InvalidFieldId { name: String, signature: String },
    /// A callback method could not be resolved on its target object.
    InvalidMethod(String),
    /// Callbacks must target methods returning `void`.
    IncorrectMethodSignature(String),
    InvalidParameters { expected: usize, actual: usize },
    InvalidSignature(String),
    IndexOutOfBounds { index: usize, len: usize },
    /// A length or offset does not fit in `jsize`.
    JsizeOverflow(usize),
    /// The VM does not implement the requested JNI version. `actual` is
    /// `None` when the VM only rejected the request without reporting its own.
    UnsupportedVersion { required: jint, actual: Option<jint> },
    /// A Java string was not valid UTF-16 or modified UTF-8.
    InvalidString,
    /// `JNI_OnLoad` has not run, so there is no process VM.
    NotLoaded,
    /// A main-thread-only operation was invoked from another thread.
    WrongThread(&'static str),
    /// Failed to load `libjvm` or resolve its symbols.
    Load(String),
    /// Failed to locate `libjvm`.
    Locate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Nul(e) => write!(f, "string passed to JNI contains a NUL byte: {e}"),
            Error::NullResult(call) => write!(f, "{call} returned null"),
            Error::MissingFunction(slot) => write!(f, "JNI function table has no {slot}"),
            Error::Status { call, code } => write!(f, "{call} failed with JNI status {code}"),
            Error::JavaException => f.write_str("a Java exception was thrown"),
            Error::InvalidMethodId { name, signature } => {
                write!(f, "no method {name} with signature {signature}")
            }
            Error::InvalidFieldId { name, signature } => {
                write!(f, "no field {name} with signature {signature}")
            }
            Error::InvalidMethod(name) => write!(f, "callback method {name} not found"),
            Error::IncorrectMethodSignature(sig) => {
                write!(f, "callback signature {sig} does not return void")
            }
            Error::InvalidParameters { expected, actual } => {
                write!(f, "expected {expected} arguments, got {actual}")
            }
            Error::InvalidSignature(sig) => write!(f, "malformed type descriptor: {sig}"),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for array of length {len}")
            }
            Error::JsizeOverflow(n) => write!(f, "{n} does not fit in a jsize"),
            Error::UnsupportedVersion {
                required,
                actual: Some(actual),
            } => write!(f, "JNI version {required:#x} required, VM provides {actual:#x}"),
            Error::UnsupportedVersion {
                required,
                actual: None,
            } => write!(f, "JNI version {required:#x} not supported by this VM"),
            Error::InvalidString => f.write_str("Java string is not valid UTF-16 or modified UTF-8"),
            Error::NotLoaded => f.write_str("JNI_OnLoad has not been called"),
            Error::WrongThread(what) => write!(f, "{what} must be called on the main thread"),
            Error::Load(e) => write!(f, "failed to load libjvm: {e}"),
            Error::Locate(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Nul(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NulError> for Error {
    fn from(value: NulError) -> Self {
        Error::Nul(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
