//! Java string access.
//!
//! Text crossing into the VM as bytes (`NewStringUTF`, `ThrowNew`) is modified
//! UTF-8: NUL is `C0 80` and supplementary characters are surrogate pairs of
//! three bytes each. [`java_utf`] produces that form from a Rust `&str`.

use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::{char, ptr, slice};

use crate::arrays::to_jsize;
use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::refs::LocalRef;
use crate::sys::jni;

impl JniEnv {
    /// Create a Java string from UTF-16 code units.
    pub fn new_string(&self, chars: &[jni::jchar]) -> Result<jni::jstring> {
        let len = to_jsize(chars.len())?;
        let s = unsafe { env_fn!(self.raw(), NewString, chars.as_ptr(), len) };
        self.check_exception()?;
        non_null!("NewString", s)
    }

    /// Create a Java string from a Rust string. Any text is accepted,
    /// including NUL and characters outside the BMP.
    pub fn new_string_utf(&self, s: &str) -> Result<jni::jstring> {
        let bytes = java_utf(s);
        let s = unsafe { env_fn!(self.raw(), NewStringUTF, bytes.as_ptr() as *const c_char) };
        self.check_exception()?;
        non_null!("NewStringUTF", s)
    }

    /// Length in UTF-16 code units.
    pub fn get_string_length(&self, s: jni::jstring) -> Result<jni::jsize> {
        Ok(unsafe { env_fn!(self.raw(), GetStringLength, s) })
    }

    /// Length in bytes of the modified UTF-8 encoding.
    pub fn get_string_utf_length(&self, s: jni::jstring) -> Result<jni::jsize> {
        Ok(unsafe { env_fn!(self.raw(), GetStringUTFLength, s) })
    }

    /// Like [`JniEnv::get_string_utf_length`] without the `jsize` overflow.
    /// Needs JNI 24.
    pub fn get_string_utf_length_as_long(&self, s: jni::jstring) -> Result<jni::jlong> {
        self.require_version(jni::JNI_VERSION_24)?;
        Ok(unsafe { env_fn!(self.raw(), GetStringUTFLengthAsLong, s) })
    }

    /// Borrow the UTF-16 contents. Released when the guard drops.
    pub fn get_string_chars(&self, s: jni::jstring) -> Result<StringChars<'_>> {
        let length = self.get_string_length(s)?;
        let chars = unsafe { env_fn!(self.raw(), GetStringChars, s, ptr::null_mut()) };
        Ok(StringChars {
            env: self,
            string: s,
            chars: non_null!("GetStringChars", chars)?,
            length,
        })
    }

    /// # Safety
    ///
    /// `chars` must come from `GetStringChars` on `s` and not be released yet.
    pub unsafe fn release_string_chars(&self, s: jni::jstring, chars: *const jni::jchar) -> Result<()> {
        env_fn!(self.raw(), ReleaseStringChars, s, chars);
        Ok(())
    }

    /// Borrow the modified UTF-8 contents. Released when the guard drops.
    pub fn get_string_utf_chars(&self, s: jni::jstring) -> Result<StringUtfChars<'_>> {
        let chars = unsafe { env_fn!(self.raw(), GetStringUTFChars, s, ptr::null_mut()) };
        Ok(StringUtfChars {
            env: self,
            string: s,
            chars: non_null!("GetStringUTFChars", chars)?,
        })
    }

    /// # Safety
    ///
    /// `chars` must come from `GetStringUTFChars` on `s` and not be released
    /// yet.
    pub unsafe fn release_string_utf_chars(&self, s: jni::jstring, chars: *const c_char) -> Result<()> {
        env_fn!(self.raw(), ReleaseStringUTFChars, s, chars);
        Ok(())
    }

    /// Copy `buf.len()` UTF-16 code units starting at `start`.
    pub fn get_string_region(&self, s: jni::jstring, start: jni::jsize, buf: &mut [jni::jchar]) -> Result<()> {
        let len = to_jsize(buf.len())?;
        unsafe {
            env_fn!(
                self.raw(),
                GetStringRegion,
                s,
                start,
                len,
                buf.as_mut_ptr()
            )
        };
        self.check_exception()
    }

    /// Modified UTF-8 for `len` code units starting at `start`.
    pub fn get_string_utf_region(&self, s: jni::jstring, start: jni::jsize, len: jni::jsize) -> Result<String> {
        // One UTF-16 unit encodes to at most three bytes, plus the NUL.
        let mut buf: Vec<c_char> = vec![0; len.max(0) as usize * 3 + 1];
        unsafe { env_fn!(self.raw(), GetStringUTFRegion, s, start, len, buf.as_mut_ptr()) };
        self.check_exception()?;
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        decode_java_utf(text.to_bytes())
    }

    /// Direct pointer to the string's characters. No JNI calls are allowed
    /// until [`JniEnv::release_string_critical`].
    pub fn get_string_critical(&self, s: jni::jstring) -> Result<*const jni::jchar> {
        non_null!("GetStringCritical", unsafe {
            env_fn!(self.raw(), GetStringCritical, s, ptr::null_mut())
        })
    }

    /// # Safety
    ///
    /// `chars` must come from `GetStringCritical` on `s`.
    pub unsafe fn release_string_critical(&self, s: jni::jstring, chars: *const jni::jchar) -> Result<()> {
        env_fn!(self.raw(), ReleaseStringCritical, s, chars);
        Ok(())
    }

    /// Copy a Java string into a Rust `String`.
    pub fn get_string(&self, s: jni::jstring) -> Result<String> {
        if s.is_null() {
            return Err(Error::NullResult("jstring"));
        }
        self.get_string_chars(s)?.to_string()
    }

    /// Copy a `String[]` into a `Vec<String>`. Null elements become empty
    /// strings.
    pub fn get_strings(&self, array: jni::jobjectArray) -> Result<Vec<String>> {
        let len = self.get_array_length(array)?;
        let mut strings = Vec::with_capacity(len.max(0) as usize);
        for index in 0..len {
            let element = LocalRef::new(self, self.get_object_array_element(array, index as usize)?);
            if element.get().is_null() {
                strings.push(String::new());
            } else {
                strings.push(self.get_string(element.get())?);
            }
        }
        Ok(strings)
    }
}

/// UTF-16 contents of a Java string, released on drop.
pub struct StringChars<'env> {
    env: &'env JniEnv,
    string: jni::jstring,
    chars: *const jni::jchar,
    length: jni::jsize,
}

impl StringChars<'_> {
    /// Usually UTF-16, but Java does not guarantee valid surrogate pairs.
    pub fn chars(&self) -> &[jni::jchar] {
        unsafe { slice::from_raw_parts(self.chars, self.length.max(0) as usize) }
    }

    pub fn to_string(&self) -> Result<String> {
        char::decode_utf16(self.chars().iter().copied())
            .collect::<std::result::Result<String, _>>()
            .map_err(|_| Error::InvalidString)
    }

    /// Unpaired surrogates become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.chars())
    }
}

impl Drop for StringChars<'_> {
    fn drop(&mut self) {
        let _ = unsafe { self.env.release_string_chars(self.string, self.chars) };
    }
}

/// Modified UTF-8 contents of a Java string, released on drop.
pub struct StringUtfChars<'env> {
    env: &'env JniEnv,
    string: jni::jstring,
    chars: *const c_char,
}

impl StringUtfChars<'_> {
    pub fn as_c_str(&self) -> &CStr {
        unsafe { CStr::from_ptr(self.chars) }
    }

    pub fn to_string(&self) -> Result<String> {
        decode_java_utf(self.as_c_str().to_bytes())
    }

    /// Like [`StringUtfChars::to_string`], replacing undecodable bytes.
    pub fn to_string_lossy(&self) -> String {
        self.to_string()
            .unwrap_or_else(|_| self.as_c_str().to_string_lossy().into_owned())
    }
}

impl Drop for StringUtfChars<'_> {
    fn drop(&mut self) {
        let _ = unsafe { self.env.release_string_utf_chars(self.string, self.chars) };
    }
}

/// `s` as NUL-terminated modified UTF-8.
pub fn java_utf(s: &str) -> Vec<u8> {
    let mut bytes = cesu8::to_java_cesu8(s).into_owned();
    bytes.push(0);
    bytes
}

fn decode_java_utf(bytes: &[u8]) -> Result<String> {
    cesu8::from_java_cesu8(bytes)
        .map(Cow::into_owned)
        .map_err(|_| Error::InvalidString)
}
