//! Java array access.
//!
//! The eight primitive element types share one generic API through
//! [`PrimitiveElement`]:
//!
//! | Rust      | Java      | descriptor |
//! |-----------|-----------|------------|
//! | `u8`      | `boolean` | `[Z`       |
//! | `i8`      | `byte`    | `[B`       |
//! | `u16`     | `char`    | `[C`       |
//! | `i16`     | `short`   | `[S`       |
//! | `i32`     | `int`     | `[I`       |
//! | `i64`     | `long`    | `[J`       |
//! | `f32`     | `float`   | `[F`       |
//! | `f64`     | `double`  | `[D`       |

use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::sys::jni;

/// An element type of a Java primitive array.
pub trait PrimitiveElement: Copy + Default + Sized {
    /// Array type descriptor, e.g. `[I`.
    const ARRAY_SIGNATURE: &'static str;

    #[doc(hidden)]
    unsafe fn new_array(env: *mut jni::JNIEnv, len: jni::jsize) -> Result<jni::jarray>;

    #[doc(hidden)]
    unsafe fn get_region(
        env: *mut jni::JNIEnv,
        array: jni::jarray,
        start: jni::jsize,
        len: jni::jsize,
        buf: *mut Self,
    ) -> Result<()>;

    #[doc(hidden)]
    unsafe fn set_region(
        env: *mut jni::JNIEnv,
        array: jni::jarray,
        start: jni::jsize,
        len: jni::jsize,
        buf: *const Self,
    ) -> Result<()>;

    #[doc(hidden)]
    unsafe fn get_elements(env: *mut jni::JNIEnv, array: jni::jarray) -> Result<*mut Self>;

    #[doc(hidden)]
    unsafe fn release_elements(
        env: *mut jni::JNIEnv,
        array: jni::jarray,
        elems: *mut Self,
        mode: jni::jint,
    ) -> Result<()>;
}

macro_rules! primitive_element {
    ($($ty:ty, $sig:literal => $new:ident $get:ident $set:ident $elems:ident $release:ident;)*) => {
        $(
            impl PrimitiveElement for $ty {
                const ARRAY_SIGNATURE: &'static str = $sig;

                unsafe fn new_array(env: *mut jni::JNIEnv, len: jni::jsize) -> Result<jni::jarray> {
                    Ok(env_fn!(env, $new, len))
                }

                unsafe fn get_region(
                    env: *mut jni::JNIEnv,
                    array: jni::jarray,
                    start: jni::jsize,
                    len: jni::jsize,
                    buf: *mut Self,
                ) -> Result<()> {
                    env_fn!(env, $get, array, start, len, buf);
                    Ok(())
                }

                unsafe fn set_region(
                    env: *mut jni::JNIEnv,
                    array: jni::jarray,
                    start: jni::jsize,
                    len: jni::jsize,
                    buf: *const Self,
                ) -> Result<()> {
                    env_fn!(env, $set, array, start, len, buf);
                    Ok(())
                }

                unsafe fn get_elements(env: *mut jni::JNIEnv, array: jni::jarray) -> Result<*mut Self> {
                    Ok(env_fn!(env, $elems, array, ptr::null_mut()))
                }

                unsafe fn release_elements(
                    env: *mut jni::JNIEnv,
                    array: jni::jarray,
                    elems: *mut Self,
                    mode: jni::jint,
                ) -> Result<()> {
                    env_fn!(env, $release, array, elems, mode);
                    Ok(())
                }
            }
        )*
    };
}

primitive_element! {
    jni::jboolean, "[Z" => NewBooleanArray GetBooleanArrayRegion SetBooleanArrayRegion GetBooleanArrayElements ReleaseBooleanArrayElements;
    jni::jbyte, "[B" => NewByteArray GetByteArrayRegion SetByteArrayRegion GetByteArrayElements ReleaseByteArrayElements;
    jni::jchar, "[C" => NewCharArray GetCharArrayRegion SetCharArrayRegion GetCharArrayElements ReleaseCharArrayElements;
    jni::jshort, "[S" => NewShortArray GetShortArrayRegion SetShortArrayRegion GetShortArrayElements ReleaseShortArrayElements;
    jni::jint, "[I" => NewIntArray GetIntArrayRegion SetIntArrayRegion GetIntArrayElements ReleaseIntArrayElements;
    jni::jlong, "[J" => NewLongArray GetLongArrayRegion SetLongArrayRegion GetLongArrayElements ReleaseLongArrayElements;
    jni::jfloat, "[F" => NewFloatArray GetFloatArrayRegion SetFloatArrayRegion GetFloatArrayElements ReleaseFloatArrayElements;
    jni::jdouble, "[D" => NewDoubleArray GetDoubleArrayRegion SetDoubleArrayRegion GetDoubleArrayElements ReleaseDoubleArrayElements;
}

pub(crate) fn to_jsize(n: usize) -> Result<jni::jsize> {
    jni::jsize::try_from(n).map_err(|_| Error::JsizeOverflow(n))
}

impl JniEnv {
    pub fn get_array_length(&self, array: jni::jarray) -> Result<jni::jsize> {
        Ok(unsafe { env_fn!(self.raw(), GetArrayLength, array) })
    }

    /// A new array of `len` zeroed elements.
    pub fn new_primitive_array<T: PrimitiveElement>(&self, len: usize) -> Result<jni::jarray> {
        let array = unsafe { T::new_array(self.raw(), to_jsize(len)?)? };
        // Only an OutOfMemoryError can be pending here.
        self.check_exception()?;
        non_null!("New<Type>Array", array)
    }

    /// A new array holding a copy of `elements`.
    pub fn new_primitive_array_from<T: PrimitiveElement>(&self, elements: &[T]) -> Result<jni::jarray> {
        let array = self.new_primitive_array::<T>(elements.len())?;
        self.set_array_region(array, 0, elements)?;
        Ok(array)
    }

    /// Copy `buf.len()` elements starting at `start` into `buf`.
    /// An out-of-range request raises `ArrayIndexOutOfBoundsException`, which
    /// is cleared and reported as [`Error::JavaException`].
    pub fn get_array_region<T: PrimitiveElement>(
        &self,
        array: jni::jarray,
        start: usize,
        buf: &mut [T],
    ) -> Result<()> {
        unsafe {
            T::get_region(
                self.raw(),
                array,
                to_jsize(start)?,
                to_jsize(buf.len())?,
                buf.as_mut_ptr(),
            )?
        };
        self.check_exception()
    }

    /// Copy `elements` into the array starting at `start`.
    pub fn set_array_region<T: PrimitiveElement>(
        &self,
        array: jni::jarray,
        start: usize,
        elements: &[T],
    ) -> Result<()> {
        unsafe {
            T::set_region(
                self.raw(),
                array,
                to_jsize(start)?,
                to_jsize(elements.len())?,
                elements.as_ptr(),
            )?
        };
        self.check_exception()
    }

    /// Read `count` elements from `start`, or everything from `start` to the
    /// end when `count` is `None`.
    pub fn get_array_region_vec<T: PrimitiveElement>(
        &self,
        array: jni::jarray,
        start: usize,
        count: Option<usize>,
    ) -> Result<Vec<T>> {
        let len = self.get_array_length(array)?.max(0) as usize;
        if start > len {
            return Err(Error::IndexOutOfBounds { index: start, len });
        }
        let count = count.unwrap_or(len - start);
        if start.checked_add(count).filter(|&end| end <= len).is_none() {
            // count > 0 here, since start <= len.
            return Err(Error::IndexOutOfBounds {
                index: start.saturating_add(count) - 1,
                len,
            });
        }
        let mut buf = vec![T::default(); count];
        if count > 0 {
            self.get_array_region(array, start, &mut buf)?;
        }
        Ok(buf)
    }

    /// A `byte[]` as unsigned bytes (same bit pattern).
    pub fn get_byte_array_bytes(&self, array: jni::jbyteArray) -> Result<Vec<u8>> {
        let bytes: Vec<jni::jbyte> = self.get_array_region_vec(array, 0, None)?;
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }

    /// Write unsigned bytes into a `byte[]` starting at `start`.
    pub fn set_byte_array_bytes(&self, array: jni::jbyteArray, start: usize, bytes: &[u8]) -> Result<()> {
        let signed: &[jni::jbyte] =
            unsafe { slice::from_raw_parts(bytes.as_ptr() as *const jni::jbyte, bytes.len()) };
        self.set_array_region(array, start, signed)
    }

    /// A new `byte[]` holding `bytes`.
    pub fn byte_array_from_slice(&self, bytes: &[u8]) -> Result<jni::jbyteArray> {
        let array = self.new_primitive_array::<jni::jbyte>(bytes.len())?;
        self.set_byte_array_bytes(array, 0, bytes)?;
        Ok(array)
    }

    /// Pin or copy the array's elements. Changes are written back when the
    /// guard drops unless [`ArrayElements::discard`] is used.
    pub fn get_array_elements<T: PrimitiveElement>(&self, array: jni::jarray) -> Result<ArrayElements<'_, T>> {
        let len = self.get_array_length(array)?.max(0) as usize;
        let elems = unsafe { T::get_elements(self.raw(), array)? };
        Ok(ArrayElements {
            env: self,
            array,
            elems: non_null!("Get<Type>ArrayElements", elems)?,
            len,
            mode: 0,
        })
    }

    pub fn get_primitive_array_critical(&self, array: jni::jarray) -> Result<*mut std::ffi::c_void> {
        non_null!("GetPrimitiveArrayCritical", unsafe {
            env_fn!(self.raw(), GetPrimitiveArrayCritical, array, ptr::null_mut())
        })
    }

    /// # Safety
    ///
    /// `carray` must come from `GetPrimitiveArrayCritical` on `array`.
    pub unsafe fn release_primitive_array_critical(
        &self,
        array: jni::jarray,
        carray: *mut std::ffi::c_void,
        mode: jni::jint,
    ) -> Result<()> {
        env_fn!(self.raw(), ReleasePrimitiveArrayCritical, array, carray, mode);
        Ok(())
    }

    // =========================================================================
    // Object arrays
    // =========================================================================

    pub fn new_object_array(
        &self,
        len: usize,
        element_class: jni::jclass,
        initial: jni::jobject,
    ) -> Result<jni::jobjectArray> {
        let array =
            unsafe { env_fn!(self.raw(), NewObjectArray, to_jsize(len)?, element_class, initial) };
        self.check_exception()?;
        non_null!("NewObjectArray", array)
    }

    /// Element `index` as a new local reference (null for null elements).
    /// Fails without calling into Java when `index` is past the end.
    pub fn get_object_array_element(&self, array: jni::jobjectArray, index: usize) -> Result<jni::jobject> {
        let len = self.get_array_length(array)?.max(0) as usize;
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let element = unsafe { env_fn!(self.raw(), GetObjectArrayElement, array, index as jni::jsize) };
        self.check_exception()?;
        Ok(element)
    }

    pub fn set_object_array_element(
        &self,
        array: jni::jobjectArray,
        index: usize,
        value: jni::jobject,
    ) -> Result<()> {
        unsafe { env_fn!(self.raw(), SetObjectArrayElement, array, to_jsize(index)?, value) };
        self.check_exception()
    }
}

/// Typed constructors matching the JNI names.
macro_rules! typed_new_array {
    ($($name:ident => $ty:ty;)*) => {
        impl JniEnv {
            $(
                pub fn $name(&self, len: usize) -> Result<jni::jarray> {
                    self.new_primitive_array::<$ty>(len)
                }
            )*
        }
    };
}

typed_new_array! {
    new_boolean_array => jni::jboolean;
    new_byte_array => jni::jbyte;
    new_char_array => jni::jchar;
    new_short_array => jni::jshort;
    new_int_array => jni::jint;
    new_long_array => jni::jlong;
    new_float_array => jni::jfloat;
    new_double_array => jni::jdouble;
}

/// Elements from `Get<Type>ArrayElements`, released on drop.
pub struct ArrayElements<'env, T: PrimitiveElement> {
    env: &'env JniEnv,
    array: jni::jarray,
    elems: *mut T,
    len: usize,
    mode: jni::jint,
}

impl<T: PrimitiveElement> ArrayElements<'_, T> {
    /// Release without writing changes back.
    pub fn discard(mut self) {
        self.mode = jni::JNI_ABORT;
    }
}

impl<T: PrimitiveElement> Deref for ArrayElements<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.elems, self.len) }
    }
}

impl<T: PrimitiveElement> DerefMut for ArrayElements<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.elems, self.len) }
    }
}

impl<T: PrimitiveElement> Drop for ArrayElements<'_, T> {
    fn drop(&mut self) {
        let _ = unsafe { T::release_elements(self.env.raw(), self.array, self.elems, self.mode) };
    }
}
