//! Safe forwarders over a thread-local `JNIEnv*`.
//!
//! [`JniEnv`] has one method per JNI function, named after the function in
//! snake case. Status codes become `Result<()>`, handles that must not be null
//! become `Result<handle>`, and `jboolean` becomes `bool`. Anything that can
//! leave a Java exception pending (method calls, object construction, array
//! allocation) runs [`JniEnv::check_exception`] afterwards, so the caller
//! always gets control back with the exception described and cleared.
//!
//! Higher level helpers live in sibling modules as further `impl JniEnv`
//! blocks: strings, arrays, by-name method calls and field access.
//!
//! # Example
//!
//! ```rust,ignore
//! use jni_bridge::prelude::*;
//!
//! fn greet(env: &JniEnv) -> jni_bridge::Result<()> {
//!     let system = env.find_class("java/lang/System")?;
//!     let mid = env.get_static_method_id(system, "lineSeparator", "()Ljava/lang/String;")?;
//!     let sep = env.call_static_object_method(system, mid, &[])?;
//!     let text = env.get_string(sep)?;
//!     env.delete_local_ref(sep)?;
//!     env.delete_local_ref(system)?;
//!     log::info!("separator is {:?}", text);
//!     Ok(())
//! }
//! ```

use std::ffi::{c_void, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::error::{Error, Result};
use crate::refs::LocalRef;
use crate::strings::java_utf;
use crate::sys::jni::{self, from_jboolean, to_jboolean};
use crate::vm::Jni;

/// A `JNIEnv*` valid on the current thread.
///
/// Not `Send`: every attached thread has its own environment. Obtain one for
/// another thread through [`Jni::env`].
#[derive(Debug, Clone, Copy)]
pub struct JniEnv {
    env: *mut jni::JNIEnv,
}

impl JniEnv {
    /// Wrap a raw environment pointer.
    ///
    /// # Safety
    ///
    /// `env` must be a valid `JNIEnv*` for the calling thread and must outlive
    /// the returned value.
    pub unsafe fn from_raw(env: *mut jni::JNIEnv) -> Self {
        JniEnv { env }
    }

    pub fn raw(&self) -> *mut jni::JNIEnv {
        self.env
    }

    // =========================================================================
    // Version
    // =========================================================================

    pub fn get_version(&self) -> Result<jni::jint> {
        Ok(unsafe { env_fn!(self.env, GetVersion) })
    }

    /// Fail with [`Error::UnsupportedVersion`] unless the VM implements at
    /// least `required`. Guards the table slots appended after JNI 1.6.
    pub fn require_version(&self, required: jni::jint) -> Result<()> {
        let actual = self.get_version()?;
        if actual < required {
            return Err(Error::UnsupportedVersion {
                required,
                actual: Some(actual),
            });
        }
        Ok(())
    }

    /// The VM this environment belongs to.
    pub fn get_java_vm(&self) -> Result<Jni> {
        let mut vm: *mut jni::JavaVM = ptr::null_mut();
        status!("GetJavaVM", unsafe { env_fn!(self.env, GetJavaVM, &mut vm) })?;
        let vm = non_null!("GetJavaVM", vm)?;
        Ok(unsafe { Jni::from_raw(vm) })
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Define a class from raw class file bytes.
    pub fn define_class(
        &self,
        name: Option<&str>,
        loader: jni::jobject,
        bytes: &[u8],
    ) -> Result<jni::jclass> {
        let c_name = name.map(CString::new).transpose()?;
        let name_ptr = c_name.as_ref().map_or(ptr::null(), |n| n.as_ptr());
        let len = crate::arrays::to_jsize(bytes.len())?;
        let cls = unsafe {
            env_fn!(
                self.env,
                DefineClass,
                name_ptr,
                loader,
                bytes.as_ptr() as *const jni::jbyte,
                len
            )
        };
        self.check_exception()?;
        non_null!("DefineClass", cls)
    }

    /// Find a class by its binary name using `/` separators
    /// (`java/lang/String`). A `NoClassDefFoundError` is cleared and reported
    /// as [`Error::JavaException`].
    pub fn find_class(&self, name: &str) -> Result<jni::jclass> {
        let c_name = CString::new(name)?;
        let cls = unsafe { env_fn!(self.env, FindClass, c_name.as_ptr()) };
        self.check_exception()?;
        non_null!("FindClass", cls)
    }

    /// `None` for `java.lang.Object` and interfaces.
    pub fn get_superclass(&self, cls: jni::jclass) -> Result<Option<jni::jclass>> {
        let sup = unsafe { env_fn!(self.env, GetSuperclass, cls) };
        Ok((!sup.is_null()).then_some(sup))
    }

    /// Whether an object of `sub` can be safely cast to `sup`.
    pub fn is_assignable_from(&self, sub: jni::jclass, sup: jni::jclass) -> Result<bool> {
        Ok(from_jboolean(unsafe { env_fn!(self.env, IsAssignableFrom, sub, sup) }))
    }

    pub fn from_reflected_method(&self, method: jni::jobject) -> Result<jni::jmethodID> {
        non_null!("FromReflectedMethod", unsafe {
            env_fn!(self.env, FromReflectedMethod, method)
        })
    }

    pub fn from_reflected_field(&self, field: jni::jobject) -> Result<jni::jfieldID> {
        non_null!("FromReflectedField", unsafe { env_fn!(self.env, FromReflectedField, field) })
    }

    pub fn to_reflected_method(
        &self,
        cls: jni::jclass,
        method_id: jni::jmethodID,
        is_static: bool,
    ) -> Result<jni::jobject> {
        let obj = unsafe {
            env_fn!(self.env, ToReflectedMethod, cls, method_id, to_jboolean(is_static))
        };
        self.check_exception()?;
        non_null!("ToReflectedMethod", obj)
    }

    pub fn to_reflected_field(
        &self,
        cls: jni::jclass,
        field_id: jni::jfieldID,
        is_static: bool,
    ) -> Result<jni::jobject> {
        let obj =
            unsafe { env_fn!(self.env, ToReflectedField, cls, field_id, to_jboolean(is_static)) };
        self.check_exception()?;
        non_null!("ToReflectedField", obj)
    }

    /// The `java.lang.Module` of a class. Needs JNI 9.
    pub fn get_module(&self, cls: jni::jclass) -> Result<jni::jobject> {
        self.require_version(jni::JNI_VERSION_9)?;
        non_null!("GetModule", unsafe { env_fn!(self.env, GetModule, cls) })
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    pub fn throw(&self, obj: jni::jthrowable) -> Result<()> {
        status!("Throw", unsafe { env_fn!(self.env, Throw, obj) })
    }

    /// Throw a new instance of `cls` constructed with `msg`.
    pub fn throw_new(&self, cls: jni::jclass, msg: &str) -> Result<()> {
        let msg = java_utf(msg);
        status!("ThrowNew", unsafe { env_fn!(self.env, ThrowNew, cls, msg.as_ptr() as *const c_char) })
    }

    /// Throw a `java.lang.Exception` carrying `message`.
    pub fn throw_new_exception(&self, message: &str) -> Result<()> {
        let cls = LocalRef::new(self, self.find_class("java/lang/Exception")?);
        self.throw_new(cls.get(), message)
    }

    pub fn exception_occurred(&self) -> Result<Option<jni::jthrowable>> {
        let exc = unsafe { env_fn!(self.env, ExceptionOccurred) };
        Ok((!exc.is_null()).then_some(exc))
    }

    /// Print the pending exception and its stack trace to stderr.
    pub fn exception_describe(&self) -> Result<()> {
        unsafe { env_fn!(self.env, ExceptionDescribe) };
        Ok(())
    }

    pub fn exception_clear(&self) -> Result<()> {
        unsafe { env_fn!(self.env, ExceptionClear) };
        Ok(())
    }

    pub fn exception_check(&self) -> Result<bool> {
        Ok(from_jboolean(unsafe { env_fn!(self.env, ExceptionCheck) }))
    }

    /// Abort the VM with `msg`. Does not return on a real VM.
    pub fn fatal_error(&self, msg: &str) -> Result<()> {
        let bytes = java_utf(msg);
        log::error!("fatal JNI error: {msg}");
        unsafe { env_fn!(self.env, FatalError, bytes.as_ptr() as *const c_char) };
        Ok(())
    }

    /// Describe and clear a pending exception. Returns whether there was one.
    pub(crate) fn discard_exception(&self) -> Result<bool> {
        if !self.exception_check()? {
            return Ok(false);
        }
        self.exception_describe()?;
        self.exception_clear()?;
        Ok(true)
    }

    /// Turn a pending Java exception into [`Error::JavaException`].
    ///
    /// The exception is described to stderr and cleared first, so further JNI
    /// calls on this thread are legal.
    pub fn check_exception(&self) -> Result<()> {
        if self.discard_exception()? {
            log::warn!("Java exception raised during JNI call");
            return Err(Error::JavaException);
        }
        Ok(())
    }

    // =========================================================================
    // References
    // =========================================================================

    /// Global references must be released with [`JniEnv::delete_global_ref`]
    /// or owned by a [`crate::GlobalRef`].
    pub fn new_global_ref(&self, obj: jni::jobject) -> Result<jni::jobject> {
        non_null!("NewGlobalRef", unsafe { env_fn!(self.env, NewGlobalRef, obj) })
    }

    pub fn delete_global_ref(&self, obj: jni::jobject) -> Result<()> {
        unsafe { env_fn!(self.env, DeleteGlobalRef, obj) };
        Ok(())
    }

    pub fn new_local_ref(&self, obj: jni::jobject) -> Result<jni::jobject> {
        non_null!("NewLocalRef", unsafe { env_fn!(self.env, NewLocalRef, obj) })
    }

    pub fn delete_local_ref(&self, obj: jni::jobject) -> Result<()> {
        unsafe { env_fn!(self.env, DeleteLocalRef, obj) };
        Ok(())
    }

    pub fn new_weak_global_ref(&self, obj: jni::jobject) -> Result<jni::jweak> {
        non_null!("NewWeakGlobalRef", unsafe { env_fn!(self.env, NewWeakGlobalRef, obj) })
    }

    pub fn delete_weak_global_ref(&self, obj: jni::jweak) -> Result<()> {
        unsafe { env_fn!(self.env, DeleteWeakGlobalRef, obj) };
        Ok(())
    }

    pub fn push_local_frame(&self, capacity: jni::jint) -> Result<()> {
        let res = unsafe { env_fn!(self.env, PushLocalFrame, capacity) };
        self.check_exception()?;
        status!("PushLocalFrame", res)
    }

    /// Pop the current frame, returning `result` as a local reference in the
    /// previous frame (null in, null out).
    pub fn pop_local_frame(&self, result: jni::jobject) -> Result<jni::jobject> {
        Ok(unsafe { env_fn!(self.env, PopLocalFrame, result) })
    }

    pub fn ensure_local_capacity(&self, capacity: jni::jint) -> Result<()> {
        let res = unsafe { env_fn!(self.env, EnsureLocalCapacity, capacity) };
        self.check_exception()?;
        status!("EnsureLocalCapacity", res)
    }

    pub fn is_same_object(&self, a: jni::jobject, b: jni::jobject) -> Result<bool> {
        Ok(from_jboolean(unsafe { env_fn!(self.env, IsSameObject, a, b) }))
    }

    pub fn is_instance_of(&self, obj: jni::jobject, cls: jni::jclass) -> Result<bool> {
        Ok(from_jboolean(unsafe { env_fn!(self.env, IsInstanceOf, obj, cls) }))
    }

    pub fn get_object_ref_type(&self, obj: jni::jobject) -> Result<jni::jobjectRefType> {
        Ok(unsafe { env_fn!(self.env, GetObjectRefType, obj) })
    }

    // =========================================================================
    // Objects
    // =========================================================================

    /// Allocate an object without running any constructor.
    pub fn alloc_object(&self, cls: jni::jclass) -> Result<jni::jobject> {
        let obj = unsafe { env_fn!(self.env, AllocObject, cls) };
        self.check_exception()?;
        non_null!("AllocObject", obj)
    }

    /// Construct an object with the constructor `method_id`.
    pub fn new_object(
        &self,
        cls: jni::jclass,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<jni::jobject> {
        let obj = unsafe { env_fn!(self.env, NewObjectA, cls, method_id, args.as_ptr()) };
        self.check_exception()?;
        non_null!("NewObjectA", obj)
    }

    pub fn get_object_class(&self, obj: jni::jobject) -> Result<jni::jclass> {
        non_null!("GetObjectClass", unsafe { env_fn!(self.env, GetObjectClass, obj) })
    }

    // =========================================================================
    // Method and field IDs
    // =========================================================================
    //
    // A failed lookup leaves NoSuchMethodError/NoSuchFieldError pending. It is
    // cleared and reported as InvalidMethodId/InvalidFieldId.

    pub fn get_method_id(&self, cls: jni::jclass, name: &str, sig: &str) -> Result<jni::jmethodID> {
        let (c_name, c_sig) = (CString::new(name)?, CString::new(sig)?);
        let mid = unsafe { env_fn!(self.env, GetMethodID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        self.lookup_result(mid, || Error::InvalidMethodId {
            name: name.to_owned(),
            signature: sig.to_owned(),
        })
    }

    pub fn get_static_method_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jmethodID> {
        let (c_name, c_sig) = (CString::new(name)?, CString::new(sig)?);
        let mid =
            unsafe { env_fn!(self.env, GetStaticMethodID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        self.lookup_result(mid, || Error::InvalidMethodId {
            name: name.to_owned(),
            signature: sig.to_owned(),
        })
    }

    /// Look up an instance method on the runtime class of `obj`.
    pub fn get_method_id_for(
        &self,
        obj: jni::jobject,
        name: &str,
        sig: &str,
    ) -> Result<jni::jmethodID> {
        let cls = LocalRef::new(self, self.get_object_class(obj)?);
        self.get_method_id(cls.get(), name, sig)
    }

    pub fn get_field_id(&self, cls: jni::jclass, name: &str, sig: &str) -> Result<jni::jfieldID> {
        let (c_name, c_sig) = (CString::new(name)?, CString::new(sig)?);
        let fid = unsafe { env_fn!(self.env, GetFieldID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        self.lookup_result(fid, || Error::InvalidFieldId {
            name: name.to_owned(),
            signature: sig.to_owned(),
        })
    }

    pub fn get_static_field_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jfieldID> {
        let (c_name, c_sig) = (CString::new(name)?, CString::new(sig)?);
        let fid =
            unsafe { env_fn!(self.env, GetStaticFieldID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        self.lookup_result(fid, || Error::InvalidFieldId {
            name: name.to_owned(),
            signature: sig.to_owned(),
        })
    }

    fn lookup_result(&self, id: *mut c_void, err: impl FnOnce() -> Error) -> Result<*mut c_void> {
        if id.is_null() {
            self.discard_exception()?;
            return Err(err());
        }
        Ok(id)
    }

    // =========================================================================
    // Void calls (typed calls are generated below)
    // =========================================================================

    pub fn call_void_method(
        &self,
        obj: jni::jobject,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<()> {
        unsafe { env_fn!(self.env, CallVoidMethodA, obj, method_id, args.as_ptr()) };
        self.check_exception()
    }

    pub fn call_static_void_method(
        &self,
        cls: jni::jclass,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<()> {
        unsafe { env_fn!(self.env, CallStaticVoidMethodA, cls, method_id, args.as_ptr()) };
        self.check_exception()
    }

    pub fn call_nonvirtual_void_method(
        &self,
        obj: jni::jobject,
        cls: jni::jclass,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<()> {
        unsafe {
            env_fn!(self.env, CallNonvirtualVoidMethodA, obj, cls, method_id, args.as_ptr())
        };
        self.check_exception()
    }

    // =========================================================================
    // Native method registration
    // =========================================================================

    /// Register native implementations for methods of `cls`.
    pub fn register_natives(&self, cls: jni::jclass, methods: &[NativeMethod]) -> Result<()> {
        let raw: Vec<jni::JNINativeMethod> = methods.iter().map(NativeMethod::as_raw).collect();
        let res = unsafe {
            env_fn!(self.env, RegisterNatives, cls, raw.as_ptr(), raw.len() as jni::jint)
        };
        self.check_exception()?;
        status!("RegisterNatives", res)
    }

    pub fn unregister_natives(&self, cls: jni::jclass) -> Result<()> {
        status!("UnregisterNatives", unsafe { env_fn!(self.env, UnregisterNatives, cls) })
    }

    // =========================================================================
    // Monitors
    // =========================================================================

    pub fn monitor_enter(&self, obj: jni::jobject) -> Result<()> {
        status!("MonitorEnter", unsafe { env_fn!(self.env, MonitorEnter, obj) })
    }

    pub fn monitor_exit(&self, obj: jni::jobject) -> Result<()> {
        status!("MonitorExit", unsafe { env_fn!(self.env, MonitorExit, obj) })
    }

    // =========================================================================
    // NIO direct buffers
    // =========================================================================

    /// Wrap native memory in a `java.nio.ByteBuffer`.
    ///
    /// # Safety
    ///
    /// `address` must stay valid for `capacity` bytes for as long as Java code
    /// can reach the buffer.
    pub unsafe fn new_direct_byte_buffer(
        &self,
        address: *mut c_void,
        capacity: usize,
    ) -> Result<jni::jobject> {
        let buf = env_fn!(self.env, NewDirectByteBuffer, address, capacity as jni::jlong);
        self.check_exception()?;
        non_null!("NewDirectByteBuffer", buf)
    }

    pub fn get_direct_buffer_address(&self, buf: jni::jobject) -> Result<*mut c_void> {
        non_null!("GetDirectBufferAddress", unsafe {
            env_fn!(self.env, GetDirectBufferAddress, buf)
        })
    }

    pub fn get_direct_buffer_capacity(&self, buf: jni::jobject) -> Result<usize> {
        let capacity = unsafe { env_fn!(self.env, GetDirectBufferCapacity, buf) };
        usize::try_from(capacity).map_err(|_| Error::Status {
            call: "GetDirectBufferCapacity",
            code: jni::JNI_ERR,
        })
    }

    // =========================================================================
    // JNI 21+
    // =========================================================================

    pub fn is_virtual_thread(&self, thread: jni::jobject) -> Result<bool> {
        self.require_version(jni::JNI_VERSION_21)?;
        Ok(from_jboolean(unsafe { env_fn!(self.env, IsVirtualThread, thread) }))
    }
}

/// Generates the typed `Call<Type>Method` family. Every call goes through the
/// `...A` slot and is followed by an exception check.
macro_rules! typed_calls {
    ($($ty:ty, $conv:path =>
        $call:ident $call_slot:ident,
        $stat:ident $stat_slot:ident,
        $nonvirt:ident $nonvirt_slot:ident;)*) => {
        impl JniEnv {
            $(
                pub fn $call(
                    &self,
                    obj: jni::jobject,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<$ty> {
                    let value = unsafe { env_fn!(self.env, $call_slot, obj, method_id, args.as_ptr()) };
                    self.check_exception()?;
                    Ok($conv(value))
                }

                pub fn $stat(
                    &self,
                    cls: jni::jclass,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<$ty> {
                    let value = unsafe { env_fn!(self.env, $stat_slot, cls, method_id, args.as_ptr()) };
                    self.check_exception()?;
                    Ok($conv(value))
                }

                pub fn $nonvirt(
                    &self,
                    obj: jni::jobject,
                    cls: jni::jclass,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<$ty> {
                    let value = unsafe {
                        env_fn!(self.env, $nonvirt_slot, obj, cls, method_id, args.as_ptr())
                    };
                    self.check_exception()?;
                    Ok($conv(value))
                }
            )*
        }
    };
}

typed_calls! {
    jni::jobject, std::convert::identity =>
        call_object_method CallObjectMethodA,
        call_static_object_method CallStaticObjectMethodA,
        call_nonvirtual_object_method CallNonvirtualObjectMethodA;
    bool, from_jboolean =>
        call_boolean_method CallBooleanMethodA,
        call_static_boolean_method CallStaticBooleanMethodA,
        call_nonvirtual_boolean_method CallNonvirtualBooleanMethodA;
    jni::jbyte, std::convert::identity =>
        call_byte_method CallByteMethodA,
        call_static_byte_method CallStaticByteMethodA,
        call_nonvirtual_byte_method CallNonvirtualByteMethodA;
    jni::jchar, std::convert::identity =>
        call_char_method CallCharMethodA,
        call_static_char_method CallStaticCharMethodA,
        call_nonvirtual_char_method CallNonvirtualCharMethodA;
    jni::jshort, std::convert::identity =>
        call_short_method CallShortMethodA,
        call_static_short_method CallStaticShortMethodA,
        call_nonvirtual_short_method CallNonvirtualShortMethodA;
    jni::jint, std::convert::identity =>
        call_int_method CallIntMethodA,
        call_static_int_method CallStaticIntMethodA,
        call_nonvirtual_int_method CallNonvirtualIntMethodA;
    jni::jlong, std::convert::identity =>
        call_long_method CallLongMethodA,
        call_static_long_method CallStaticLongMethodA,
        call_nonvirtual_long_method CallNonvirtualLongMethodA;
    jni::jfloat, std::convert::identity =>
        call_float_method CallFloatMethodA,
        call_static_float_method CallStaticFloatMethodA,
        call_nonvirtual_float_method CallNonvirtualFloatMethodA;
    jni::jdouble, std::convert::identity =>
        call_double_method CallDoubleMethodA,
        call_static_double_method CallStaticDoubleMethodA,
        call_nonvirtual_double_method CallNonvirtualDoubleMethodA;
}

/// Generates `Get/Set<Type>Field` and `Get/SetStatic<Type>Field`.
macro_rules! typed_fields {
    ($($ty:ty, $raw:ty, $from:path, $into:path =>
        $get:ident $get_slot:ident,
        $set:ident $set_slot:ident,
        $get_static:ident $get_static_slot:ident,
        $set_static:ident $set_static_slot:ident;)*) => {
        impl JniEnv {
            $(
                pub fn $get(&self, obj: jni::jobject, field_id: jni::jfieldID) -> Result<$ty> {
                    Ok($from(unsafe { env_fn!(self.env, $get_slot, obj, field_id) }))
                }

                pub fn $set(&self, obj: jni::jobject, field_id: jni::jfieldID, value: $ty) -> Result<()> {
                    let value: $raw = $into(value);
                    unsafe { env_fn!(self.env, $set_slot, obj, field_id, value) };
                    Ok(())
                }

                pub fn $get_static(&self, cls: jni::jclass, field_id: jni::jfieldID) -> Result<$ty> {
                    Ok($from(unsafe { env_fn!(self.env, $get_static_slot, cls, field_id) }))
                }

                pub fn $set_static(&self, cls: jni::jclass, field_id: jni::jfieldID, value: $ty) -> Result<()> {
                    let value: $raw = $into(value);
                    unsafe { env_fn!(self.env, $set_static_slot, cls, field_id, value) };
                    Ok(())
                }
            )*
        }
    };
}

typed_fields! {
    jni::jobject, jni::jobject, std::convert::identity, std::convert::identity =>
        get_object_field GetObjectField,
        set_object_field SetObjectField,
        get_static_object_field GetStaticObjectField,
        set_static_object_field SetStaticObjectField;
    bool, jni::jboolean, from_jboolean, to_jboolean =>
        get_boolean_field GetBooleanField,
        set_boolean_field SetBooleanField,
        get_static_boolean_field GetStaticBooleanField,
        set_static_boolean_field SetStaticBooleanField;
    jni::jbyte, jni::jbyte, std::convert::identity, std::convert::identity =>
        get_byte_field GetByteField,
        set_byte_field SetByteField,
        get_static_byte_field GetStaticByteField,
        set_static_byte_field SetStaticByteField;
    jni::jchar, jni::jchar, std::convert::identity, std::convert::identity =>
        get_char_field GetCharField,
        set_char_field SetCharField,
        get_static_char_field GetStaticCharField,
        set_static_char_field SetStaticCharField;
    jni::jshort, jni::jshort, std::convert::identity, std::convert::identity =>
        get_short_field GetShortField,
        set_short_field SetShortField,
        get_static_short_field GetStaticShortField,
        set_static_short_field SetStaticShortField;
    jni::jint, jni::jint, std::convert::identity, std::convert::identity =>
        get_int_field GetIntField,
        set_int_field SetIntField,
        get_static_int_field GetStaticIntField,
        set_static_int_field SetStaticIntField;
    jni::jlong, jni::jlong, std::convert::identity, std::convert::identity =>
        get_long_field GetLongField,
        set_long_field SetLongField,
        get_static_long_field GetStaticLongField,
        set_static_long_field SetStaticLongField;
    jni::jfloat, jni::jfloat, std::convert::identity, std::convert::identity =>
        get_float_field GetFloatField,
        set_float_field SetFloatField,
        get_static_float_field GetStaticFloatField,
        set_static_float_field SetStaticFloatField;
    jni::jdouble, jni::jdouble, std::convert::identity, std::convert::identity =>
        get_double_field GetDoubleField,
        set_double_field SetDoubleField,
        get_static_double_field GetStaticDoubleField,
        set_static_double_field SetStaticDoubleField;
}

/// An owned native method entry for [`JniEnv::register_natives`].
#[derive(Debug, Clone)]
pub struct NativeMethod {
    name: CString,
    signature: CString,
    fn_ptr: *mut c_void,
}

impl NativeMethod {
    /// # Safety
    ///
    /// `fn_ptr` must be an `extern "system"` function whose parameters match
    /// `signature`, preceded by `*mut JNIEnv` and the receiver (`jobject` or
    /// `jclass`).
    pub unsafe fn new(name: &str, signature: &str, fn_ptr: *mut c_void) -> Result<Self> {
        Ok(NativeMethod {
            name: CString::new(name)?,
            signature: CString::new(signature)?,
            fn_ptr,
        })
    }

    fn as_raw(&self) -> jni::JNINativeMethod {
        jni::JNINativeMethod {
            name: self.name.as_ptr() as *mut _,
            signature: self.signature.as_ptr() as *mut _,
            fnPtr: self.fn_ptr,
        }
    }
}
