// Internal call helpers shared by the safe wrappers.

/// Call a JNIEnv slot, returning `Error::MissingFunction` from the enclosing
/// function when the slot is empty. Must be used inside `unsafe`.
macro_rules! env_fn {
    ($env:expr, $func:ident $(, $args:expr)*) => {{
        let env_ptr: *mut $crate::sys::jni::JNIEnv = $env;
        match (**env_ptr).$func {
            Some(f) => f(env_ptr $(, $args)*),
            None => return Err($crate::Error::MissingFunction(stringify!($func))),
        }
    }};
}

/// Same as `env_fn!` for JavaVM slots.
macro_rules! vm_fn {
    ($vm:expr, $func:ident $(, $args:expr)*) => {{
        let vm_ptr: *mut $crate::sys::jni::JavaVM = $vm;
        match (**vm_ptr).$func {
            Some(f) => f(vm_ptr $(, $args)*),
            None => return Err($crate::Error::MissingFunction(stringify!($func))),
        }
    }};
}

/// Map a JNI status code to `Result<()>`.
macro_rules! status {
    ($call:literal, $code:expr) => {{
        let code: $crate::sys::jni::jint = $code;
        if code == $crate::sys::jni::JNI_OK {
            Ok(())
        } else {
            Err($crate::Error::Status { call: $call, code })
        }
    }};
}

/// Map a null handle to `Error::NullResult`.
macro_rules! non_null {
    ($call:literal, $ptr:expr) => {{
        let ptr = $ptr;
        if ptr.is_null() {
            Err($crate::Error::NullResult($call))
        } else {
            Ok(ptr)
        }
    }};
}
