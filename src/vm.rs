//! The process-wide Java VM handle.
//!
//! A native library loaded with `System.loadLibrary` receives the `JavaVM*` in
//! `JNI_OnLoad`. [`on_load`] keeps it in a process-wide slot so that any
//! thread can later obtain a [`JniEnv`] through [`jni()`] without threading the
//! pointer through every call.

use std::cell::RefCell;
use std::ffi::{c_void, CString};
use std::ptr;
use std::sync::OnceLock;

use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::sys::jni;

/// A `JavaVM*` plus the JNI version requested from `GetEnv`.
///
/// Unlike [`JniEnv`] this handle is valid on every thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jni {
    vm: *mut jni::JavaVM,
    version: jni::jint,
}

unsafe impl Send for Jni {}
unsafe impl Sync for Jni {}

impl Jni {
    /// Version requested from `GetEnv` unless overridden. Android supports
    /// nothing newer.
    pub const DEFAULT_VERSION: jni::jint = jni::JNI_VERSION_1_6;

    /// # Safety
    ///
    /// `vm` must point to a live VM for as long as this handle (or any copy)
    /// is used.
    pub unsafe fn from_raw(vm: *mut jni::JavaVM) -> Self {
        Jni {
            vm,
            version: Self::DEFAULT_VERSION,
        }
    }

    pub fn with_version(self, version: jni::jint) -> Self {
        Jni { version, ..self }
    }

    pub fn raw(&self) -> *mut jni::JavaVM {
        self.vm
    }

    pub fn version(&self) -> jni::jint {
        self.version
    }

    /// The current thread's environment, or `None` if the thread is not
    /// attached.
    pub fn get_env(&self) -> Result<Option<JniEnv>> {
        let mut env: *mut c_void = ptr::null_mut();
        let res = unsafe { vm_fn!(self.vm, GetEnv, &mut env, self.version) };
        match res {
            jni::JNI_OK => Ok(Some(unsafe { JniEnv::from_raw(non_null!("GetEnv", env)?.cast()) })),
            jni::JNI_EDETACHED => Ok(None),
            jni::JNI_EVERSION => Err(Error::UnsupportedVersion {
                required: self.version,
                actual: None,
            }),
            code => Err(Error::Status {
                call: "GetEnv",
                code,
            }),
        }
    }

    pub fn is_current_thread_attached(&self) -> Result<bool> {
        Ok(self.get_env()?.is_some())
    }

    /// The current thread's environment, attaching the thread first if
    /// necessary.
    ///
    /// A thread attached here is detached again automatically when it exits.
    pub fn env(&self) -> Result<JniEnv> {
        if let Some(env) = self.get_env()? {
            return Ok(env);
        }
        let env = self.attach(false, None)?;
        let registered =
            AUTO_DETACH.try_with(|slot| *slot.borrow_mut() = Some(AutoDetach { vm: self.vm }));
        if registered.is_err() {
            log::warn!("thread attached during thread-local teardown; it will not be detached automatically");
        }
        Ok(env)
    }

    /// Attach the current thread as a user thread. The caller is responsible
    /// for [`Jni::detach_current_thread`].
    pub fn attach_current_thread(&self, name: Option<&str>) -> Result<JniEnv> {
        self.attach(false, name)
    }

    /// Attach the current thread as a daemon thread, which does not keep the
    /// VM alive on shutdown.
    pub fn attach_current_thread_as_daemon(&self, name: Option<&str>) -> Result<JniEnv> {
        self.attach(true, name)
    }

    fn attach(&self, daemon: bool, name: Option<&str>) -> Result<JniEnv> {
        let c_name = name.map(CString::new).transpose()?;
        let mut args = jni::JavaVMAttachArgs {
            version: self.version,
            name: c_name
                .as_ref()
                .map_or(ptr::null_mut(), |n| n.as_ptr() as *mut _),
            group: ptr::null_mut(),
        };
        let args_ptr = &mut args as *mut jni::JavaVMAttachArgs as *mut c_void;

        let mut env: *mut c_void = ptr::null_mut();
        let res = unsafe {
            if daemon {
                vm_fn!(self.vm, AttachCurrentThreadAsDaemon, &mut env, args_ptr)
            } else {
                vm_fn!(self.vm, AttachCurrentThread, &mut env, args_ptr)
            }
        };
        status!("AttachCurrentThread", res)?;
        let env = non_null!("AttachCurrentThread", env)?;
        // No thread::current() here: this can run during thread-local teardown.
        log::debug!(
            "attached thread {:?} to the JVM{}",
            name.unwrap_or("<unnamed>"),
            if daemon { " as daemon" } else { "" }
        );
        Ok(unsafe { JniEnv::from_raw(env.cast()) })
    }

    /// Detach the current thread. Local references created on it become
    /// invalid.
    pub fn detach_current_thread(&self) -> Result<()> {
        // Cancel a pending automatic detach for this thread.
        let cancelled = AUTO_DETACH.try_with(|slot| slot.borrow_mut().take().map(std::mem::forget));
        if cancelled.is_err() {
            log::warn!("detaching during thread-local teardown; a pending automatic detach may still run");
        }
        status!("DetachCurrentThread", unsafe { vm_fn!(self.vm, DetachCurrentThread) })?;
        log::debug!("detached thread from the JVM");
        Ok(())
    }

    /// Unload the VM.
    ///
    /// # Safety
    ///
    /// No handle derived from this VM may be used afterwards.
    pub unsafe fn destroy(self) -> Result<()> {
        status!("DestroyJavaVM", vm_fn!(self.vm, DestroyJavaVM))
    }
}

struct AutoDetach {
    vm: *mut jni::JavaVM,
}

impl Drop for AutoDetach {
    fn drop(&mut self) {
        // Avoids "Native thread exiting without having called DetachCurrentThread".
        unsafe {
            if let Some(detach) = (**self.vm).DetachCurrentThread {
                detach(self.vm);
            }
        }
    }
}

thread_local! {
    static AUTO_DETACH: RefCell<Option<AutoDetach>> = const { RefCell::new(None) };
}

// =============================================================================
// Process-wide VM
// =============================================================================

static JNI: OnceLock<Jni> = OnceLock::new();

/// Record the VM handed to `JNI_OnLoad` and return the JNI version this
/// library needs.
///
/// Also installs the platform logger (see [`crate::logging`]). Usually called
/// through [`export_jni_onload!`](crate::export_jni_onload).
///
/// # Safety
///
/// `vm` must be the pointer passed to `JNI_OnLoad`.
pub unsafe fn on_load(vm: *mut jni::JavaVM) -> jni::jint {
    crate::logging::init();
    if JNI.set(Jni::from_raw(vm)).is_err() {
        log::warn!("JNI_OnLoad called more than once; keeping the first JavaVM");
    } else {
        log::info!("JNI library loaded");
    }
    Jni::DEFAULT_VERSION
}

/// [`on_load`] followed by a user initialiser. A failing initialiser makes
/// `JNI_OnLoad` return `JNI_ERR`, which aborts `System.loadLibrary`.
///
/// # Safety
///
/// Same as [`on_load`].
pub unsafe fn on_load_with<F>(vm: *mut jni::JavaVM, init: F) -> jni::jint
where
    F: FnOnce(&Jni) -> Result<()>,
{
    let version = on_load(vm);
    let result = jni().and_then(|handle| init(&handle));
    match result {
        Ok(()) => version,
        Err(err) => {
            log::error!("JNI_OnLoad initialiser failed: {err}");
            jni::JNI_ERR
        }
    }
}

/// Called from `JNI_OnUnload` when the class loader that loaded this library
/// is collected.
pub fn on_unload() {
    log::info!("JNI library unloaded");
}

/// The VM recorded by [`on_load`].
pub fn jni() -> Result<Jni> {
    JNI.get().copied().ok_or(Error::NotLoaded)
}

/// Detach the calling thread from the process VM.
pub fn detach_current_thread() -> Result<()> {
    jni()?.detach_current_thread()
}

/// Emit `JNI_OnLoad` and `JNI_OnUnload` for a `cdylib`.
///
/// ```rust,ignore
/// jni_bridge::export_jni_onload!();
///
/// // or with an initialiser:
/// jni_bridge::export_jni_onload!(|jni: &jni_bridge::Jni| {
///     let env = jni.env()?;
///     let cls = env.find_class("com/example/Native")?;
///     env.register_natives(cls, &natives())
/// });
/// ```
#[macro_export]
macro_rules! export_jni_onload {
    () => {
        $crate::export_jni_onload!(|_: &$crate::Jni| Ok(()));
    };
    ($init:expr) => {
        #[no_mangle]
        pub unsafe extern "system" fn JNI_OnLoad(
            vm: *mut $crate::sys::jni::JavaVM,
            _reserved: *mut ::std::ffi::c_void,
        ) -> $crate::sys::jni::jint {
            $crate::on_load_with(vm, $init)
        }

        #[no_mangle]
        pub unsafe extern "system" fn JNI_OnUnload(
            _vm: *mut $crate::sys::jni::JavaVM,
            _reserved: *mut ::std::ffi::c_void,
        ) {
            $crate::on_unload();
        }
    };
}
