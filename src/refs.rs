//! Reference guards (RAII wrappers).

use crate::env::JniEnv;
use crate::error::Result;
use crate::sys::jni;
use crate::vm::Jni;

/// Deletes a local reference when dropped.
///
/// ```rust,ignore
/// let cls = LocalRef::new(&env, env.find_class("java/lang/String")?);
/// // DeleteLocalRef runs at the end of scope
/// ```
pub struct LocalRef<'a> {
    env: &'a JniEnv,
    obj: jni::jobject,
}

impl<'a> LocalRef<'a> {
    pub fn new(env: &'a JniEnv, obj: jni::jobject) -> Self {
        LocalRef { env, obj }
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }

    /// Give up ownership without deleting the reference.
    pub fn into_inner(self) -> jni::jobject {
        let obj = self.obj;
        std::mem::forget(self);
        obj
    }
}

impl Drop for LocalRef<'_> {
    fn drop(&mut self) {
        if !self.obj.is_null() {
            let _ = self.env.delete_local_ref(self.obj);
        }
    }
}

/// An owned global reference.
///
/// Holds the VM rather than an environment, so it can be sent to and dropped
/// on any thread. Dropping attaches the current thread if needed.
pub struct GlobalRef {
    vm: Jni,
    obj: jni::jobject,
}

// Global references are valid on every thread.
unsafe impl Send for GlobalRef {}
unsafe impl Sync for GlobalRef {}

impl GlobalRef {
    /// Create a new global reference to `obj`. `obj` itself is untouched.
    pub fn new(env: &JniEnv, obj: jni::jobject) -> Result<Self> {
        let vm = env.get_java_vm()?;
        let obj = env.new_global_ref(obj)?;
        Ok(GlobalRef { vm, obj })
    }

    /// Take ownership of an existing global reference.
    ///
    /// # Safety
    ///
    /// `obj` must be a global reference created on `vm` and not owned
    /// elsewhere.
    pub unsafe fn from_raw(vm: Jni, obj: jni::jobject) -> Self {
        GlobalRef { vm, obj }
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }

    pub fn vm(&self) -> &Jni {
        &self.vm
    }

    /// Give up ownership without deleting the reference.
    pub fn into_raw(self) -> jni::jobject {
        let obj = self.obj;
        std::mem::forget(self);
        obj
    }
}

impl Drop for GlobalRef {
    fn drop(&mut self) {
        if self.obj.is_null() {
            return;
        }
        match self.vm.env() {
            Ok(env) => {
                let _ = env.delete_global_ref(self.obj);
            }
            Err(err) => log::error!("leaking global reference: {err}"),
        }
    }
}

/// An owned weak global reference.
///
/// The referent may be collected at any time; [`WeakRef::upgrade`] returns a
/// local reference while it is still alive.
pub struct WeakRef {
    vm: Jni,
    obj: jni::jweak,
}

unsafe impl Send for WeakRef {}
unsafe impl Sync for WeakRef {}

impl WeakRef {
    pub fn new(env: &JniEnv, obj: jni::jobject) -> Result<Self> {
        let vm = env.get_java_vm()?;
        let obj = env.new_weak_global_ref(obj)?;
        Ok(WeakRef { vm, obj })
    }

    pub fn get(&self) -> jni::jweak {
        self.obj
    }

    /// A new local reference to the referent, or `None` once it has been
    /// collected.
    pub fn upgrade<'a>(&self, env: &'a JniEnv) -> Result<Option<LocalRef<'a>>> {
        if env.is_same_object(self.obj, std::ptr::null_mut())? {
            return Ok(None);
        }
        Ok(Some(LocalRef::new(env, env.new_local_ref(self.obj)?)))
    }
}

impl Drop for WeakRef {
    fn drop(&mut self) {
        if self.obj.is_null() {
            return;
        }
        match self.vm.env() {
            Ok(env) => {
                let _ = env.delete_weak_global_ref(self.obj);
            }
            Err(err) => log::error!("leaking weak global reference: {err}"),
        }
    }
}
