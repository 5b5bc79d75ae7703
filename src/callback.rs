//! Calling a `void` Java method from any native thread.

use crate::convert::{Arguments, JavaArgument};
use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::refs::{GlobalRef, LocalRef};
use crate::signature::MethodDescriptor;
use crate::sys::jni;

/// A resolved `void` method on a specific object.
///
/// The target is held as a global reference; every invocation runs on the
/// calling thread, attaching it to the VM if needed.
///
/// ```rust,ignore
/// let on_progress = JavaCallback::new(&env, listener, "onProgress", "(F)V")?;
/// std::thread::spawn(move || on_progress.call(&[&0.5f32]));
/// ```
pub struct JavaCallback {
    object: GlobalRef,
    method_id: jni::jmethodID,
    name: String,
    descriptor: MethodDescriptor,
}

// Method IDs stay valid while the class is loaded, which the global
// reference guarantees.
unsafe impl Send for JavaCallback {}
unsafe impl Sync for JavaCallback {}

impl JavaCallback {
    /// Resolve `name` with `signature` on `object`'s class.
    ///
    /// Only `void` methods are accepted.
    pub fn new(env: &JniEnv, object: jni::jobject, name: &str, signature: &str) -> Result<Self> {
        let descriptor = MethodDescriptor::parse(signature)
            .map_err(|_| Error::IncorrectMethodSignature(signature.to_owned()))?;
        if !descriptor.is_void() {
            return Err(Error::IncorrectMethodSignature(signature.to_owned()));
        }

        let cls = LocalRef::new(env, env.get_object_class(object)?);
        let method_id = env
            .get_method_id(cls.get(), name, signature)
            .map_err(|_| Error::InvalidMethod(format!("{name}{signature}")))?;

        Ok(JavaCallback {
            object: GlobalRef::new(env, object)?,
            method_id,
            name: name.to_owned(),
            descriptor,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    pub fn param_count(&self) -> usize {
        self.descriptor.params.len()
    }

    /// Invoke with raw values. `args` must match the descriptor in number and
    /// type.
    pub fn apply(&self, args: &[jni::jvalue]) -> Result<()> {
        self.check_count(args.len())?;
        let env = self.object.vm().env()?;
        env.call_void_method(self.object.get(), self.method_id, args)
    }

    /// Invoke with converted arguments.
    pub fn call(&self, args: &[&dyn JavaArgument]) -> Result<()> {
        self.check_count(args.len())?;
        let env = self.object.vm().env()?;
        let args = Arguments::new(&env, args)?;
        env.call_void_method(self.object.get(), self.method_id, args.as_slice())
    }

    fn check_count(&self, actual: usize) -> Result<()> {
        let expected = self.param_count();
        if actual != expected {
            log::warn!("{}: expected {expected} arguments, got {actual}", self.name);
            return Err(Error::InvalidParameters { expected, actual });
        }
        Ok(())
    }
}

impl std::fmt::Debug for JavaCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaCallback")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor.to_string())
            .finish()
    }
}
