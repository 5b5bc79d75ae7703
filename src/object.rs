//! An owned Java instance together with its class.

use crate::convert::{FromJava, JavaArgument};
use crate::env::JniEnv;
use crate::error::Result;
use crate::refs::{GlobalRef, LocalRef};
use crate::signature::class_path;
use crate::sys::jni;

/// A Java object constructed from Rust.
///
/// Keeps global references to both the class and the instance, so it can
/// outlive the current native frame and be dropped on any thread.
///
/// ```rust,ignore
/// let list = JniObject::new(&env, "java.util.ArrayList", &[])?;
/// list.call(&env, "clear", &[])?;
/// let size: i32 = list.call_returning(&env, "size", &[])?;
/// ```
pub struct JniObject {
    class_name: String,
    class: GlobalRef,
    instance: GlobalRef,
}

impl JniObject {
    /// Find `class_name` (`com.example.Foo` or `com/example/Foo`) and call the
    /// constructor matching `args`.
    pub fn new(env: &JniEnv, class_name: &str, args: &[&dyn JavaArgument]) -> Result<Self> {
        let class_name = class_path(class_name);
        let class = LocalRef::new(env, env.find_class(&class_name)?);
        let class = GlobalRef::new(env, class.get())?;

        let instance = LocalRef::new(env, env.call_constructor(class.get(), args)?);
        let instance = GlobalRef::new(env, instance.get())?;
        log::trace!("constructed {class_name}");

        Ok(JniObject {
            class_name,
            class,
            instance,
        })
    }

    /// Class name in internal form.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn class(&self) -> jni::jclass {
        self.class.get()
    }

    pub fn instance(&self) -> jni::jobject {
        self.instance.get()
    }

    pub fn call(&self, env: &JniEnv, name: &str, args: &[&dyn JavaArgument]) -> Result<()> {
        env.call(name, self.instance(), args)
    }

    pub fn call_returning<T: FromJava>(
        &self,
        env: &JniEnv,
        name: &str,
        args: &[&dyn JavaArgument],
    ) -> Result<T> {
        env.call_returning(name, self.instance(), args)
    }

    pub fn call_static(&self, env: &JniEnv, name: &str, args: &[&dyn JavaArgument]) -> Result<()> {
        env.call_static(name, self.class(), args)
    }

    pub fn call_static_returning<T: FromJava>(
        &self,
        env: &JniEnv,
        name: &str,
        args: &[&dyn JavaArgument],
    ) -> Result<T> {
        env.call_static_returning(name, self.class(), args)
    }
}

impl std::fmt::Debug for JniObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JniObject")
            .field("class_name", &self.class_name)
            .field("instance", &self.instance.get())
            .finish()
    }
}
