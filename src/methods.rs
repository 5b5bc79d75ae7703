//! Calling Java methods by name.
//!
//! The method descriptor is derived from the arguments' [`JavaArgument`]
//! signatures and the requested return type:
//!
//! ```rust,ignore
//! // int Integer.parseInt(String)
//! let n: i32 = env.call_static_returning("parseInt", integer_class, &[&"42"])?;
//!
//! // void list.clear()
//! env.call("clear", list, &[])?;
//! ```

use crate::convert::{argument_signature, Arguments, FromJava, JavaArgument};
use crate::env::JniEnv;
use crate::error::Result;
use crate::refs::LocalRef;
use crate::signature::{array_signature, method_signature, object_signature};
use crate::sys::jni;

fn signature_for(args: &[&dyn JavaArgument], ret: Option<&str>) -> String {
    method_signature([argument_signature(args)], ret)
}

impl JniEnv {
    // =========================================================================
    // Instance methods
    // =========================================================================

    /// Call a `void` instance method.
    pub fn call(&self, name: &str, obj: jni::jobject, args: &[&dyn JavaArgument]) -> Result<()> {
        let sig = signature_for(args, None);
        let method_id = self.get_method_id_for(obj, name, &sig)?;
        let args = Arguments::new(self, args)?;
        self.call_void_method(obj, method_id, args.as_slice())
    }

    /// Call an instance method returning `T`.
    pub fn call_returning<T: FromJava>(
        &self,
        name: &str,
        obj: jni::jobject,
        args: &[&dyn JavaArgument],
    ) -> Result<T> {
        let sig = signature_for(args, Some(T::SIGNATURE));
        let method_id = self.get_method_id_for(obj, name, &sig)?;
        let args = Arguments::new(self, args)?;
        T::from_method(self, obj, method_id, args.as_slice())
    }

    /// Call an instance method returning an instance of `class`
    /// (`com.example.Foo` or `com/example/Foo`). The result is a new local
    /// reference and may be null.
    pub fn call_returning_object(
        &self,
        name: &str,
        obj: jni::jobject,
        args: &[&dyn JavaArgument],
        class: &str,
    ) -> Result<jni::jobject> {
        let sig = signature_for(args, Some(&object_signature(class)));
        let method_id = self.get_method_id_for(obj, name, &sig)?;
        let args = Arguments::new(self, args)?;
        self.call_object_method(obj, method_id, args.as_slice())
    }

    /// Call an instance method returning `String[]`.
    pub fn call_returning_strings(
        &self,
        name: &str,
        obj: jni::jobject,
        args: &[&dyn JavaArgument],
    ) -> Result<Vec<String>> {
        let ret = array_signature(<String as FromJava>::SIGNATURE);
        let sig = signature_for(args, Some(&ret));
        let method_id = self.get_method_id_for(obj, name, &sig)?;
        let args = Arguments::new(self, args)?;
        let array = LocalRef::new(self, self.call_object_method(obj, method_id, args.as_slice())?);
        if array.get().is_null() {
            return Ok(Vec::new());
        }
        self.get_strings(array.get())
    }

    // =========================================================================
    // Static methods
    // =========================================================================

    /// Call a `static void` method.
    pub fn call_static(&self, name: &str, cls: jni::jclass, args: &[&dyn JavaArgument]) -> Result<()> {
        let sig = signature_for(args, None);
        let method_id = self.get_static_method_id(cls, name, &sig)?;
        let args = Arguments::new(self, args)?;
        self.call_static_void_method(cls, method_id, args.as_slice())
    }

    /// Call a static method returning `T`.
    pub fn call_static_returning<T: FromJava>(
        &self,
        name: &str,
        cls: jni::jclass,
        args: &[&dyn JavaArgument],
    ) -> Result<T> {
        let sig = signature_for(args, Some(T::SIGNATURE));
        let method_id = self.get_static_method_id(cls, name, &sig)?;
        let args = Arguments::new(self, args)?;
        T::from_static_method(self, cls, method_id, args.as_slice())
    }

    /// Call a static method returning an instance of `class`.
    pub fn call_static_returning_object(
        &self,
        name: &str,
        cls: jni::jclass,
        args: &[&dyn JavaArgument],
        class: &str,
    ) -> Result<jni::jobject> {
        let sig = signature_for(args, Some(&object_signature(class)));
        let method_id = self.get_static_method_id(cls, name, &sig)?;
        let args = Arguments::new(self, args)?;
        self.call_static_object_method(cls, method_id, args.as_slice())
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Construct a `cls` through the constructor matching `args`.
    pub fn call_constructor(&self, cls: jni::jclass, args: &[&dyn JavaArgument]) -> Result<jni::jobject> {
        let sig = signature_for(args, None);
        let method_id = self.get_method_id(cls, "<init>", &sig)?;
        let args = Arguments::new(self, args)?;
        self.new_object(cls, method_id, args.as_slice())
    }
}
