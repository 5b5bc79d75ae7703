//! Conversions between Rust values and JNI arguments, fields and return
//! values.
//!
//! [`JavaArgument`] turns a Rust value into a `jvalue` and knows its type
//! descriptor; [`FromJava`] reads a value back from a method call or field.
//! Together they let [`JniEnv::call`](crate::JniEnv::call) and friends derive
//! method signatures from the argument and return types.

use std::borrow::Cow;

use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::refs::LocalRef;
use crate::signature::object_signature;
use crate::sys::jni::{self, to_jboolean};

/// A `java.lang.Object` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaObject(pub jni::jobject);

/// An `android.content.Context` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaContext(pub jni::jobject);

/// A reference passed with an explicit class, e.g. `com.example.Listener`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedObject {
    pub object: jni::jobject,
    pub class: String,
}

impl TypedObject {
    pub fn new(object: jni::jobject, class: &str) -> Self {
        TypedObject {
            object,
            class: class.to_owned(),
        }
    }
}

/// One converted argument. `owned` is a local reference created for the call
/// and deleted after it.
pub struct Argument {
    value: jni::jvalue,
    owned: Option<jni::jobject>,
}

impl Argument {
    pub fn new(value: jni::jvalue) -> Self {
        Argument { value, owned: None }
    }

    pub fn object(obj: jni::jobject) -> Self {
        Argument::new(jni::jvalue { l: obj })
    }

    /// A local reference the call owns and deletes afterwards.
    pub fn owned_object(obj: jni::jobject) -> Self {
        Argument {
            value: jni::jvalue { l: obj },
            owned: Some(obj),
        }
    }

    pub fn value(&self) -> jni::jvalue {
        self.value
    }
}

/// A Rust value that can be passed to a Java method.
pub trait JavaArgument {
    /// Type descriptor, e.g. `I` or `Ljava/lang/String;`.
    fn signature(&self) -> Cow<'_, str>;

    fn to_argument(&self, env: &JniEnv) -> Result<Argument>;
}

/// Concatenated descriptors of `args`, the part between the parentheses of a
/// method descriptor.
pub fn argument_signature(args: &[&dyn JavaArgument]) -> String {
    args.iter().map(|arg| arg.signature()).collect()
}

/// Converted arguments for one call. Temporary local references are deleted
/// on drop.
pub struct Arguments<'env> {
    env: &'env JniEnv,
    values: Vec<jni::jvalue>,
    owned: Vec<jni::jobject>,
}

impl<'env> Arguments<'env> {
    pub fn new(env: &'env JniEnv, args: &[&dyn JavaArgument]) -> Result<Self> {
        let mut converted = Arguments {
            env,
            values: Vec::with_capacity(args.len()),
            owned: Vec::new(),
        };
        for arg in args {
            let arg = arg.to_argument(env)?;
            converted.values.push(arg.value);
            converted.owned.extend(arg.owned);
        }
        Ok(converted)
    }

    pub fn as_slice(&self) -> &[jni::jvalue] {
        &self.values
    }
}

impl Drop for Arguments<'_> {
    fn drop(&mut self) {
        for obj in self.owned.drain(..) {
            let _ = self.env.delete_local_ref(obj);
        }
    }
}

macro_rules! primitive_argument {
    ($($ty:ty, $sig:literal, $field:ident, $conv:path;)*) => {
        $(
            impl JavaArgument for $ty {
                fn signature(&self) -> Cow<'_, str> {
                    Cow::Borrowed($sig)
                }

                fn to_argument(&self, _env: &JniEnv) -> Result<Argument> {
                    Ok(Argument::new(jni::jvalue { $field: $conv(*self) }))
                }
            }
        )*
    };
}

primitive_argument! {
    bool, "Z", z, to_jboolean;
    i8, "B", b, std::convert::identity;
    u16, "C", c, std::convert::identity;
    i16, "S", s, std::convert::identity;
    i32, "I", i, std::convert::identity;
    i64, "J", j, std::convert::identity;
    f32, "F", f, std::convert::identity;
    f64, "D", d, std::convert::identity;
}

impl JavaArgument for str {
    fn signature(&self) -> Cow<'_, str> {
        Cow::Borrowed("Ljava/lang/String;")
    }

    fn to_argument(&self, env: &JniEnv) -> Result<Argument> {
        Ok(Argument::owned_object(env.new_string_utf(self)?))
    }
}

impl JavaArgument for &str {
    fn signature(&self) -> Cow<'_, str> {
        (**self).signature()
    }

    fn to_argument(&self, env: &JniEnv) -> Result<Argument> {
        (**self).to_argument(env)
    }
}

impl JavaArgument for String {
    fn signature(&self) -> Cow<'_, str> {
        self.as_str().signature()
    }

    fn to_argument(&self, env: &JniEnv) -> Result<Argument> {
        self.as_str().to_argument(env)
    }
}

impl JavaArgument for JavaObject {
    fn signature(&self) -> Cow<'_, str> {
        Cow::Borrowed("Ljava/lang/Object;")
    }

    fn to_argument(&self, _env: &JniEnv) -> Result<Argument> {
        Ok(Argument::object(self.0))
    }
}

impl JavaArgument for JavaContext {
    fn signature(&self) -> Cow<'_, str> {
        Cow::Borrowed("Landroid/content/Context;")
    }

    fn to_argument(&self, _env: &JniEnv) -> Result<Argument> {
        Ok(Argument::object(self.0))
    }
}

impl JavaArgument for TypedObject {
    fn signature(&self) -> Cow<'_, str> {
        Cow::Owned(object_signature(&self.class))
    }

    fn to_argument(&self, _env: &JniEnv) -> Result<Argument> {
        Ok(Argument::object(self.object))
    }
}

/// A value that can be read back from a Java method or field.
pub trait FromJava: Sized {
    /// Type descriptor used as return type or field type.
    const SIGNATURE: &'static str;

    fn from_method(
        env: &JniEnv,
        obj: jni::jobject,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<Self>;

    fn from_static_method(
        env: &JniEnv,
        cls: jni::jclass,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> Result<Self>;

    fn from_field(env: &JniEnv, obj: jni::jobject, field_id: jni::jfieldID) -> Result<Self>;

    fn from_static_field(env: &JniEnv, cls: jni::jclass, field_id: jni::jfieldID) -> Result<Self>;
}

macro_rules! primitive_from_java {
    ($($ty:ty, $sig:literal => $call:ident, $call_static:ident, $get:ident, $get_static:ident;)*) => {
        $(
            impl FromJava for $ty {
                const SIGNATURE: &'static str = $sig;

                fn from_method(
                    env: &JniEnv,
                    obj: jni::jobject,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<Self> {
                    env.$call(obj, method_id, args)
                }

                fn from_static_method(
                    env: &JniEnv,
                    cls: jni::jclass,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<Self> {
                    env.$call_static(cls, method_id, args)
                }

                fn from_field(env: &JniEnv, obj: jni::jobject, field_id: jni::jfieldID) -> Result<Self> {
                    env.$get(obj, field_id)
                }

                fn from_static_field(env: &JniEnv, cls: jni::jclass, field_id: jni::jfieldID) -> Result<Self> {
                    env.$get_static(cls, field_id)
                }
            }
        )*
    };
}

primitive_from_java! {
    bool, "Z" => call_boolean_method, call_static_boolean_method, get_boolean_field, get_static_boolean_field;
    i8, "B" => call_byte_method, call_static_byte_method, get_byte_field, get_static_byte_field;
    u16, "C" => call_char_method, call_static_char_method, get_char_field, get_static_char_field;
    i16, "S" => call_short_method, call_static_short_method, get_short_field, get_static_short_field;
    i32, "I" => call_int_method, call_static_int_method, get_int_field, get_static_int_field;
    i64, "J" => call_long_method, call_static_long_method, get_long_field, get_static_long_field;
    f32, "F" => call_float_method, call_static_float_method, get_float_field, get_static_float_field;
    f64, "D" => call_double_method, call_static_double_method, get_double_field, get_static_double_field;
}

/// Object-typed results share the object slots and differ only in how the
/// returned reference is wrapped.
macro_rules! object_from_java {
    ($($ty:ty, $sig:literal, |$env:ident, $obj:ident| $wrap:expr;)*) => {
        $(
            impl FromJava for $ty {
                const SIGNATURE: &'static str = $sig;

                fn from_method(
                    env: &JniEnv,
                    obj: jni::jobject,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<Self> {
                    let $obj = env.call_object_method(obj, method_id, args)?;
                    let $env = env;
                    $wrap
                }

                fn from_static_method(
                    env: &JniEnv,
                    cls: jni::jclass,
                    method_id: jni::jmethodID,
                    args: &[jni::jvalue],
                ) -> Result<Self> {
                    let $obj = env.call_static_object_method(cls, method_id, args)?;
                    let $env = env;
                    $wrap
                }

                fn from_field(env: &JniEnv, obj: jni::jobject, field_id: jni::jfieldID) -> Result<Self> {
                    let $obj = env.get_object_field(obj, field_id)?;
                    let $env = env;
                    $wrap
                }

                fn from_static_field(env: &JniEnv, cls: jni::jclass, field_id: jni::jfieldID) -> Result<Self> {
                    let $obj = env.get_static_object_field(cls, field_id)?;
                    let $env = env;
                    $wrap
                }
            }
        )*
    };
}

object_from_java! {
    JavaObject, "Ljava/lang/Object;", |_env, obj| Ok(JavaObject(obj));
    JavaContext, "Landroid/content/Context;", |_env, obj| Ok(JavaContext(obj));
    String, "Ljava/lang/String;", |env, obj| string_from_local(env, obj);
}

/// Copy a string returned as a fresh local reference, then delete it.
fn string_from_local(env: &JniEnv, obj: jni::jobject) -> Result<String> {
    if obj.is_null() {
        return Err(Error::NullResult("java.lang.String"));
    }
    let local = LocalRef::new(env, obj);
    env.get_string(local.get())
}

impl JavaObject {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl From<JavaObject> for jni::jobject {
    fn from(value: JavaObject) -> Self {
        value.0
    }
}
