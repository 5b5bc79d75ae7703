//! Reading and writing Java fields by name.

use crate::convert::{Arguments, FromJava, JavaArgument};
use crate::env::JniEnv;
use crate::error::Result;
use crate::refs::LocalRef;
use crate::sys::jni;

impl JniEnv {
    /// Read the instance field `name` of type `T`.
    pub fn get_field<T: FromJava>(&self, name: &str, obj: jni::jobject) -> Result<T> {
        let cls = LocalRef::new(self, self.get_object_class(obj)?);
        let field_id = self.get_field_id(cls.get(), name, T::SIGNATURE)?;
        T::from_field(self, obj, field_id)
    }

    /// Read the static field `name` of type `T`.
    pub fn get_static_field<T: FromJava>(&self, name: &str, cls: jni::jclass) -> Result<T> {
        let field_id = self.get_static_field_id(cls, name, T::SIGNATURE)?;
        T::from_static_field(self, cls, field_id)
    }

    /// Write the instance field `name`. The field type is taken from the
    /// value's signature.
    pub fn set_field(&self, name: &str, obj: jni::jobject, value: &dyn JavaArgument) -> Result<()> {
        let cls = LocalRef::new(self, self.get_object_class(obj)?);
        let sig = value.signature();
        let field_id = self.get_field_id(cls.get(), name, &sig)?;
        let arg = Arguments::new(self, &[value])?;
        let v = arg.as_slice()[0];
        unsafe {
            match sig.as_bytes().first() {
                Some(b'Z') => self.set_boolean_field(obj, field_id, v.z != jni::JNI_FALSE),
                Some(b'B') => self.set_byte_field(obj, field_id, v.b),
                Some(b'C') => self.set_char_field(obj, field_id, v.c),
                Some(b'S') => self.set_short_field(obj, field_id, v.s),
                Some(b'I') => self.set_int_field(obj, field_id, v.i),
                Some(b'J') => self.set_long_field(obj, field_id, v.j),
                Some(b'F') => self.set_float_field(obj, field_id, v.f),
                Some(b'D') => self.set_double_field(obj, field_id, v.d),
                _ => self.set_object_field(obj, field_id, v.l),
            }
        }
    }

    /// Write the static field `name`.
    pub fn set_static_field(&self, name: &str, cls: jni::jclass, value: &dyn JavaArgument) -> Result<()> {
        let sig = value.signature();
        let field_id = self.get_static_field_id(cls, name, &sig)?;
        let arg = Arguments::new(self, &[value])?;
        let v = arg.as_slice()[0];
        unsafe {
            match sig.as_bytes().first() {
                Some(b'Z') => self.set_static_boolean_field(cls, field_id, v.z != jni::JNI_FALSE),
                Some(b'B') => self.set_static_byte_field(cls, field_id, v.b),
                Some(b'C') => self.set_static_char_field(cls, field_id, v.c),
                Some(b'S') => self.set_static_short_field(cls, field_id, v.s),
                Some(b'I') => self.set_static_int_field(cls, field_id, v.i),
                Some(b'J') => self.set_static_long_field(cls, field_id, v.j),
                Some(b'F') => self.set_static_float_field(cls, field_id, v.f),
                Some(b'D') => self.set_static_double_field(cls, field_id, v.d),
                _ => self.set_static_object_field(cls, field_id, v.l),
            }
        }
    }
}
