//! JNI type descriptors.
//!
//! Building: [`class_path`], [`object_signature`], [`array_signature`] and
//! [`method_signature`] produce the strings `GetMethodID` and friends expect.
//!
//! Parsing: [`MethodDescriptor::parse`] and [`FieldType::parse`] read them
//! back, which is how argument counts and return kinds are validated before a
//! call.

use std::fmt;

use crate::error::{Error, Result};

/// `java.lang.String` -> `java/lang/String`.
pub fn class_path(class_name: &str) -> String {
    class_name.replace('.', "/")
}

/// `java.lang.String` -> `Ljava/lang/String;`.
pub fn object_signature(class_name: &str) -> String {
    format!("L{};", class_path(class_name))
}

/// `I` -> `[I`.
pub fn array_signature(element: &str) -> String {
    format!("[{element}")
}

/// `(` + parameter descriptors + `)` + return descriptor, with `V` when there
/// is no return type.
///
/// ```
/// use jni_bridge::signature::method_signature;
///
/// assert_eq!(method_signature(["I", "Ljava/lang/String;"], Some("Z")), "(ILjava/lang/String;)Z");
/// assert_eq!(method_signature::<_, &str>([], None), "()V");
/// ```
pub fn method_signature<I, S>(params: I, ret: Option<&str>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sig = String::from("(");
    for param in params {
        sig.push_str(param.as_ref());
    }
    sig.push(')');
    sig.push_str(ret.unwrap_or("V"));
    sig
}

/// A field (or parameter) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// Class name in internal form (`java/lang/String`).
    Object(String),
    Array(Box<FieldType>),
}

impl FieldType {
    pub fn parse(descriptor: &str) -> Result<Self> {
        let mut r = Reader::new(descriptor);
        let ty = r.field_type()?;
        r.finish()?;
        Ok(ty)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, FieldType::Object(_) | FieldType::Array(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Boolean => f.write_str("Z"),
            FieldType::Byte => f.write_str("B"),
            FieldType::Char => f.write_str("C"),
            FieldType::Short => f.write_str("S"),
            FieldType::Int => f.write_str("I"),
            FieldType::Long => f.write_str("J"),
            FieldType::Float => f.write_str("F"),
            FieldType::Double => f.write_str("D"),
            FieldType::Object(class) => write!(f, "L{class};"),
            FieldType::Array(element) => write!(f, "[{element}"),
        }
    }
}

/// A parsed method descriptor such as `(ILjava/lang/String;)V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub params: Vec<FieldType>,
    /// `None` for `void`.
    pub ret: Option<FieldType>,
}

impl MethodDescriptor {
    pub fn parse(descriptor: &str) -> Result<Self> {
        let mut r = Reader::new(descriptor);
        r.expect(b'(')?;
        let mut params = Vec::new();
        while r.peek()? != b')' {
            params.push(r.field_type()?);
        }
        r.expect(b')')?;
        let ret = if r.peek()? == b'V' {
            r.bump();
            None
        } else {
            Some(r.field_type()?)
        };
        r.finish()?;
        Ok(MethodDescriptor { params, ret })
    }

    pub fn is_void(&self) -> bool {
        self.ret.is_none()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for param in &self.params {
            write!(f, "{param}")?;
        }
        f.write_str(")")?;
        match &self.ret {
            Some(ret) => write!(f, "{ret}"),
            None => f.write_str("V"),
        }
    }
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn err(&self) -> Error {
        Error::InvalidSignature(self.src.to_owned())
    }

    fn peek(&self) -> Result<u8> {
        self.src.as_bytes().get(self.pos).copied().ok_or_else(|| self.err())
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.peek()? != byte {
            return Err(self.err());
        }
        self.bump();
        Ok(())
    }

    fn finish(&self) -> Result<()> {
        if self.pos != self.src.len() {
            return Err(self.err());
        }
        Ok(())
    }

    fn field_type(&mut self) -> Result<FieldType> {
        let tag = self.peek()?;
        self.bump();
        Ok(match tag {
            b'Z' => FieldType::Boolean,
            b'B' => FieldType::Byte,
            b'C' => FieldType::Char,
            b'S' => FieldType::Short,
            b'I' => FieldType::Int,
            b'J' => FieldType::Long,
            b'F' => FieldType::Float,
            b'D' => FieldType::Double,
            b'L' => {
                let rest = &self.src[self.pos..];
                let end = rest.find(';').ok_or_else(|| self.err())?;
                if end == 0 {
                    return Err(self.err());
                }
                self.pos += end + 1;
                FieldType::Object(rest[..end].to_owned())
            }
            b'[' => FieldType::Array(Box::new(self.field_type()?)),
            _ => return Err(self.err()),
        })
    }
}
