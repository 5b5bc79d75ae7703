//! An in-process fake VM for driving the wrappers without a JVM.
//!
//! Every function slot starts out empty. `install` fills the ones the tests
//! need with functions backed by a per-thread `FakeVm`, so each test (which
//! runs on its own thread) gets an isolated heap.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;
use std::rc::Rc;
use std::sync::Mutex;

use jni_bridge::signature::MethodDescriptor;
use jni_bridge::sys::jni;
use jni_bridge::{Jni, JniEnv};

pub type Body = Rc<dyn Fn(&mut FakeVm, jni::jobject, &[jni::jvalue]) -> jni::jvalue>;

pub enum Value {
    Class(String),
    Instance { class: usize },
    Str(Vec<u16>),
    Ints(Vec<jni::jint>),
    Bytes(Vec<jni::jbyte>),
    Objects(Vec<jni::jobject>),
}

struct Method {
    class: usize,
    name: String,
    sig: String,
    is_static: bool,
    arity: usize,
    body: Body,
}

struct Field {
    class: usize,
    name: String,
    sig: String,
    is_static: bool,
}

pub struct FakeVm {
    pub version: jni::jint,
    next: usize,
    heap: HashMap<usize, Value>,
    classes: HashMap<String, usize>,
    methods: Vec<Method>,
    fields: Vec<Field>,
    values: HashMap<(usize, usize), jni::jvalue>,
    pub pending: Option<String>,
    pub described: usize,
    pub deleted_locals: Vec<usize>,
    pub globals: Vec<usize>,
    pub pinned_strings: usize,
    pub calls: Vec<String>,
    pub attached: bool,
    pub detaches: usize,
    pub attach_names: Vec<Option<String>>,
    /// Raw bytes passed to `NewStringUTF`, without the terminator.
    pub utf_inputs: Vec<Vec<u8>>,
    /// `(name, signature, fnPtr)` per registered native.
    pub natives: Vec<(String, String, usize)>,
    pub destroys: usize,
    env: *mut jni::JNIEnv,
    vm: *mut jni::JavaVM,
}

thread_local! {
    static STATE: RefCell<Option<FakeVm>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's fake VM.
pub fn with_vm<R>(f: impl FnOnce(&mut FakeVm) -> R) -> R {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        f(state.as_mut().expect("fake VM not installed on this thread"))
    })
}

/// Install a fresh fake VM reporting `version` on the current thread.
pub fn install(version: jni::jint) -> (JniEnv, Jni) {
    let table: &'static jni::JNINativeInterface_ = Box::leak(Box::new(env_table()));
    let env: *mut jni::JNIEnv = Box::leak(Box::new(table as *const _));
    let invoke: &'static jni::JNIInvokeInterface_ = Box::leak(Box::new(vm_table()));
    let vm: *mut jni::JavaVM = Box::leak(Box::new(invoke as *const _));

    STATE.with(|state| {
        *state.borrow_mut() = Some(FakeVm {
            version,
            next: 0x100,
            heap: HashMap::new(),
            classes: HashMap::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            values: HashMap::new(),
            pending: None,
            described: 0,
            deleted_locals: Vec::new(),
            globals: Vec::new(),
            pinned_strings: 0,
            calls: Vec::new(),
            attached: true,
            detaches: 0,
            attach_names: Vec::new(),
            utf_inputs: Vec::new(),
            natives: Vec::new(),
            destroys: 0,
            env,
            vm,
        })
    });
    with_vm(|vm| vm.define_class("java/lang/String"));
    unsafe { (JniEnv::from_raw(env), Jni::from_raw(vm)) }
}

/// A `JNIEnv` whose table has no functions at all.
pub fn empty_env() -> JniEnv {
    let table: &'static jni::JNINativeInterface_ =
        Box::leak(Box::new(unsafe { std::mem::zeroed::<jni::JNINativeInterface_>() }));
    let env: *mut jni::JNIEnv = Box::leak(Box::new(table as *const _));
    unsafe { JniEnv::from_raw(env) }
}

fn handle(obj: jni::jobject) -> usize {
    obj as usize
}

fn object(handle: usize) -> jni::jobject {
    handle as jni::jobject
}

impl FakeVm {
    fn alloc(&mut self, value: Value) -> jni::jobject {
        self.next += 8;
        self.heap.insert(self.next, value);
        object(self.next)
    }

    pub fn define_class(&mut self, name: &str) -> jni::jclass {
        if let Some(&cls) = self.classes.get(name) {
            return object(cls);
        }
        let cls = self.alloc(Value::Class(name.to_owned()));
        self.classes.insert(name.to_owned(), handle(cls));
        cls
    }

    pub fn new_instance(&mut self, class: jni::jclass) -> jni::jobject {
        self.alloc(Value::Instance {
            class: handle(class),
        })
    }

    pub fn new_string(&mut self, s: &str) -> jni::jstring {
        self.alloc(Value::Str(s.encode_utf16().collect()))
    }

    pub fn new_string_array(&mut self, items: &[Option<&str>]) -> jni::jobjectArray {
        let elements: Vec<jni::jobject> = items
            .iter()
            .map(|item| item.map_or(ptr::null_mut(), |s| self.new_string(s)))
            .collect();
        self.alloc(Value::Objects(elements))
    }

    pub fn string(&self, s: jni::jstring) -> String {
        match self.heap.get(&handle(s)) {
            Some(Value::Str(chars)) => String::from_utf16_lossy(chars),
            _ => panic!("{s:?} is not a string"),
        }
    }

    pub fn handles(&self) -> (*mut jni::JNIEnv, *mut jni::JavaVM) {
        (self.env, self.vm)
    }

    pub fn bytes(&self, array: jni::jbyteArray) -> Vec<jni::jbyte> {
        match self.heap.get(&handle(array)) {
            Some(Value::Bytes(bytes)) => bytes.clone(),
            _ => panic!("{array:?} is not a byte array"),
        }
    }

    pub fn ints(&self, array: jni::jintArray) -> Vec<jni::jint> {
        match self.heap.get(&handle(array)) {
            Some(Value::Ints(ints)) => ints.clone(),
            _ => panic!("{array:?} is not an int array"),
        }
    }

    pub fn define_method(
        &mut self,
        class: jni::jclass,
        name: &str,
        sig: &str,
        is_static: bool,
        body: impl Fn(&mut FakeVm, jni::jobject, &[jni::jvalue]) -> jni::jvalue + 'static,
    ) {
        let arity = MethodDescriptor::parse(sig)
            .expect("test method descriptor")
            .params
            .len();
        self.methods.push(Method {
            class: handle(class),
            name: name.to_owned(),
            sig: sig.to_owned(),
            is_static,
            arity,
            body: Rc::new(body),
        });
    }

    pub fn define_field(&mut self, class: jni::jclass, name: &str, sig: &str, is_static: bool) {
        self.fields.push(Field {
            class: handle(class),
            name: name.to_owned(),
            sig: sig.to_owned(),
            is_static,
        });
    }

    pub fn field_value(&self, owner: jni::jobject, name: &str) -> Option<jni::jvalue> {
        let id = self.fields.iter().position(|f| f.name == name)? + 1;
        self.values.get(&(handle(owner), id)).copied()
    }

    pub fn throw(&mut self, class: &str) {
        self.pending = Some(class.to_owned());
    }

    fn class_of(&mut self, obj: jni::jobject) -> jni::jclass {
        let builtin = match self.heap.get(&handle(obj)) {
            Some(Value::Instance { class }) => return object(*class),
            Some(Value::Str(_)) => "java/lang/String",
            Some(Value::Class(_)) => "java/lang/Class",
            _ => return ptr::null_mut(),
        };
        self.define_class(builtin)
    }

    fn find_method(&mut self, cls: jni::jclass, name: &str, sig: &str, is_static: bool) -> jni::jmethodID {
        let found = self.methods.iter().position(|m| {
            m.class == handle(cls) && m.name == name && m.sig == sig && m.is_static == is_static
        });
        match found {
            Some(index) => (index + 1) as jni::jmethodID,
            None => {
                self.throw("java/lang/NoSuchMethodError");
                ptr::null_mut()
            }
        }
    }

    fn find_field(&mut self, cls: jni::jclass, name: &str, sig: &str, is_static: bool) -> jni::jfieldID {
        let found = self.fields.iter().position(|f| {
            f.class == handle(cls) && f.name == name && f.sig == sig && f.is_static == is_static
        });
        match found {
            Some(index) => (index + 1) as jni::jfieldID,
            None => {
                self.throw("java/lang/NoSuchFieldError");
                ptr::null_mut()
            }
        }
    }
}

unsafe fn c_str<'a>(s: *const c_char) -> &'a str {
    CStr::from_ptr(s).to_str().expect("test strings are ASCII")
}

/// Record the call and run the method's body. Bodies must not call back
/// into the table.
unsafe fn invoke(this: jni::jobject, method_id: jni::jmethodID, args: *const jni::jvalue) -> jni::jvalue {
    let (body, args, name) = with_vm(|vm| {
        let method = &vm.methods[method_id as usize - 1];
        let args = if method.arity == 0 {
            Vec::new()
        } else {
            std::slice::from_raw_parts(args, method.arity).to_vec()
        };
        (method.body.clone(), args, method.name.clone())
    });
    with_vm(|vm| {
        vm.calls.push(name);
        body(vm, this, &args)
    })
}

// =============================================================================
// JNIEnv slots
// =============================================================================

unsafe extern "system" fn get_version(_env: *mut jni::JNIEnv) -> jni::jint {
    with_vm(|vm| vm.version)
}

unsafe extern "system" fn find_class(_env: *mut jni::JNIEnv, name: *const c_char) -> jni::jclass {
    let name = c_str(name);
    with_vm(|vm| match vm.classes.get(name) {
        Some(&cls) => object(cls),
        None => {
            vm.throw("java/lang/NoClassDefFoundError");
            ptr::null_mut()
        }
    })
}

unsafe extern "system" fn throw_new(_env: *mut jni::JNIEnv, cls: jni::jclass, msg: *const c_char) -> jni::jint {
    let msg = cesu8::from_java_cesu8(CStr::from_ptr(msg).to_bytes())
        .expect("message is modified UTF-8")
        .into_owned();
    with_vm(|vm| {
        let class = match vm.heap.get(&handle(cls)) {
            Some(Value::Class(name)) => name.clone(),
            _ => return jni::JNI_ERR,
        };
        vm.pending = Some(format!("{class}: {msg}"));
        jni::JNI_OK
    })
}

unsafe extern "system" fn exception_occurred(_env: *mut jni::JNIEnv) -> jni::jthrowable {
    with_vm(|vm| {
        if vm.pending.is_some() {
            0x10 as jni::jthrowable
        } else {
            ptr::null_mut()
        }
    })
}

unsafe extern "system" fn exception_describe(_env: *mut jni::JNIEnv) {
    with_vm(|vm| vm.described += 1)
}

unsafe extern "system" fn exception_clear(_env: *mut jni::JNIEnv) {
    with_vm(|vm| vm.pending = None)
}

unsafe extern "system" fn exception_check(_env: *mut jni::JNIEnv) -> jni::jboolean {
    with_vm(|vm| jni::to_jboolean(vm.pending.is_some()))
}

unsafe extern "system" fn new_global_ref(_env: *mut jni::JNIEnv, obj: jni::jobject) -> jni::jobject {
    with_vm(|vm| vm.globals.push(handle(obj)));
    obj
}

unsafe extern "system" fn delete_global_ref(_env: *mut jni::JNIEnv, obj: jni::jobject) {
    with_vm(|vm| {
        if let Some(index) = vm.globals.iter().position(|&g| g == handle(obj)) {
            vm.globals.remove(index);
        }
    })
}

unsafe extern "system" fn new_local_ref(_env: *mut jni::JNIEnv, obj: jni::jobject) -> jni::jobject {
    obj
}

unsafe extern "system" fn delete_local_ref(_env: *mut jni::JNIEnv, obj: jni::jobject) {
    with_vm(|vm| vm.deleted_locals.push(handle(obj)))
}

unsafe extern "system" fn is_same_object(_env: *mut jni::JNIEnv, a: jni::jobject, b: jni::jobject) -> jni::jboolean {
    jni::to_jboolean(a == b)
}

unsafe extern "system" fn get_object_class(_env: *mut jni::JNIEnv, obj: jni::jobject) -> jni::jclass {
    with_vm(|vm| vm.class_of(obj))
}

unsafe extern "system" fn new_object_a(
    _env: *mut jni::JNIEnv,
    cls: jni::jclass,
    method_id: jni::jmethodID,
    args: *const jni::jvalue,
) -> jni::jobject {
    let obj = with_vm(|vm| vm.new_instance(cls));
    invoke(obj, method_id, args);
    obj
}

unsafe extern "system" fn get_method_id(
    _env: *mut jni::JNIEnv,
    cls: jni::jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jni::jmethodID {
    let (name, sig) = (c_str(name), c_str(sig));
    with_vm(|vm| vm.find_method(cls, name, sig, false))
}

unsafe extern "system" fn get_static_method_id(
    _env: *mut jni::JNIEnv,
    cls: jni::jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jni::jmethodID {
    let (name, sig) = (c_str(name), c_str(sig));
    with_vm(|vm| vm.find_method(cls, name, sig, true))
}

unsafe extern "system" fn call_void_method_a(
    _env: *mut jni::JNIEnv,
    obj: jni::jobject,
    method_id: jni::jmethodID,
    args: *const jni::jvalue,
) {
    invoke(obj, method_id, args);
}

unsafe extern "system" fn call_int_method_a(
    _env: *mut jni::JNIEnv,
    obj: jni::jobject,
    method_id: jni::jmethodID,
    args: *const jni::jvalue,
) -> jni::jint {
    invoke(obj, method_id, args).i
}

unsafe extern "system" fn call_boolean_method_a(
    _env: *mut jni::JNIEnv,
    obj: jni::jobject,
    method_id: jni::jmethodID,
    args: *const jni::jvalue,
) -> jni::jboolean {
    invoke(obj, method_id, args).z
}

unsafe extern "system" fn call_object_method_a(
    _env: *mut jni::JNIEnv,
    obj: jni::jobject,
    method_id: jni::jmethodID,
    args: *const jni::jvalue,
) -> jni::jobject {
    invoke(obj, method_id, args).l
}

unsafe extern "system" fn get_field_id(
    _env: *mut jni::JNIEnv,
    cls: jni::jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jni::jfieldID {
    let (name, sig) = (c_str(name), c_str(sig));
    with_vm(|vm| vm.find_field(cls, name, sig, false))
}

unsafe extern "system" fn get_static_field_id(
    _env: *mut jni::JNIEnv,
    cls: jni::jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jni::jfieldID {
    let (name, sig) = (c_str(name), c_str(sig));
    with_vm(|vm| vm.find_field(cls, name, sig, true))
}

fn load(owner: jni::jobject, field_id: jni::jfieldID) -> jni::jvalue {
    with_vm(|vm| {
        vm.values
            .get(&(handle(owner), field_id as usize))
            .copied()
            .unwrap_or(jni::jvalue { j: 0 })
    })
}

fn store(owner: jni::jobject, field_id: jni::jfieldID, value: jni::jvalue) {
    with_vm(|vm| vm.values.insert((handle(owner), field_id as usize), value));
}

macro_rules! field_slots {
    ($($get:ident $set:ident $ty:ty, $member:ident;)*) => {
        $(
            unsafe extern "system" fn $get(
                _env: *mut jni::JNIEnv,
                owner: jni::jobject,
                field_id: jni::jfieldID,
            ) -> $ty {
                load(owner, field_id).$member
            }

            unsafe extern "system" fn $set(
                _env: *mut jni::JNIEnv,
                owner: jni::jobject,
                field_id: jni::jfieldID,
                value: $ty,
            ) {
                store(owner, field_id, jni::jvalue { $member: value })
            }
        )*
    };
}

// Static fields are keyed by the class handle, so one pair serves both.
field_slots! {
    get_object_field set_object_field jni::jobject, l;
    get_boolean_field set_boolean_field jni::jboolean, z;
    get_byte_field set_byte_field jni::jbyte, b;
    get_char_field set_char_field jni::jchar, c;
    get_short_field set_short_field jni::jshort, s;
    get_int_field set_int_field jni::jint, i;
    get_long_field set_long_field jni::jlong, j;
    get_float_field set_float_field jni::jfloat, f;
    get_double_field set_double_field jni::jdouble, d;
}

/// Decodes strictly: plain UTF-8 four-byte sequences and raw NULs never
/// reach a real VM intact, so they are rejected here.
unsafe extern "system" fn new_string_utf(_env: *mut jni::JNIEnv, utf: *const c_char) -> jni::jstring {
    let bytes = CStr::from_ptr(utf).to_bytes().to_vec();
    with_vm(|vm| {
        vm.utf_inputs.push(bytes.clone());
        match cesu8::from_java_cesu8(&bytes) {
            Ok(s) => vm.new_string(&s),
            Err(_) => ptr::null_mut(),
        }
    })
}

unsafe extern "system" fn get_string_length(_env: *mut jni::JNIEnv, s: jni::jstring) -> jni::jsize {
    with_vm(|vm| match vm.heap.get(&handle(s)) {
        Some(Value::Str(chars)) => chars.len() as jni::jsize,
        _ => 0,
    })
}

unsafe extern "system" fn get_string_chars(
    _env: *mut jni::JNIEnv,
    s: jni::jstring,
    _is_copy: *mut jni::jboolean,
) -> *const jni::jchar {
    with_vm(|vm| {
        vm.pinned_strings += 1;
        match vm.heap.get(&handle(s)) {
            Some(Value::Str(chars)) => chars.as_ptr(),
            _ => ptr::null(),
        }
    })
}

unsafe extern "system" fn release_string_chars(_env: *mut jni::JNIEnv, _s: jni::jstring, _chars: *const jni::jchar) {
    with_vm(|vm| vm.pinned_strings -= 1)
}

unsafe extern "system" fn get_string_utf_length_as_long(_env: *mut jni::JNIEnv, s: jni::jstring) -> jni::jlong {
    with_vm(|vm| vm.string(s).len() as jni::jlong)
}

unsafe extern "system" fn get_array_length(_env: *mut jni::JNIEnv, array: jni::jarray) -> jni::jsize {
    with_vm(|vm| match vm.heap.get(&handle(array)) {
        Some(Value::Ints(ints)) => ints.len() as jni::jsize,
        Some(Value::Bytes(bytes)) => bytes.len() as jni::jsize,
        Some(Value::Objects(objects)) => objects.len() as jni::jsize,
        _ => 0,
    })
}

unsafe extern "system" fn new_int_array(_env: *mut jni::JNIEnv, len: jni::jsize) -> jni::jintArray {
    with_vm(|vm| vm.alloc(Value::Ints(vec![0; len as usize])))
}

unsafe extern "system" fn get_int_array_region(
    _env: *mut jni::JNIEnv,
    array: jni::jintArray,
    start: jni::jsize,
    len: jni::jsize,
    buf: *mut jni::jint,
) {
    with_vm(|vm| {
        let ints = match vm.heap.get(&handle(array)) {
            Some(Value::Ints(ints)) => ints,
            _ => return,
        };
        let (start, len) = (start as usize, len as usize);
        if start + len > ints.len() {
            vm.throw("java/lang/ArrayIndexOutOfBoundsException");
            return;
        }
        ptr::copy_nonoverlapping(ints[start..].as_ptr(), buf, len);
    })
}

unsafe extern "system" fn set_int_array_region(
    _env: *mut jni::JNIEnv,
    array: jni::jintArray,
    start: jni::jsize,
    len: jni::jsize,
    buf: *const jni::jint,
) {
    with_vm(|vm| {
        let (start, len) = (start as usize, len as usize);
        let out_of_range = match vm.heap.get_mut(&handle(array)) {
            Some(Value::Ints(ints)) if start + len <= ints.len() => {
                ints[start..start + len].copy_from_slice(std::slice::from_raw_parts(buf, len));
                false
            }
            _ => true,
        };
        if out_of_range {
            vm.throw("java/lang/ArrayIndexOutOfBoundsException");
        }
    })
}

unsafe extern "system" fn new_byte_array(_env: *mut jni::JNIEnv, len: jni::jsize) -> jni::jbyteArray {
    with_vm(|vm| vm.alloc(Value::Bytes(vec![0; len as usize])))
}

unsafe extern "system" fn get_byte_array_region(
    _env: *mut jni::JNIEnv,
    array: jni::jbyteArray,
    start: jni::jsize,
    len: jni::jsize,
    buf: *mut jni::jbyte,
) {
    with_vm(|vm| {
        let bytes = match vm.heap.get(&handle(array)) {
            Some(Value::Bytes(bytes)) => bytes,
            _ => return,
        };
        let (start, len) = (start as usize, len as usize);
        if start + len > bytes.len() {
            vm.throw("java/lang/ArrayIndexOutOfBoundsException");
            return;
        }
        ptr::copy_nonoverlapping(bytes[start..].as_ptr(), buf, len);
    })
}

unsafe extern "system" fn set_byte_array_region(
    _env: *mut jni::JNIEnv,
    array: jni::jbyteArray,
    start: jni::jsize,
    len: jni::jsize,
    buf: *const jni::jbyte,
) {
    with_vm(|vm| {
        let (start, len) = (start as usize, len as usize);
        let out_of_range = match vm.heap.get_mut(&handle(array)) {
            Some(Value::Bytes(bytes)) if start + len <= bytes.len() => {
                bytes[start..start + len].copy_from_slice(std::slice::from_raw_parts(buf, len));
                false
            }
            _ => true,
        };
        if out_of_range {
            vm.throw("java/lang/ArrayIndexOutOfBoundsException");
        }
    })
}

unsafe extern "system" fn new_object_array(
    _env: *mut jni::JNIEnv,
    len: jni::jsize,
    _cls: jni::jclass,
    init: jni::jobject,
) -> jni::jobjectArray {
    with_vm(|vm| vm.alloc(Value::Objects(vec![init; len as usize])))
}

unsafe extern "system" fn get_object_array_element(
    _env: *mut jni::JNIEnv,
    array: jni::jobjectArray,
    index: jni::jsize,
) -> jni::jobject {
    with_vm(|vm| match vm.heap.get(&handle(array)) {
        Some(Value::Objects(objects)) => objects[index as usize],
        _ => ptr::null_mut(),
    })
}

unsafe extern "system" fn set_object_array_element(
    _env: *mut jni::JNIEnv,
    array: jni::jobjectArray,
    index: jni::jsize,
    value: jni::jobject,
) {
    with_vm(|vm| {
        if let Some(Value::Objects(objects)) = vm.heap.get_mut(&handle(array)) {
            objects[index as usize] = value;
        }
    })
}

unsafe extern "system" fn get_java_vm(_env: *mut jni::JNIEnv, out: *mut *mut jni::JavaVM) -> jni::jint {
    *out = with_vm(|vm| vm.vm);
    jni::JNI_OK
}

/// Copies every entry while the caller's table is still alive.
unsafe extern "system" fn register_natives(
    _env: *mut jni::JNIEnv,
    _cls: jni::jclass,
    methods: *const jni::JNINativeMethod,
    count: jni::jint,
) -> jni::jint {
    let entries: Vec<(String, String, usize)> = std::slice::from_raw_parts(methods, count as usize)
        .iter()
        .map(|m| {
            (
                c_str(m.name).to_owned(),
                c_str(m.signature).to_owned(),
                m.fnPtr as usize,
            )
        })
        .collect();
    with_vm(|vm| vm.natives.extend(entries));
    jni::JNI_OK
}

unsafe extern "system" fn unregister_natives(_env: *mut jni::JNIEnv, _cls: jni::jclass) -> jni::jint {
    with_vm(|vm| vm.natives.clear());
    jni::JNI_OK
}

unsafe extern "system" fn is_virtual_thread(_env: *mut jni::JNIEnv, _thread: jni::jobject) -> jni::jboolean {
    jni::JNI_FALSE
}

unsafe extern "system" fn get_module(_env: *mut jni::JNIEnv, _cls: jni::jclass) -> jni::jobject {
    with_vm(|vm| vm.define_class("java/lang/Module"))
}

fn env_table() -> jni::JNINativeInterface_ {
    let mut t = unsafe { std::mem::zeroed::<jni::JNINativeInterface_>() };
    t.GetVersion = Some(get_version);
    t.FindClass = Some(find_class);
    t.ThrowNew = Some(throw_new);
    t.ExceptionOccurred = Some(exception_occurred);
    t.ExceptionDescribe = Some(exception_describe);
    t.ExceptionClear = Some(exception_clear);
    t.ExceptionCheck = Some(exception_check);
    t.NewGlobalRef = Some(new_global_ref);
    t.DeleteGlobalRef = Some(delete_global_ref);
    t.NewLocalRef = Some(new_local_ref);
    t.DeleteLocalRef = Some(delete_local_ref);
    t.IsSameObject = Some(is_same_object);
    t.GetObjectClass = Some(get_object_class);
    t.NewObjectA = Some(new_object_a);
    t.GetMethodID = Some(get_method_id);
    t.GetStaticMethodID = Some(get_static_method_id);
    t.CallVoidMethodA = Some(call_void_method_a);
    t.CallIntMethodA = Some(call_int_method_a);
    t.CallBooleanMethodA = Some(call_boolean_method_a);
    t.CallObjectMethodA = Some(call_object_method_a);
    t.CallStaticVoidMethodA = Some(call_void_method_a);
    t.CallStaticIntMethodA = Some(call_int_method_a);
    t.CallStaticObjectMethodA = Some(call_object_method_a);
    t.GetFieldID = Some(get_field_id);
    t.GetStaticFieldID = Some(get_static_field_id);
    t.GetObjectField = Some(get_object_field);
    t.SetObjectField = Some(set_object_field);
    t.GetBooleanField = Some(get_boolean_field);
    t.SetBooleanField = Some(set_boolean_field);
    t.GetByteField = Some(get_byte_field);
    t.SetByteField = Some(set_byte_field);
    t.GetCharField = Some(get_char_field);
    t.SetCharField = Some(set_char_field);
    t.GetShortField = Some(get_short_field);
    t.SetShortField = Some(set_short_field);
    t.GetIntField = Some(get_int_field);
    t.SetIntField = Some(set_int_field);
    t.GetLongField = Some(get_long_field);
    t.SetLongField = Some(set_long_field);
    t.GetFloatField = Some(get_float_field);
    t.SetFloatField = Some(set_float_field);
    t.GetDoubleField = Some(get_double_field);
    t.SetDoubleField = Some(set_double_field);
    t.GetStaticObjectField = Some(get_object_field);
    t.SetStaticObjectField = Some(set_object_field);
    t.GetStaticBooleanField = Some(get_boolean_field);
    t.SetStaticBooleanField = Some(set_boolean_field);
    t.GetStaticIntField = Some(get_int_field);
    t.SetStaticIntField = Some(set_int_field);
    t.GetStaticLongField = Some(get_long_field);
    t.SetStaticLongField = Some(set_long_field);
    t.NewStringUTF = Some(new_string_utf);
    t.GetStringLength = Some(get_string_length);
    t.GetStringChars = Some(get_string_chars);
    t.ReleaseStringChars = Some(release_string_chars);
    t.GetStringUTFLengthAsLong = Some(get_string_utf_length_as_long);
    t.GetArrayLength = Some(get_array_length);
    t.NewByteArray = Some(new_byte_array);
    t.GetByteArrayRegion = Some(get_byte_array_region);
    t.SetByteArrayRegion = Some(set_byte_array_region);
    t.NewIntArray = Some(new_int_array);
    t.GetIntArrayRegion = Some(get_int_array_region);
    t.SetIntArrayRegion = Some(set_int_array_region);
    t.NewObjectArray = Some(new_object_array);
    t.GetObjectArrayElement = Some(get_object_array_element);
    t.SetObjectArrayElement = Some(set_object_array_element);
    t.RegisterNatives = Some(register_natives);
    t.UnregisterNatives = Some(unregister_natives);
    t.GetJavaVM = Some(get_java_vm);
    t.IsVirtualThread = Some(is_virtual_thread);
    t.GetModule = Some(get_module);
    t
}

// =============================================================================
// JavaVM slots
// =============================================================================

unsafe extern "system" fn destroy_java_vm(_vm: *mut jni::JavaVM) -> jni::jint {
    let _ = STATE.try_with(|state| {
        if let Some(vm) = state.borrow_mut().as_mut() {
            vm.destroys += 1;
        }
    });
    jni::JNI_OK
}

unsafe extern "system" fn get_env(_vm: *mut jni::JavaVM, penv: *mut *mut c_void, _version: jni::jint) -> jni::jint {
    with_vm(|vm| {
        if vm.attached {
            *penv = vm.env.cast();
            jni::JNI_OK
        } else {
            *penv = ptr::null_mut();
            jni::JNI_EDETACHED
        }
    })
}

unsafe extern "system" fn attach_current_thread(
    _vm: *mut jni::JavaVM,
    penv: *mut *mut c_void,
    args: *mut c_void,
) -> jni::jint {
    let args = &*(args as *const jni::JavaVMAttachArgs);
    let name = (!args.name.is_null()).then(|| c_str(args.name).to_owned());
    with_vm(|vm| {
        vm.attached = true;
        vm.attach_names.push(name);
        *penv = vm.env.cast();
        jni::JNI_OK
    })
}

/// Every `DetachCurrentThread`, by VM address. Survives the thread that made
/// the call.
static DETACHED: Mutex<Vec<usize>> = Mutex::new(Vec::new());

/// How often `DetachCurrentThread` was called on `vm`.
pub fn detach_count(vm: &Jni) -> usize {
    let detached = DETACHED.lock().unwrap();
    detached.iter().filter(|&&addr| addr == vm.raw() as usize).count()
}

unsafe extern "system" fn detach_current_thread(vm: *mut jni::JavaVM) -> jni::jint {
    DETACHED.lock().unwrap().push(vm as usize);
    // May run from a thread-local destructor after the state is gone.
    let _ = STATE.try_with(|state| {
        if let Some(vm) = state.borrow_mut().as_mut() {
            vm.attached = false;
            vm.detaches += 1;
        }
    });
    jni::JNI_OK
}

fn vm_table() -> jni::JNIInvokeInterface_ {
    let mut t = unsafe { std::mem::zeroed::<jni::JNIInvokeInterface_>() };
    t.DestroyJavaVM = Some(destroy_java_vm);
    t.AttachCurrentThread = Some(attach_current_thread);
    t.AttachCurrentThreadAsDaemon = Some(attach_current_thread);
    t.DetachCurrentThread = Some(detach_current_thread);
    t.GetEnv = Some(get_env);
    t
}
