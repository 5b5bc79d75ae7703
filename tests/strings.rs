mod common;

use common::{install, with_vm};
use jni_bridge::sys::jni;
use jni_bridge::Error;

#[test]
fn string_contents_round_trip_through_the_vm() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let s = env.new_string_utf("grüße, 世界").unwrap();

    assert_eq!(with_vm(|vm| vm.string(s)), "grüße, 世界");
    assert_eq!(env.get_string_length(s).unwrap(), 9);
    assert_eq!(env.get_string(s).unwrap(), "grüße, 世界");
    assert_eq!(with_vm(|vm| vm.pinned_strings), 0);
}

#[test]
fn new_string_utf_sends_modified_utf8() {
    let (env, _) = install(jni::JNI_VERSION_1_8);

    let emoji = env.new_string_utf("a\u{1F600}").unwrap();
    // One surrogate pair, three bytes per half.
    assert_eq!(
        with_vm(|vm| vm.utf_inputs[0].clone()),
        [0x61, 0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80]
    );
    assert_eq!(env.get_string_length(emoji).unwrap(), 3);
    assert_eq!(env.get_string(emoji).unwrap(), "a\u{1F600}");

    let nul = env.new_string_utf("a\0b").unwrap();
    assert_eq!(with_vm(|vm| vm.utf_inputs[1].clone()), [b'a', 0xc0, 0x80, b'b']);
    assert_eq!(env.get_string(nul).unwrap(), "a\0b");
}

#[test]
fn string_arguments_use_modified_utf8() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let cls = with_vm(|vm| {
        let cls = vm.define_class("com/example/Echo");
        vm.define_method(cls, "echo", "(Ljava/lang/String;)Ljava/lang/String;", true, |_vm, _cls, args| {
            jni::jvalue { l: unsafe { args[0].l } }
        });
        cls
    });

    let echoed: String = env
        .call_static_returning("echo", cls, &[&"x\u{1F600}\0y"])
        .unwrap();
    assert_eq!(echoed, "x\u{1F600}\0y");
}

#[test]
fn string_chars_guard_releases() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let s = with_vm(|vm| vm.new_string("abc"));
    {
        let chars = env.get_string_chars(s).unwrap();
        assert_eq!(chars.chars(), &[b'a' as u16, b'b' as u16, b'c' as u16]);
        assert_eq!(with_vm(|vm| vm.pinned_strings), 1);
    }
    assert_eq!(with_vm(|vm| vm.pinned_strings), 0);
}

#[test]
fn null_string_is_an_error() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    assert!(matches!(
        env.get_string(std::ptr::null_mut()),
        Err(Error::NullResult(_))
    ));
}

#[test]
fn string_arrays_map_null_to_empty() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let array = with_vm(|vm| vm.new_string_array(&[Some("one"), None, Some("three")]));

    assert_eq!(env.get_strings(array).unwrap(), vec!["one", "", "three"]);
    // Each non-null element was a fresh local reference.
    assert_eq!(with_vm(|vm| vm.deleted_locals.len()), 2);
}

#[test]
fn utf_length_as_long_needs_jni_24() {
    let (env, _) = install(jni::JNI_VERSION_21);
    let s = env.new_string_utf("abc").unwrap();
    assert!(matches!(
        env.get_string_utf_length_as_long(s),
        Err(Error::UnsupportedVersion { .. })
    ));

    let (env, _) = install(jni::JNI_VERSION_24);
    let s = env.new_string_utf("abc").unwrap();
    assert_eq!(env.get_string_utf_length_as_long(s).unwrap(), 3);
}
