mod common;

use common::{install, with_vm};
use jni_bridge::sys::jni;
use jni_bridge::{Error, JavaCallback, JniObject};

fn listener() -> jni::jobject {
    with_vm(|vm| {
        let cls = vm.define_class("com/example/Listener");
        vm.define_method(cls, "onProgress", "(FLjava/lang/String;)V", false, |vm, _this, args| {
            let label = vm.string(unsafe { args[1].l });
            vm.calls.push(format!("{:.1} {label}", unsafe { args[0].f }));
            jni::jvalue { j: 0 }
        });
        vm.define_method(cls, "size", "()I", false, |_vm, _this, _args| jni::jvalue { i: 0 });
        vm.new_instance(cls)
    })
}

#[test]
fn callback_calls_void_method() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let target = listener();

    let callback = JavaCallback::new(&env, target, "onProgress", "(FLjava/lang/String;)V").unwrap();
    assert_eq!(callback.param_count(), 2);
    assert_eq!(with_vm(|vm| vm.globals.len()), 1);

    callback.call(&[&0.5f32, &"copying"]).unwrap();
    assert_eq!(
        with_vm(|vm| vm.calls.last().cloned()),
        Some("0.5 copying".to_owned())
    );

    drop(callback);
    assert!(with_vm(|vm| vm.globals.is_empty()));
}

#[test]
fn callback_apply_takes_raw_values() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let target = listener();
    let label = env.new_string_utf("raw").unwrap();

    let callback = JavaCallback::new(&env, target, "onProgress", "(FLjava/lang/String;)V").unwrap();
    callback
        .apply(&[jni::jvalue { f: 1.0 }, jni::jvalue { l: label }])
        .unwrap();
    assert_eq!(with_vm(|vm| vm.calls.last().cloned()), Some("1.0 raw".to_owned()));
}

#[test]
fn callback_rejects_wrong_argument_count() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let target = listener();
    let callback = JavaCallback::new(&env, target, "onProgress", "(FLjava/lang/String;)V").unwrap();

    match callback.call(&[&0.5f32]) {
        Err(Error::InvalidParameters { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(callback.apply(&[]), Err(Error::InvalidParameters { .. })));
    assert!(with_vm(|vm| vm.calls.is_empty()));
}

#[test]
fn callback_requires_void_methods() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let target = listener();

    assert!(matches!(
        JavaCallback::new(&env, target, "size", "()I"),
        Err(Error::IncorrectMethodSignature(sig)) if sig == "()I"
    ));
    assert!(matches!(
        JavaCallback::new(&env, target, "size", "not a descriptor"),
        Err(Error::IncorrectMethodSignature(_))
    ));
}

#[test]
fn callback_to_missing_method() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    let target = listener();

    assert!(matches!(
        JavaCallback::new(&env, target, "onDone", "()V"),
        Err(Error::InvalidMethod(name)) if name == "onDone()V"
    ));
    assert!(with_vm(|vm| vm.pending.is_none()));
    assert!(with_vm(|vm| vm.globals.is_empty()));
}

#[test]
fn object_constructs_and_calls() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    with_vm(|vm| {
        let cls = vm.define_class("com/example/Player");
        vm.define_method(cls, "<init>", "(Ljava/lang/String;)V", false, |vm, _this, args| {
            let name = vm.string(unsafe { args[0].l });
            vm.calls.push(format!("new {name}"));
            jni::jvalue { j: 0 }
        });
        vm.define_method(cls, "play", "()V", false, |_vm, _this, _args| jni::jvalue { j: 0 });
        vm.define_method(cls, "volume", "()I", false, |_vm, _this, _args| jni::jvalue { i: 11 });
        vm.define_method(cls, "reset", "()V", true, |_vm, _this, _args| jni::jvalue { j: 0 });
    });

    let player = JniObject::new(&env, "com.example.Player", &[&"tape"]).unwrap();
    assert_eq!(player.class_name(), "com/example/Player");
    assert_eq!(with_vm(|vm| vm.globals.len()), 2);

    player.call(&env, "play", &[]).unwrap();
    assert_eq!(player.call_returning::<i32>(&env, "volume", &[]).unwrap(), 11);
    player.call_static(&env, "reset", &[]).unwrap();
    assert_eq!(
        with_vm(|vm| vm.calls.clone()),
        vec!["<init>", "new tape", "play", "volume", "reset"]
    );

    drop(player);
    assert!(with_vm(|vm| vm.globals.is_empty()));
}

#[test]
fn object_with_unknown_class() {
    let (env, _) = install(jni::JNI_VERSION_1_8);
    assert!(matches!(
        JniObject::new(&env, "com.example.Nope", &[]),
        Err(Error::JavaException)
    ));
}
