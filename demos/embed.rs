//! Example: start a JVM inside a Rust process and call into it.
//!
//! Run with:
//!   JAVA_HOME=/path/to/jdk \
//!   cargo run --example embed --features embed

use std::error::Error;

use jni_bridge::embed::find_libjvm;
use jni_bridge::prelude::*;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let builder = JavaVmBuilder::new(jni::JNI_VERSION_1_8)
        .option("-Xms64m")?
        .option("-Xmx256m")?
        .ignore_unrecognized(true);

    let libjvm = find_libjvm()?;
    let vm = builder.create_from_library(libjvm)?;

    let env = unsafe { vm.creator_env() };
    let integer = LocalRef::new(&env, env.find_class("java/lang/Integer")?);
    let parsed: i32 = env.call_static_returning("parseInt", integer.get(), &[&"42"])?;
    let hex: String = env.call_static_returning("toHexString", integer.get(), &[&parsed])?;
    println!("parseInt(\"42\") = {parsed}, toHexString = {hex}");

    // Any thread can reach the VM through its handle.
    let jni = vm.jni();
    std::thread::spawn(move || -> jni_bridge::Result<()> {
        let env = jni.env()?;
        let system = LocalRef::new(&env, env.find_class("java/lang/System")?);
        let now: i64 = env.call_static_returning("currentTimeMillis", system.get(), &[])?;
        println!("currentTimeMillis = {now}");
        Ok(())
    })
    .join()
    .map_err(|_| "worker panicked")??;

    drop(integer);
    vm.destroy()?;
    Ok(())
}
