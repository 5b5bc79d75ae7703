//! Starting a JVM inside a Rust process through the invocation API.
//!
//! Feature-gated behind `embed`, which pulls in `libloading` to open `libjvm`
//! at runtime.
//!
//! ```rust,ignore
//! let vm = JavaVmBuilder::new(jni::JNI_VERSION_1_8)
//!     .option("-Xcheck:jni")?
//!     .create()?;
//! let env = vm.jni().env()?;
//! let version = env.get_version()?;
//! ```

use std::ffi::{c_void, CString};
use std::path::{Path, PathBuf};
use std::ptr;

use crate::env::JniEnv;
use crate::error::{Error, Result};
use crate::sys::jni;
use crate::vm::Jni;

fn libjvm_filename() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "jvm.dll"
    }
    #[cfg(target_os = "macos")]
    {
        "libjvm.dylib"
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        "libjvm.so"
    }
}

/// Relative locations of `libjvm` below a JDK or JRE home, newest layout
/// first.
fn libjvm_candidates(java_home: &Path) -> Vec<PathBuf> {
    let filename = libjvm_filename();
    let arch = std::env::consts::ARCH;

    let mut rels = vec![
        format!("lib/server/{filename}"),
        format!("jre/lib/server/{filename}"),
        format!("lib/{arch}/server/{filename}"),
        format!("jre/lib/{arch}/server/{filename}"),
    ];
    if cfg!(target_os = "windows") {
        rels.push(format!("bin/server/{filename}"));
        rels.push(format!("jre/bin/server/{filename}"));
    }
    rels.into_iter().map(|rel| java_home.join(rel)).collect()
}

fn find_under(java_home: &Path) -> Result<PathBuf> {
    libjvm_candidates(java_home)
        .into_iter()
        .find(|path| path.exists())
        .ok_or_else(|| {
            Error::Locate(format!(
                "no {} under {}; set JVM_LIB_PATH explicitly",
                libjvm_filename(),
                java_home.display()
            ))
        })
}

/// Locate `libjvm` from `JVM_LIB_PATH`, falling back to `JAVA_HOME`.
pub fn find_libjvm() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os("JVM_LIB_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
        return Err(Error::Locate(format!(
            "JVM_LIB_PATH points to a missing file: {}",
            path.display()
        )));
    }
    match std::env::var_os("JAVA_HOME") {
        Some(java_home) => find_under(Path::new(&java_home)),
        None => Err(Error::Locate(
            "neither JVM_LIB_PATH nor JAVA_HOME is set".to_owned(),
        )),
    }
}

/// Options for [`EmbeddedVm`].
#[derive(Debug, Clone)]
pub struct JavaVmBuilder {
    version: jni::jint,
    options: Vec<CString>,
    ignore_unrecognized: bool,
}

impl Default for JavaVmBuilder {
    fn default() -> Self {
        JavaVmBuilder::new(jni::JNI_VERSION_1_8)
    }
}

impl JavaVmBuilder {
    pub fn new(version: jni::jint) -> Self {
        JavaVmBuilder {
            version,
            options: Vec::new(),
            ignore_unrecognized: false,
        }
    }

    /// Add a VM option such as `-Xmx512m` or `-Djava.class.path=app.jar`.
    pub fn option(mut self, opt: &str) -> Result<Self> {
        self.options.push(CString::new(opt)?);
        Ok(self)
    }

    pub fn options<I, S>(mut self, opts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for opt in opts {
            self.options.push(CString::new(opt.as_ref())?);
        }
        Ok(self)
    }

    pub fn ignore_unrecognized(mut self, value: bool) -> Self {
        self.ignore_unrecognized = value;
        self
    }

    /// Create the VM through an already resolved `JNI_CreateJavaVM`.
    ///
    /// # Safety
    ///
    /// `create` must be a valid `JNI_CreateJavaVM`, and the library providing
    /// it must stay loaded for the lifetime of the returned VM.
    pub unsafe fn create_with(self, create: jni::JNI_CreateJavaVM) -> Result<EmbeddedVm> {
        let mut raw_options: Vec<jni::JavaVMOption> = self
            .options
            .iter()
            .map(|opt| jni::JavaVMOption {
                optionString: opt.as_ptr() as *mut _,
                extraInfo: ptr::null_mut(),
            })
            .collect();
        let mut args = jni::JavaVMInitArgs {
            version: self.version,
            nOptions: raw_options.len() as jni::jint,
            options: if raw_options.is_empty() {
                ptr::null_mut()
            } else {
                raw_options.as_mut_ptr()
            },
            ignoreUnrecognized: jni::to_jboolean(self.ignore_unrecognized),
        };

        let mut vm: *mut jni::JavaVM = ptr::null_mut();
        let mut env: *mut c_void = ptr::null_mut();
        let res = create(&mut vm, &mut env, &mut args as *mut jni::JavaVMInitArgs as *mut c_void);
        status!("JNI_CreateJavaVM", res)?;
        let vm = non_null!("JNI_CreateJavaVM", vm)?;
        let env = non_null!("JNI_CreateJavaVM", env)?;
        log::info!(
            "created JVM (version {:#x}, {} options)",
            self.version,
            self.options.len()
        );

        Ok(EmbeddedVm {
            jni: Jni::from_raw(vm).with_version(self.version),
            creator_env: env.cast(),
            destroyed: false,
            _lib: None,
        })
    }

    /// Create the VM from the `libjvm` at `path`.
    pub fn create_from_library<P: AsRef<Path>>(self, path: P) -> Result<EmbeddedVm> {
        let path = path.as_ref();
        log::debug!("loading {}", path.display());
        let lib = unsafe { libloading::Library::new(path) }.map_err(|e| Error::Load(e.to_string()))?;
        let create: jni::JNI_CreateJavaVM = unsafe {
            *lib.get::<jni::JNI_CreateJavaVM>(b"JNI_CreateJavaVM\0")
                .map_err(|e| Error::Load(e.to_string()))?
        };
        let mut vm = unsafe { self.create_with(create)? };
        vm._lib = Some(lib);
        Ok(vm)
    }

    /// Create the VM from a `libjvm` found through [`find_libjvm`].
    pub fn create(self) -> Result<EmbeddedVm> {
        let path = find_libjvm()?;
        self.create_from_library(path)
    }

    /// Create the VM from the JDK at `java_home`.
    pub fn create_from_java_home<P: AsRef<Path>>(self, java_home: P) -> Result<EmbeddedVm> {
        let path = find_under(java_home.as_ref())?;
        self.create_from_library(path)
    }
}

/// A JVM started by this process. Destroyed on drop.
pub struct EmbeddedVm {
    jni: Jni,
    creator_env: *mut jni::JNIEnv,
    destroyed: bool,
    // Dropped after the VM is destroyed.
    _lib: Option<libloading::Library>,
}

impl EmbeddedVm {
    /// A handle usable from any thread.
    pub fn jni(&self) -> Jni {
        self.jni
    }

    /// The environment of the thread that created the VM.
    ///
    /// # Safety
    ///
    /// Only valid on the creating thread.
    pub unsafe fn creator_env(&self) -> JniEnv {
        JniEnv::from_raw(self.creator_env)
    }

    /// Shut the VM down, waiting for non-daemon threads.
    pub fn destroy(mut self) -> Result<()> {
        self.destroyed = true;
        unsafe { self.jni.destroy() }
    }
}

impl Drop for EmbeddedVm {
    fn drop(&mut self) {
        if self.destroyed {
            return;
        }
        if let Err(err) = unsafe { self.jni.destroy() } {
            log::error!("failed to destroy JVM: {err}");
        }
    }
}

impl std::fmt::Debug for EmbeddedVm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedVm")
            .field("jni", &self.jni)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
