// File: src/launcher.rs
//! Runs translated programs in the host interpreter.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const DEFAULT_PYTHON: &str = "python3";

/// JSON array holding the command that translates imported modules.
pub const MODULE_TRANSLATOR_ENV: &str = "PTBR_MODULE_TRANSLATOR";

/// Compiles the staged program under the user's script path, so tracebacks
/// point at their file, and runs it as a fresh `__main__`.
///
/// With a module translator configured, a finder goes to the front of
/// `sys.meta_path` (once per interpreter) and user `.py` modules are compiled
/// from `<command> translate <path>`. Standard library and installed
/// packages load as usual.
const BOOTSTRAP: &str = r#"import importlib.machinery, json, os, subprocess, sys, sysconfig, types
staged, script = sys.argv[1], sys.argv[2]

translator = os.environ.pop("PTBR_MODULE_TRANSLATOR", None)
if translator and not any(getattr(f, "ptbr_finder", False) for f in sys.meta_path):
    command = json.loads(translator)
    stdlib = getattr(sys, "stdlib_module_names", frozenset())
    library = tuple(
        os.path.join(os.path.realpath(p), "")
        for key, p in sysconfig.get_paths().items()
        if key in ("stdlib", "platstdlib", "purelib", "platlib")
    )

    class PtbrLoader(importlib.machinery.SourceFileLoader):
        def get_code(self, fullname):
            path = self.get_filename(fullname)
            done = subprocess.run(command + ["translate", path], capture_output=True)
            if done.returncode != 0:
                message = done.stderr.decode("utf-8", "replace").strip()
                raise ImportError(message or f"could not translate {path}", name=fullname, path=path)
            return compile(done.stdout.decode("utf-8"), path, "exec", dont_inherit=True)

    class PtbrFinder:
        ptbr_finder = True

        @classmethod
        def find_spec(cls, fullname, path=None, target=None):
            if fullname.partition(".")[0] in stdlib:
                return None
            spec = importlib.machinery.PathFinder.find_spec(fullname, path, target)
            if spec is None or not isinstance(spec.loader, importlib.machinery.SourceFileLoader):
                return None
            origin = os.path.realpath(spec.origin)
            parts = origin.split(os.sep)
            if origin.startswith(library) or "site-packages" in parts or "dist-packages" in parts:
                return None
            spec.loader = PtbrLoader(fullname, spec.origin)
            return spec

    sys.meta_path.insert(0, PtbrFinder)

with open(staged, encoding="utf-8") as f:
    code = compile(f.read(), script, "exec")
sys.argv = sys.argv[2:]
sys.path[0] = os.path.dirname(os.path.abspath(script))
module = types.ModuleType("__main__")
module.__file__ = script
sys.modules["__main__"] = module
exec(code, module.__dict__)
"#;

#[derive(Debug, Clone)]
pub struct Launcher {
    python: PathBuf,
    module_translator: Option<Vec<OsString>>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl Launcher {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self { python: python.into(), module_translator: None }
    }

    /// Translates user modules imported by the script with `command`, which
    /// is run as `command translate <path>` and must print the translation.
    pub fn with_module_translator(mut self, command: Vec<OsString>) -> Self {
        self.module_translator = Some(command);
        self
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Executes `translated` as if it were `script`, passing `args` through.
    /// Returns the interpreter's exit code; 1 when it was killed by a signal.
    pub fn run(&self, script: &Path, translated: &str, args: &[OsString]) -> Result<i32> {
        let mut staged = NamedTempFile::new()?;
        staged.write_all(translated.as_bytes())?;
        staged.flush()?;

        let mut command = Command::new(&self.python);
        command.arg("-c").arg(BOOTSTRAP).arg(staged.path()).arg(script).args(args);
        match &self.module_translator {
            Some(words) => {
                let words: Vec<_> = words.iter().map(|w| w.to_string_lossy()).collect();
                command.env(MODULE_TRANSLATOR_ENV, serde_json::to_string(&words)?);
            }
            None => {
                command.env_remove(MODULE_TRANSLATOR_ENV);
            }
        }

        info!(
            python = %self.python.display(),
            script = %script.display(),
            imports = self.module_translator.is_some(),
            "launching"
        );
        let status = command
            .status()
            .map_err(|source| Error::Interpreter { python: self.python.clone(), source })?;

        debug!(?status, "interpreter exited");
        Ok(status.code().unwrap_or(1))
    }
}
