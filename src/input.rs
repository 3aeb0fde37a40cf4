//! Locating and loading puzzle input files.
//!
//! Inputs are stored as `<root>/<year>/aoc-<year>-d<DD>.txt`. The root defaults to
//! `inputs` in the working directory and can be overridden with `AOC_INPUTS`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    root: PathBuf,
}

impl Inputs {
    pub const ENV_VAR: &'static str = "AOC_INPUTS";
    pub const DEFAULT_ROOT: &'static str = "inputs";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        match env::var_os(Self::ENV_VAR) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("aoc-{}-d{:02}.txt", year, day))
    }

    pub fn load(&self, year: u16, day: u8) -> Result<String> {
        let path = self.path(year, day);
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read puzzle input {}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded puzzle input");
        Ok(normalize(text))
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

fn normalize(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Loads the input for one day using the environment-configured root.
pub fn load(year: u16, day: u8) -> Result<String> {
    Inputs::from_env().load(year, day)
}

#[test]
fn test_input_path() {
    let inputs = Inputs::new("data");
    assert_eq!(inputs.path(2020, 3), Path::new("data/2020/aoc-2020-d03.txt"));
    assert_eq!(inputs.path(2023, 11), Path::new("data/2023/aoc-2023-d11.txt"));
    assert_eq!(Inputs::default().root(), Path::new("inputs"));
}

#[test]
fn test_input_load_normalizes_line_endings() {
    let root = env::temp_dir().join(format!("aoc-inputs-{}", std::process::id()));
    let inputs = Inputs::new(&root);
    let path = inputs.path(2021, 1);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "199\r\n200\r\n").unwrap();
    assert_eq!(inputs.load(2021, 1).unwrap(), "199\n200\n");
    let err = inputs.load(2021, 2).unwrap_err();
    assert!(format!("{}", err).contains("aoc-2021-d02.txt"));
    fs::remove_dir_all(&root).unwrap();
}
