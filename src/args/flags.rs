//! Tool-selection flag lookup
//!
//! These flags belong to the build tools themselves. They are read here to
//! steer resolution but stay in the forwarded argument list.

use std::path::{Path, PathBuf};

use crate::resolver::probe::absolutize;

/// Gradle `-p`
pub const PROJECT_DIR: &[&str] = &["-p", "--project-dir"];
/// Gradle `-b`
pub const BUILD_FILE: &[&str] = &["-b", "--build-file"];
/// Gradle `-c`
pub const SETTINGS_FILE: &[&str] = &["-c", "--settings-file"];
/// Maven `-f`
pub const POM_FILE: &[&str] = &["-f", "--file"];

const SELECTION_FLAGS: &[&[&str]] = &[PROJECT_DIR, BUILD_FILE, SETTINGS_FILE, POM_FILE];

/// Value of the first occurrence of any of `names`
///
/// Accepts `-b value`, `--build-file value` and `--build-file=value`. A flag
/// in last position with no value is ignored.
pub fn flag_value(args: &[String], names: &[&str]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if names.contains(&arg.as_str()) {
            match iter.next() {
                Some(value) => return Some(value.clone()),
                None => return None,
            }
        }
        if let Some((flag, value)) = arg.split_once('=') {
            if flag.starts_with("--") && names.contains(&flag) {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Flag value turned into an absolute, normalised path
pub fn explicit_path(args: &[String], names: &[&str], base: &Path) -> Option<PathBuf> {
    flag_value(args, names).map(|value| absolutize(base, value))
}

/// Whether `arg` is a selection flag whose value is the next argument
pub fn takes_value(arg: &str) -> bool {
    SELECTION_FLAGS.iter().any(|names| names.contains(&arg))
}
