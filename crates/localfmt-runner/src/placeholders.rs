//! Command template placeholders.
//!
//! An argument is replaced only when it is exactly one of the tokens below; placeholders
//! embedded in a longer argument are passed through untouched.

use localfmt_core::FormattingOptions;
use std::path::{Component, Path, PathBuf};

/// Replaced by the absolute path of the document.
pub const ABSOLUTE_FILE_PATH: &str = "$absoluteFilePath";
/// Replaced by the document path relative to the formatter's working directory.
pub const RELATIVE_FILE_PATH: &str = "$relativeFilePath";
/// Replaced by `true` or `false`.
pub const INSERT_SPACES: &str = "$insertSpaces";
/// Replaced by the tab size in decimal.
pub const TAB_SIZE: &str = "$tabSize";

/// Expand the placeholders of a command template.
///
/// `$relativeFilePath` falls back to the document path when there is no working directory.
pub fn substitute_placeholders(
    template: &[String],
    file_path: &Path,
    cwd: Option<&Path>,
    options: &FormattingOptions,
) -> Vec<String> {
    template
        .iter()
        .map(|arg| match arg.as_str() {
            ABSOLUTE_FILE_PATH => file_path.to_string_lossy().into_owned(),
            RELATIVE_FILE_PATH => match cwd {
                Some(cwd) => relative_path(cwd, file_path).to_string_lossy().into_owned(),
                None => file_path.to_string_lossy().into_owned(),
            },
            INSERT_SPACES => options.insert_spaces.to_string(),
            TAB_SIZE => options.tab_size.to_string(),
            _ => arg.clone(),
        })
        .collect()
}

/// Lexically normalize a path: drop `.` components and fold `..` into its parent.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn absolute(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&path)
}

/// The path that leads from the directory `base` to `target`.
///
/// Both paths are made absolute against the process working directory first. When they
/// share no root (e.g. different Windows drives) the absolute `target` is returned.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = absolute(base);
    let target = absolute(target);

    let base_components: Vec<_> = base.components().collect();
    let target_components: Vec<_> = target.components().collect();

    let common = base_components
        .iter()
        .zip(target_components.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target;
    }

    let mut out = PathBuf::new();
    for _ in common..base_components.len() {
        out.push("..");
    }
    for component in &target_components[common..] {
        out.push(component.as_os_str());
    }
    out
}
