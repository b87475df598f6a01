//! Host platform names used to pick per-platform formatter commands.

use std::fmt;

/// The platform a formatter command is resolved for.
///
/// Names follow [`std::env::consts::OS`] (`linux`, `macos`, `windows`, ...). Lookups also try
/// the Node.js spellings (`darwin`, `win32`) so configurations shared with Node-based editors
/// keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    name: String,
}

impl Platform {
    /// A platform with the given OS name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The platform this process runs on.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS)
    }

    /// The OS name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys to try, in order, in a per-platform command map (the wildcard is not included).
    pub fn lookup_keys(&self) -> Vec<&str> {
        let alias = match self.name.as_str() {
            "macos" => Some("darwin"),
            "darwin" => Some("macos"),
            "windows" => Some("win32"),
            "win32" => Some("windows"),
            _ => None,
        };
        std::iter::once(self.name.as_str()).chain(alias).collect()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keys() {
        assert_eq!(Platform::new("linux").lookup_keys(), vec!["linux"]);
        assert_eq!(Platform::new("macos").lookup_keys(), vec!["macos", "darwin"]);
        assert_eq!(Platform::new("win32").lookup_keys(), vec!["win32", "windows"]);
    }

    #[test]
    fn test_current_matches_std() {
        assert_eq!(Platform::current().name(), std::env::consts::OS);
    }
}
