use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Snapshot of environmental variables, which is safe to access on Windows: its
/// environmental variables are case-insensitive.
///
/// Every layout function reads the environment through an [`Env`], never through
/// [`std::env`] directly, so callers decide which variables are visible.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,

    // Whether `home_dir` may ask the OS when `$HOME` is missing.
    pub(crate) system_home: bool,
}

impl Env {
    /// Snapshot the environment of the current process.
    ///
    /// When neither `$HOME` nor `%USERPROFILE%` is usable, [`Env::home_dir`] falls back to
    /// [`std::env::home_dir`].
    pub fn new() -> Self {
        Self {
            system_home: true,
            ..Self::new_from(std::env::vars_os().collect())
        }
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    ///
    /// Nothing outside of `env` is consulted, including for the home directory.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            keys: env.clone(),
            normalised_keys: Env::normalize_map(env),
            system_home: false,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }
    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Reload environmental variables from `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        let normalised = Env::normalize_map(env.clone());
        self.keys = env;
        self.normalised_keys = normalised;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use dothome::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$XDG_CONFIG_HOME = {:?}", env.get_os("XDG_CONFIG_HOME"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get environmental variable pointed by `key` as a path, only if it is absolute.
    ///
    /// Empty and relative values are treated like missing ones.
    pub fn get_absolute_path(&self, key: impl AsRef<OsStr>) -> Option<PathBuf> {
        let key = key.as_ref();
        let value = self.get_os(key)?;
        if value.is_empty() {
            return None;
        }
        let path = Path::new(value);
        if !path.is_absolute() {
            tracing::debug!(?key, ?value, "ignoring relative path in environment");
            return None;
        }
        Some(path.to_path_buf())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
