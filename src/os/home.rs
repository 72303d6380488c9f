//! Home directory lookup.
//!
//! The environment is asked first (`%USERPROFILE%` on Windows, `$HOME` elsewhere). Only an
//! [`Env`] snapshotted from the live process falls back to [`std::env::home_dir`].

use std::path::PathBuf;

use crate::os::env::Env;

#[cfg(windows)]
const HOME_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VAR: &str = "HOME";

impl Env {
    /// Home directory of the current user, or [`None`] when it cannot be determined.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use std::ffi::OsString;
    /// use dothome::os::env::Env;
    ///
    /// let env = Env::new_from(HashMap::from([
    ///     (OsString::from("HOME"), OsString::from("/home/user")),
    ///     (OsString::from("USERPROFILE"), OsString::from("/home/user")),
    /// ]));
    /// assert_eq!(env.home_dir(), Some("/home/user".into()));
    /// ```
    pub fn home_dir(&self) -> Option<PathBuf> {
        if let Some(home) = self.get_os(HOME_VAR).filter(|home| !home.is_empty()) {
            return Some(PathBuf::from(home));
        }
        if !self.system_home {
            return None;
        }
        let home = std::env::home_dir().filter(|home| !home.as_os_str().is_empty());
        if home.is_none() {
            tracing::debug!("OS does not know the home directory of the current user");
        }
        home
    }
}
