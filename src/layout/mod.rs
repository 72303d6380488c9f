//! Standard per-user directories.
//!
//! A [`Layout`] holds the home, config, data and cache directories of the current user,
//! computed for one of the supported conventions ([`Platform`]). The [`native_layout`] and
//! [`cli_layout`] entry points pick the convention of the host, the latter preferring XDG
//! paths on Apple systems so CLI tools keep their files where Unix users look for them.
//!
//! ```rust,no_run
//! # use dothome::layout::{self, AppConfig, LayoutError};
//! # use dothome::os::env::Env;
//! # fn foo() -> Result<(), LayoutError> {
//! let env = Env::new();
//! let app = AppConfig::new("My App").with_apple_bundle_id("com.myorg.MyApp");
//!
//! let layout = layout::cli_app_layout(&env, &app)?;
//! // e.g. `/home/user/.config/my-app`
//! println!("{}", layout.config_dir.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::os::env::Env;

pub mod apple;
pub mod windows;
pub mod xdg;

/// Directories of the current user for one convention.
///
/// Every path is non-empty. Overrides taken from the environment are only accepted when
/// absolute, the remaining paths are joined onto [`Layout::home`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Home directory of the current user.
    pub home: PathBuf,
    /// Directory for configuration files.
    pub config_dir: PathBuf,
    /// Directory for persistent application data.
    pub data_dir: PathBuf,
    /// Directory for disposable files that can be regenerated.
    pub cache_dir: PathBuf,
}

/// Identity of an application, used to derive its own directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppConfig {
    /// Human readable name of the application.
    pub name: String,
    /// Organization owning the application. Only used by [`Platform::Windows`].
    pub org_name: Option<String>,
    /// Reverse-DNS bundle identifier, like `com.myorg.MyApp`. Only used by
    /// [`Platform::Apple`], which falls back to [`AppConfig::name`] when it is missing.
    pub apple_bundle_id: Option<String>,
}

/// Errors encountered when computing a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LayoutError {
    /// Neither the environment nor the OS knows the home directory of the current user.
    #[error("cannot determine the home directory of the current user")]
    HomeDirectoryUnavailable,
}

/// Directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `~/Library/...`, see [`apple`].
    Apple,
    /// `%AppData%` and `%LocalAppData%`, see [`windows`].
    Windows,
    /// XDG Base Directory Specification, see [`xdg`].
    Xdg,
}

/// Which convention the host should follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Strict convention of the host.
    Native,
    /// Like [`Mode::Native`], except Apple hosts use [`Platform::Xdg`].
    Cli,
}

impl AppConfig {
    /// Create [`AppConfig`] without organization and bundle identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_name: None,
            apple_bundle_id: None,
        }
    }

    /// Set [`AppConfig::org_name`].
    pub fn with_org_name(mut self, org_name: impl Into<String>) -> Self {
        self.org_name = Some(org_name.into());
        self
    }

    /// Set [`AppConfig::apple_bundle_id`].
    pub fn with_apple_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.apple_bundle_id = Some(bundle_id.into());
        self
    }

    /// Bundle identifier if present and non-empty, otherwise the name with its casing kept.
    pub fn apple_identifier(&self) -> &str {
        self.apple_bundle_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.name)
    }

    /// Lowercased name with spaces replaced by hyphens: `My App` becomes `my-app`.
    ///
    /// Characters are lowercased one by one, without context rules like the Greek final sigma,
    /// so a name always maps to the same slug.
    pub fn xdg_slug(&self) -> String {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == ' ' { '-' } else { c })
            .collect()
    }
}

impl Platform {
    /// Convention of the platform this crate was built for.
    pub const fn host() -> Self {
        if cfg!(target_vendor = "apple") {
            Platform::Apple
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Xdg
        }
    }

    /// Convention used on the host for `mode`.
    pub const fn for_mode(mode: Mode) -> Self {
        Self::host().with_mode(mode)
    }

    /// Convention used by `self` hosts in `mode`.
    pub const fn with_mode(self, mode: Mode) -> Self {
        match (self, mode) {
            (Platform::Apple, Mode::Cli) => Platform::Xdg,
            (platform, _) => platform,
        }
    }

    /// Base directories of this convention.
    ///
    /// # Errors
    /// [`LayoutError::HomeDirectoryUnavailable`] if [`Env::home_dir`] returns [`None`].
    pub fn layout(self, env: &Env) -> Result<Layout, LayoutError> {
        let Some(home) = env.home_dir() else {
            tracing::debug!(platform = ?self, "home directory is unavailable");
            return Err(LayoutError::HomeDirectoryUnavailable);
        };
        let layout = match self {
            Platform::Apple => apple::layout(home),
            Platform::Windows => windows::layout(env, home),
            Platform::Xdg => xdg::layout(env, home),
        };
        tracing::trace!(platform = ?self, ?layout, "resolved layout");
        Ok(layout)
    }

    /// Directories of `app` under this convention.
    ///
    /// # Errors
    /// Same as [`Platform::layout`].
    pub fn app_layout(self, env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
        self.layout(env).map(|layout| layout.scoped(self, app))
    }

    fn app_suffix(self, app: &AppConfig) -> PathBuf {
        match self {
            Platform::Apple => apple::app_suffix(app),
            Platform::Windows => windows::app_suffix(app),
            Platform::Xdg => xdg::app_suffix(app),
        }
    }
}

impl Layout {
    /// Append the directory of `app` under `platform` to every directory except
    /// [`Layout::home`].
    pub fn scoped(&self, platform: Platform, app: &AppConfig) -> Layout {
        let suffix = platform.app_suffix(app);
        let scope = |base: &Path| {
            if suffix.as_os_str().is_empty() {
                base.to_path_buf()
            } else {
                base.join(&suffix)
            }
        };
        Layout {
            home: self.home.clone(),
            config_dir: scope(&self.config_dir),
            data_dir: scope(&self.data_dir),
            cache_dir: scope(&self.cache_dir),
        }
    }
}

/// Push `segments` onto an empty path, skipping empty ones.
///
/// Leading separators are stripped so that a segment never replaces what is already there.
pub(crate) fn suffix<'a>(segments: impl IntoIterator<Item = &'a str>) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in segments {
        let segment = segment.trim_start_matches(std::path::is_separator);
        if !segment.is_empty() {
            path.push(segment);
        }
    }
    path
}

/// Base directories of the host convention.
pub fn native_layout(env: &Env) -> Result<Layout, LayoutError> {
    Platform::for_mode(Mode::Native).layout(env)
}

/// Base directories suitable for CLI applications.
///
/// Same as [`native_layout`], except Apple hosts use [`xdg_layout`].
pub fn cli_layout(env: &Env) -> Result<Layout, LayoutError> {
    Platform::for_mode(Mode::Cli).layout(env)
}

/// Directories of `app` under the host convention.
pub fn native_app_layout(env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
    Platform::for_mode(Mode::Native).app_layout(env, app)
}

/// Directories of `app` suitable for CLI applications.
///
/// Same as [`native_app_layout`], except Apple hosts use [`xdg_app_layout`].
pub fn cli_app_layout(env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
    Platform::for_mode(Mode::Cli).app_layout(env, app)
}

/// Base directories of [`Platform::Apple`], whatever the host.
pub fn apple_layout(env: &Env) -> Result<Layout, LayoutError> {
    Platform::Apple.layout(env)
}

/// Directories of `app` under [`Platform::Apple`], whatever the host.
pub fn apple_app_layout(env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
    Platform::Apple.app_layout(env, app)
}

/// Base directories of [`Platform::Windows`], whatever the host.
pub fn windows_layout(env: &Env) -> Result<Layout, LayoutError> {
    Platform::Windows.layout(env)
}

/// Directories of `app` under [`Platform::Windows`], whatever the host.
pub fn windows_app_layout(env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
    Platform::Windows.app_layout(env, app)
}

/// Base directories of [`Platform::Xdg`], whatever the host.
pub fn xdg_layout(env: &Env) -> Result<Layout, LayoutError> {
    Platform::Xdg.layout(env)
}

/// Directories of `app` under [`Platform::Xdg`], whatever the host.
pub fn xdg_app_layout(env: &Env, app: &AppConfig) -> Result<Layout, LayoutError> {
    Platform::Xdg.app_layout(env, app)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use claim::{assert_err, assert_ok, assert_ok_eq};
    use std::ffi::OsString;

    #[cfg(windows)]
    pub(crate) const HOME_VAR: &str = "USERPROFILE";
    #[cfg(not(windows))]
    pub(crate) const HOME_VAR: &str = "HOME";

    pub(crate) fn env(vars: &[(&str, &str)]) -> Env {
        Env::new_from(
            vars.iter()
                .map(|(k, v)| (OsString::from(k), OsString::from(v)))
                .collect(),
        )
    }

    pub(crate) fn test_app() -> AppConfig {
        AppConfig::new("My App")
            .with_org_name("MyOrg")
            .with_apple_bundle_id("com.myorg.MyApp")
    }

    #[test]
    fn apple_identifier_prefers_bundle_id() {
        assert_eq!(test_app().apple_identifier(), "com.myorg.MyApp");
        assert_eq!(AppConfig::new("My App").apple_identifier(), "My App");
        assert_eq!(
            AppConfig::new("My App")
                .with_apple_bundle_id("")
                .apple_identifier(),
            "My App"
        );
    }

    #[test]
    fn xdg_slug_lowercases_and_hyphenates() {
        assert_eq!(AppConfig::new("My App").xdg_slug(), "my-app");
        assert_eq!(AppConfig::new("My  Cool_App 2").xdg_slug(), "my--cool_app-2");
        assert_eq!(AppConfig::new("ÉCLAIR").xdg_slug(), "éclair");
        assert_eq!(AppConfig::new("tool.v2").xdg_slug(), "tool.v2");
    }

    #[test]
    fn xdg_slug_lowercases_without_context() {
        assert_eq!(AppConfig::new("ΟΔΟΣ APP").xdg_slug(), "οδοσ-app");
        assert_eq!(AppConfig::new("ΣΑΣ").xdg_slug(), "σασ");
    }

    #[test]
    fn cli_mode_swaps_apple_for_xdg() {
        assert_eq!(Platform::Apple.with_mode(Mode::Native), Platform::Apple);
        assert_eq!(Platform::Apple.with_mode(Mode::Cli), Platform::Xdg);
        assert_eq!(Platform::Windows.with_mode(Mode::Cli), Platform::Windows);
        assert_eq!(Platform::Xdg.with_mode(Mode::Cli), Platform::Xdg);
        assert_eq!(Platform::Xdg.with_mode(Mode::Native), Platform::Xdg);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_is_xdg_on_linux() {
        assert_eq!(Platform::host(), Platform::Xdg);
        assert_eq!(Platform::for_mode(Mode::Native), Platform::Xdg);
        assert_eq!(Platform::for_mode(Mode::Cli), Platform::Xdg);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn host_is_apple_on_macos() {
        assert_eq!(Platform::for_mode(Mode::Native), Platform::Apple);
        assert_eq!(Platform::for_mode(Mode::Cli), Platform::Xdg);
    }

    #[cfg(windows)]
    #[test]
    fn host_is_windows_on_windows() {
        assert_eq!(Platform::for_mode(Mode::Native), Platform::Windows);
        assert_eq!(Platform::for_mode(Mode::Cli), Platform::Windows);
    }

    #[test]
    fn suffix_skips_empty_segments() {
        assert_eq!(suffix(["", "My App"]), PathBuf::from("My App"));
        assert_eq!(suffix(["MyOrg", "My App"]), Path::new("MyOrg").join("My App"));
        assert_eq!(suffix([""]), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn suffix_never_escapes_base() {
        assert_eq!(suffix(["/etc"]), PathBuf::from("etc"));
        let base = Layout {
            home: "/home/user".into(),
            config_dir: "/home/user/.config".into(),
            data_dir: "/home/user/.local/share".into(),
            cache_dir: "/home/user/.cache".into(),
        };
        let scoped = base.scoped(Platform::Apple, &AppConfig::new("/etc"));
        assert_eq!(scoped.config_dir, PathBuf::from("/home/user/.config/etc"));
    }

    #[test]
    fn empty_name_keeps_base_directories() {
        let env = env(&[(HOME_VAR, "/home/user")]);
        let base = assert_ok!(xdg_layout(&env));
        assert_ok_eq!(xdg_app_layout(&env, &AppConfig::new("")), base);
    }

    #[test]
    fn missing_home_fails_every_entry_point() {
        let env = env(&[("XDG_CONFIG_HOME", "/srv/config"), ("AppData", "/srv/roaming")]);
        let app = test_app();
        let unavailable = LayoutError::HomeDirectoryUnavailable;

        assert_eq!(assert_err!(native_layout(&env)), unavailable);
        assert_eq!(assert_err!(cli_layout(&env)), unavailable);
        assert_eq!(assert_err!(native_app_layout(&env, &app)), unavailable);
        assert_eq!(assert_err!(cli_app_layout(&env, &app)), unavailable);
        assert_eq!(assert_err!(apple_layout(&env)), unavailable);
        assert_eq!(assert_err!(apple_app_layout(&env, &app)), unavailable);
        assert_eq!(assert_err!(windows_layout(&env)), unavailable);
        assert_eq!(assert_err!(windows_app_layout(&env, &app)), unavailable);
        assert_eq!(assert_err!(xdg_layout(&env)), unavailable);
        assert_eq!(assert_err!(xdg_app_layout(&env, &app)), unavailable);
    }

    #[test]
    fn home_is_reported_verbatim() {
        let env = env(&[(HOME_VAR, "/home/user")]);
        for platform in [Platform::Apple, Platform::Windows, Platform::Xdg] {
            let layout = assert_ok!(platform.app_layout(&env, &test_app()));
            assert_eq!(layout.home, PathBuf::from("/home/user"));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let env = env(&[(HOME_VAR, "/home/user"), ("XDG_CACHE_HOME", "relative")]);
        for platform in [Platform::Apple, Platform::Windows, Platform::Xdg] {
            let first = assert_ok!(platform.app_layout(&env, &test_app()));
            let second = assert_ok!(platform.app_layout(&env, &test_app()));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn native_and_cli_follow_host_platform() {
        let env = env(&[(HOME_VAR, "/home/user")]);
        let app = test_app();
        assert_ok_eq!(
            native_app_layout(&env, &app),
            assert_ok!(Platform::for_mode(Mode::Native).app_layout(&env, &app))
        );
        assert_ok_eq!(
            cli_layout(&env),
            assert_ok!(Platform::for_mode(Mode::Cli).layout(&env))
        );
    }

    #[test]
    fn layout_directories_can_be_created() {
        let tmp = tempfile::tempdir().expect("needed for tests");
        let home = tmp.path().to_str().expect("temporary dir is UTF-8");
        let env = env(&[(HOME_VAR, home)]);

        for platform in [Platform::Apple, Platform::Windows, Platform::Xdg] {
            let layout = assert_ok!(platform.app_layout(&env, &test_app()));
            for dir in [&layout.config_dir, &layout.data_dir, &layout.cache_dir] {
                assert!(dir.is_absolute());
                assert!(dir.starts_with(tmp.path()));
                assert_ok!(std::fs::create_dir_all(dir));
                assert!(dir.is_dir());
            }
        }
    }
}
