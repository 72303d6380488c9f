//! XDG Base Directory Specification support.
//!
//! Used on Unix-like systems, and on Apple systems in [`Mode::Cli`](super::Mode::Cli).
//!
//! | directory | variable           | fallback              |
//! |-----------|--------------------|-----------------------|
//! | config    | `$XDG_CONFIG_HOME` | `$HOME/.config`       |
//! | data      | `$XDG_DATA_HOME`   | `$HOME/.local/share`  |
//! | cache     | `$XDG_CACHE_HOME`  | `$HOME/.cache`        |
//!
//! Variables are honored only when they hold an absolute path. Application directories
//! use [`AppConfig::xdg_slug`], e.g. `$XDG_CONFIG_HOME/my-app`.
//!
//! See <https://specifications.freedesktop.org/basedir-spec/latest/>.

use std::path::{Path, PathBuf};

use crate::layout::{AppConfig, Layout};
use crate::os::env::Env;

fn config_fallback(home: &Path) -> PathBuf {
    home.join(".config")
}

fn data_fallback(home: &Path) -> PathBuf {
    let mut data = home.join(".local");
    data.push("share");
    data
}

fn cache_fallback(home: &Path) -> PathBuf {
    home.join(".cache")
}

pub(crate) fn layout(env: &Env, home: PathBuf) -> Layout {
    Layout {
        config_dir: env
            .get_absolute_path("XDG_CONFIG_HOME")
            .unwrap_or_else(|| config_fallback(&home)),
        data_dir: env
            .get_absolute_path("XDG_DATA_HOME")
            .unwrap_or_else(|| data_fallback(&home)),
        cache_dir: env
            .get_absolute_path("XDG_CACHE_HOME")
            .unwrap_or_else(|| cache_fallback(&home)),
        home,
    }
}

pub(crate) fn app_suffix(app: &AppConfig) -> PathBuf {
    super::suffix([app.xdg_slug().as_str()])
}
