//! Windows layout, following the [Known Folder] locations.
//!
//! | directory | variable          | fallback                          |
//! |-----------|-------------------|-----------------------------------|
//! | config    | `%AppData%`       | `%USERPROFILE%\AppData\Roaming`   |
//! | data      | `%AppData%`       | `%USERPROFILE%\AppData\Roaming`   |
//! | cache     | `%LocalAppData%`  | `%USERPROFILE%\AppData\Local`     |
//!
//! Variables are honored only when they hold an absolute path. Application directories
//! are `<org>\<name>` with both kept verbatim; the organization is skipped when missing.
//!
//! [Known Folder]: https://learn.microsoft.com/en-us/windows/win32/shell/knownfolderid

use std::path::PathBuf;

use crate::layout::{AppConfig, Layout};
use crate::os::env::Env;

pub(crate) fn layout(env: &Env, home: PathBuf) -> Layout {
    let app_data = home.join("AppData");
    let roaming = env
        .get_absolute_path("AppData")
        .unwrap_or_else(|| app_data.join("Roaming"));
    Layout {
        config_dir: roaming.clone(),
        data_dir: roaming,
        cache_dir: env
            .get_absolute_path("LocalAppData")
            .unwrap_or_else(|| app_data.join("Local")),
        home,
    }
}

pub(crate) fn app_suffix(app: &AppConfig) -> PathBuf {
    super::suffix([app.org_name.as_deref().unwrap_or_default(), app.name.as_str()])
}
