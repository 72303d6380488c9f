//! Apple layout, as laid out by the [File System Programming Guide].
//!
//! | directory | path                                   |
//! |-----------|----------------------------------------|
//! | config    | `$HOME/Library/Preferences`            |
//! | data      | `$HOME/Library/Application Support`    |
//! | cache     | `$HOME/Library/Caches`                 |
//!
//! No environment variable overrides these. Application directories use
//! [`AppConfig::apple_identifier`], e.g. `$HOME/Library/Preferences/com.myorg.MyApp`.
//!
//! [File System Programming Guide]: https://developer.apple.com/library/archive/documentation/FileManagement/Conceptual/FileSystemProgrammingGuide/FileSystemOverview/FileSystemOverview.html

use std::path::PathBuf;

use crate::layout::{AppConfig, Layout};

pub(crate) fn layout(home: PathBuf) -> Layout {
    let library = home.join("Library");
    Layout {
        config_dir: library.join("Preferences"),
        data_dir: library.join("Application Support"),
        cache_dir: library.join("Caches"),
        home,
    }
}

pub(crate) fn app_suffix(app: &AppConfig) -> PathBuf {
    super::suffix([app.apple_identifier()])
}
