//! Dothome - standard per-user directories for applications.
//!
//! This crate computes the home, config, data and cache directories of the current user,
//! following Apple's `~/Library` layout, Windows' `AppData` layout or the XDG Base Directory
//! Specification. It never touches the filesystem: it only reads the environment through
//! [`os::env::Env`] and returns paths.
//!
//! ```rust,no_run
//! # use dothome::layout::{self, AppConfig};
//! # use dothome::os::env::Env;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = Env::new();
//! let layout = layout::native_app_layout(&env, &AppConfig::new("My App").with_org_name("MyOrg"))?;
//! println!("config: {}", layout.config_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod os;

pub use layout::{AppConfig, Layout, LayoutError, Mode, Platform};
