//! OS-level inputs of the layout resolver.
//!
//! [`Env`](env::Env) is the environment provider every layout function reads from, and
//! [`home`] resolves the user's home directory on top of it.

pub mod env;
pub mod home;
