//! Domain constants
//!
//! Centralized location for the default resource paths consumed by the
//! profile service client.

/// Default collection path for profile resources
pub const DEFAULT_PROFILES_PATH: &str = "/profiles";

/// Default collection path for profile agent resources
pub const DEFAULT_AGENTS_PATH: &str = "/profile-agents";
