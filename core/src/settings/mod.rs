//! Settings-screen resolution and navigation
//!
//! This module provides:
//! - Deep-link target construction for vendor, app-details and root screens
//! - The static manufacturer profile table with ordered substring matching
//! - The navigator that resolves and opens the best screen with fallback

pub mod navigator;
pub mod target;
pub mod vendors;

pub use navigator::SettingsNavigator;
pub use target::{DeepLinkTarget, LaunchFlag};
pub use vendors::{match_profile, VendorProfile, VENDOR_PROFILES};
