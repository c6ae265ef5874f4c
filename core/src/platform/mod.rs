//! Platform integration layer
//!
//! This module provides:
//! - The adapter trait platform code (Android/iOS) implements to expose
//!   power-management, package-management and activity-launch services
//! - The API-level constants gating feature availability

pub mod adapter;

pub use adapter::{
    PlatformAdapter, PlatformError, AUTO_REVOKE_API, BATTERY_OPTIMIZATION_API,
};
