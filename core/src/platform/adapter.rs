//! Platform service adapter
//!
//! The single seam between this library and the device: power-management
//! queries, package-management queries, activity resolution and launch.
//! Platform embedding code (Android/iOS) implements the trait as a UniFFI
//! foreign trait; tests and the CLI supply scripted implementations.
//!
//! Every method is a synchronous-but-fast system call. The library never
//! retries them and never calls them on the caller's thread.

use crate::settings::target::DeepLinkTarget;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API level where the battery-optimization exemption flag first exists
/// (Android M). Below it there is no throttling to be exempted from.
pub const BATTERY_OPTIMIZATION_API: u32 = 23;

/// API level where permission auto-revoke first exists (Android R).
pub const AUTO_REVOKE_API: u32 = 30;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Failures raised by the underlying platform services.
#[derive(Debug, Error, Clone, Serialize, Deserialize, uniffi::Error)]
#[uniffi(flat_error)]
pub enum PlatformError {
    #[error("No handler for target: {0}")]
    ActivityNotFound(String),

    #[error("Security restriction: {0}")]
    SecurityRestriction(String),

    #[error("Platform call failed: {0}")]
    CallFailed(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for PlatformError {
    fn from(err: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::CallFailed(err.reason)
    }
}

// ============================================================================
// PLATFORM ADAPTER
// ============================================================================

/// Device services consumed by the module.
///
/// Wraps the platform's power-management service (exemption query), its
/// package-management service (auto-revoke query, resolvability, own
/// package identifier) and its activity-launch facility.
#[uniffi::export(with_foreign)]
#[cfg_attr(test, mockall::automock)]
pub trait PlatformAdapter: Send + Sync {
    /// Raw manufacturer identity of the running device.
    fn manufacturer(&self) -> String;

    /// Platform API level of the running build.
    fn sdk_version(&self) -> u32;

    /// The app's own package identifier.
    fn package_name(&self) -> String;

    /// Power-management exemption flag for `package`.
    fn is_ignoring_battery_optimizations(&self, package: String) -> Result<bool, PlatformError>;

    /// Package-management auto-revoke whitelist flag for `package`.
    fn is_auto_revoke_whitelisted(&self, package: String) -> Result<bool, PlatformError>;

    /// Whether some installed component can handle `target` on this device.
    fn can_resolve(&self, target: DeepLinkTarget) -> bool;

    /// Bring `target` to the foreground as dictated by its launch flags.
    fn launch(&self, target: DeepLinkTarget) -> Result<(), PlatformError>;
}

// ============================================================================
// TESTS
// ============================================================================
