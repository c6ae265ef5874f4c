// BattGuard Core — background-execution whitelisting bridge
//
// "Does this land the user on a screen where the app can actually be
//  whitelisted?"
//
// If the answer is no, it doesn't belong here.

pub mod bridge;
pub mod platform;
pub mod settings;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub use bridge::{BatteryOptimizationBridge, MODULE_NAME};
pub use platform::{PlatformAdapter, PlatformError, AUTO_REVOKE_API, BATTERY_OPTIMIZATION_API};
pub use settings::{match_profile, DeepLinkTarget, LaunchFlag, SettingsNavigator, VendorProfile, VENDOR_PROFILES};

uniffi::setup_scaffolding!();

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Fixed code attached to every rejection surfaced to the host.
pub const ERROR_CODE: &str = "ERROR";

/// Rejection surfaced at the module boundary.
///
/// Pre-feature OS levels are not an error: the affected query resolves the
/// safe boolean instead. Platform failures carry the platform's own
/// message; navigation failures only reach here once every fallback tier
/// has been exhausted.
#[derive(Debug, Error, Clone, Serialize, Deserialize, uniffi::Error)]
#[uniffi(flat_error)]
pub enum BridgeError {
    #[error("{0}")]
    PlatformFailure(String),

    #[error("Bridge runtime failure: {0}")]
    RuntimeFailure(String),
}

impl BridgeError {
    /// The fixed, generic code hosts attach to the rejection.
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

impl From<PlatformError> for BridgeError {
    fn from(err: PlatformError) -> Self {
        Self::PlatformFailure(err.to_string())
    }
}

// ============================================================================
// BATTERY OPTIMIZATION MODULE
// ============================================================================

/// The module surface exposed to the host application.
///
/// Each operation is independent and stateless: the caller issues a request
/// and receives exactly one resolution. Platform calls run on the blocking
/// pool, never on the caller's thread. No cancellation — a navigation
/// request runs to completion once issued.
pub struct BatteryOptimization {
    adapter: Arc<dyn PlatformAdapter>,
    navigator: SettingsNavigator,
}

impl BatteryOptimization {
    pub fn new(adapter: Arc<dyn PlatformAdapter>) -> Self {
        let navigator = SettingsNavigator::new(adapter.clone());
        Self { adapter, navigator }
    }

    /// Whether the app is exempt from battery-optimization throttling.
    ///
    /// Levels below [`BATTERY_OPTIMIZATION_API`] have no throttling to be
    /// exempted from; the power service is not consulted there.
    pub async fn is_ignoring_battery_optimizations(&self) -> Result<bool, BridgeError> {
        let adapter = self.adapter.clone();
        run_blocking(move || {
            if adapter.sdk_version() < BATTERY_OPTIMIZATION_API {
                return Ok(true);
            }
            let package = adapter.package_name();
            adapter
                .is_ignoring_battery_optimizations(package)
                .map_err(BridgeError::from)
        })
        .await
    }

    /// Whether the app is exempt from automatic permission revocation.
    ///
    /// Levels below [`AUTO_REVOKE_API`] never revoke; the package service
    /// is not consulted there.
    pub async fn is_auto_revoke_whitelisted(&self) -> Result<bool, BridgeError> {
        let adapter = self.adapter.clone();
        run_blocking(move || {
            if adapter.sdk_version() < AUTO_REVOKE_API {
                return Ok(true);
            }
            let package = adapter.package_name();
            adapter
                .is_auto_revoke_whitelisted(package)
                .map_err(BridgeError::from)
        })
        .await
    }

    /// Navigate the user to the most relevant background-restriction
    /// settings screen. Resolves `true` on any successful tier.
    pub async fn open_battery_settings(&self) -> Result<bool, BridgeError> {
        let navigator = self.navigator.clone();
        run_blocking(move || {
            navigator.open_background_restriction_settings()?;
            Ok(true)
        })
        .await
    }

    /// Open the application-details screen directly, with the same
    /// settings-root recovery. Resolves `true` on success.
    pub async fn open_application_details(&self) -> Result<bool, BridgeError> {
        let navigator = self.navigator.clone();
        run_blocking(move || {
            navigator.open_application_details()?;
            Ok(true)
        })
        .await
    }
}

/// Run a synchronous platform call off the caller's thread.
async fn run_blocking<T, F>(call: F) -> Result<T, BridgeError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, BridgeError> + Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result,
        Err(err) => Err(BridgeError::RuntimeFailure(err.to_string())),
    }
}

// ============================================================================
// TESTS
// ============================================================================
