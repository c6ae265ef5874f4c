//! Simulated device adapter
//!
//! Stands in for a real handset so the navigator's decisions can be
//! exercised on a desktop. Launch failures are injected per tier.

use battguard_core::settings::target::ACTION_SETTINGS;
use battguard_core::{DeepLinkTarget, PlatformAdapter, PlatformError};
use std::sync::Mutex;

/// Knobs describing the device being simulated.
pub struct SimulatedDevice {
    manufacturer: String,
    sdk_version: u32,
    package: String,
    vendor_unresolvable: bool,
    fail_primary: bool,
    fail_root: bool,
    launched: Mutex<Vec<DeepLinkTarget>>,
}

impl SimulatedDevice {
    pub fn new(
        manufacturer: String,
        sdk_version: u32,
        vendor_unresolvable: bool,
        fail_primary: bool,
        fail_root: bool,
    ) -> Self {
        Self {
            manufacturer,
            sdk_version,
            package: "com.example.dispatch".to_string(),
            vendor_unresolvable,
            fail_primary,
            fail_root,
            launched: Mutex::new(Vec::new()),
        }
    }

    /// Every screen the navigator tried to open, in launch order.
    pub fn launched(&self) -> Vec<DeepLinkTarget> {
        self.launched.lock().unwrap().clone()
    }
}

impl PlatformAdapter for SimulatedDevice {
    fn manufacturer(&self) -> String {
        self.manufacturer.clone()
    }

    fn sdk_version(&self) -> u32 {
        self.sdk_version
    }

    fn package_name(&self) -> String {
        self.package.clone()
    }

    fn is_ignoring_battery_optimizations(&self, _package: String) -> Result<bool, PlatformError> {
        // Simulated handsets start out throttled, like real ones.
        Ok(false)
    }

    fn is_auto_revoke_whitelisted(&self, _package: String) -> Result<bool, PlatformError> {
        Ok(false)
    }

    fn can_resolve(&self, _target: DeepLinkTarget) -> bool {
        !self.vendor_unresolvable
    }

    fn launch(&self, target: DeepLinkTarget) -> Result<(), PlatformError> {
        self.launched.lock().unwrap().push(target.clone());
        let is_root = target.action.as_deref() == Some(ACTION_SETTINGS);
        if is_root && self.fail_root {
            return Err(PlatformError::SecurityRestriction(
                "injected settings-root failure".to_string(),
            ));
        }
        if !is_root && self.fail_primary {
            return Err(PlatformError::SecurityRestriction(
                "injected primary-launch failure".to_string(),
            ));
        }
        tracing::debug!(%target, "simulated launch");
        Ok(())
    }
}
