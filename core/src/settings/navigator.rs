//! Manufacturer-aware settings navigation
//!
//! Resolves "the" background-restriction settings screen for the running
//! device and opens it, falling through an ordered chain of progressively
//! more generic targets:
//!
//!   vendor screen (matched and resolvable)
//!     -> application details (universal fallback)
//!       -> top-level settings (terminal)
//!
//! The chain is an explicit attempt list so the fallback order stays
//! auditable and can be inspected without launching anything.

use crate::platform::{PlatformAdapter, PlatformError};
use crate::settings::target::DeepLinkTarget;
use crate::settings::vendors;
use std::sync::Arc;

/// Opens the most relevant background-restriction settings screen.
///
/// Stateless beyond the adapter handle; every call re-reads the device
/// identity and re-resolves the plan.
#[derive(Clone)]
pub struct SettingsNavigator {
    adapter: Arc<dyn PlatformAdapter>,
}

impl SettingsNavigator {
    pub fn new(adapter: Arc<dyn PlatformAdapter>) -> Self {
        Self { adapter }
    }

    /// The primary target for this device: the vendor screen when the
    /// manufacturer matches the table and the screen resolves on the
    /// device, the app-details screen otherwise.
    fn primary_target(&self) -> DeepLinkTarget {
        let manufacturer = self.adapter.manufacturer();
        if let Some(profile) = vendors::match_profile(&manufacturer) {
            let target = profile.target();
            if self.adapter.can_resolve(target.clone()) {
                tracing::debug!(%manufacturer, vendor = profile.matcher, "vendor settings screen selected");
                return target;
            }
            tracing::debug!(
                %manufacturer,
                vendor = profile.matcher,
                "vendor screen not resolvable on this device, using app details"
            );
        }
        DeepLinkTarget::application_details(&self.adapter.package_name())
    }

    /// The ordered attempts `open_background_restriction_settings` will
    /// launch. Exposed for diagnostics; callers of the bridge cannot
    /// observe which attempt succeeded.
    pub fn fallback_plan(&self) -> Vec<DeepLinkTarget> {
        vec![self.primary_target(), DeepLinkTarget::settings_root()]
    }

    /// Bring the most relevant background-restriction screen to the
    /// foreground as a new, independent task.
    ///
    /// A launch failure on the primary attempt is recovered by falling
    /// through to the terminal settings-root target; only a failure of
    /// the terminal target is surfaced.
    pub fn open_background_restriction_settings(&self) -> Result<(), PlatformError> {
        self.run_plan(&self.fallback_plan())
    }

    /// Open the application-details screen directly, skipping the vendor
    /// table, with the same settings-root recovery. Hosts use this to land
    /// the user next to the permission auto-reset toggle.
    pub fn open_application_details(&self) -> Result<(), PlatformError> {
        self.run_plan(&[
            DeepLinkTarget::application_details(&self.adapter.package_name()),
            DeepLinkTarget::settings_root(),
        ])
    }

    fn run_plan(&self, plan: &[DeepLinkTarget]) -> Result<(), PlatformError> {
        let mut last_error =
            PlatformError::CallFailed("no navigation target attempted".to_string());
        for target in plan {
            match self.adapter.launch(target.clone()) {
                Ok(()) => {
                    tracing::info!(%target, "settings screen opened");
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(%target, %err, "settings screen launch failed");
                    last_error = err;
                }
            }
        }
        tracing::error!(%last_error, "every settings target failed to launch");
        Err(last_error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
