// Host bridge for UniFFI bindings
//
// Synchronous wrappers around the async module surface. Mobile callback
// threads are not in an async context, so every call blocks on a global
// runtime dedicated to bridge work.

use crate::{BatteryOptimization, BridgeError, PlatformAdapter};
use std::sync::Arc;

/// Name hosts register the module under.
pub const MODULE_NAME: &str = "BatteryOptimization";

// Global runtime for bridge operations on mobile. Mobile callback threads
// aren't in a tokio context, so the first bridge call creates one.
static GLOBAL_RT: parking_lot::RwLock<Option<tokio::runtime::Runtime>> =
    parking_lot::RwLock::new(None);

fn get_global_runtime() -> tokio::runtime::Handle {
    let rt_read = GLOBAL_RT.read();
    if let Some(rt) = &*rt_read {
        return rt.handle().clone();
    }
    drop(rt_read);

    let mut rt_write = GLOBAL_RT.write();
    if let Some(rt) = &*rt_write {
        return rt.handle().clone();
    }

    tracing::info!("Initializing global Tokio runtime for bridge calls...");
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .thread_name("battguard-bridge")
        .build()
        .expect("Failed to create global Tokio runtime");
    let handle = rt.handle().clone();
    *rt_write = Some(rt);
    handle
}

/// Synchronous facade the host registers its `BatteryOptimization` module
/// against. One instance per process is expected but not enforced; calls
/// share no state beyond the read-only vendor table.
#[derive(uniffi::Object)]
pub struct BatteryOptimizationBridge {
    inner: BatteryOptimization,
}

#[uniffi::export]
impl BatteryOptimizationBridge {
    #[uniffi::constructor]
    pub fn new(adapter: Arc<dyn PlatformAdapter>) -> Arc<Self> {
        Arc::new(Self {
            inner: BatteryOptimization::new(adapter),
        })
    }

    /// The name hosts register these calls under.
    pub fn module_name(&self) -> String {
        MODULE_NAME.to_string()
    }

    /// The fixed code attached to every rejection.
    pub fn error_code(&self) -> String {
        crate::ERROR_CODE.to_string()
    }

    pub fn is_ignoring_battery_optimizations(&self) -> Result<bool, BridgeError> {
        get_global_runtime().block_on(self.inner.is_ignoring_battery_optimizations())
    }

    pub fn is_auto_revoke_whitelisted(&self) -> Result<bool, BridgeError> {
        get_global_runtime().block_on(self.inner.is_auto_revoke_whitelisted())
    }

    pub fn open_battery_settings(&self) -> Result<bool, BridgeError> {
        get_global_runtime().block_on(self.inner.open_battery_settings())
    }

    pub fn open_application_details(&self) -> Result<bool, BridgeError> {
        get_global_runtime().block_on(self.inner.open_application_details())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;
    use crate::settings::target::DeepLinkTarget;

    struct StubAdapter {
        manufacturer: &'static str,
        sdk_version: u32,
        exempt: bool,
    }

    impl PlatformAdapter for StubAdapter {
        fn manufacturer(&self) -> String {
            self.manufacturer.to_string()
        }

        fn sdk_version(&self) -> u32 {
            self.sdk_version
        }

        fn package_name(&self) -> String {
            "com.example.dispatch".to_string()
        }

        fn is_ignoring_battery_optimizations(
            &self,
            _package: String,
        ) -> Result<bool, PlatformError> {
            Ok(self.exempt)
        }

        fn is_auto_revoke_whitelisted(&self, _package: String) -> Result<bool, PlatformError> {
            Ok(self.exempt)
        }

        fn can_resolve(&self, _target: DeepLinkTarget) -> bool {
            true
        }

        fn launch(&self, _target: DeepLinkTarget) -> Result<(), PlatformError> {
            Ok(())
        }
    }

    fn bridge(adapter: StubAdapter) -> Arc<BatteryOptimizationBridge> {
        BatteryOptimizationBridge::new(Arc::new(adapter))
    }

    #[test]
    fn test_module_registration_name() {
        let bridge = bridge(StubAdapter {
            manufacturer: "Samsung",
            sdk_version: 34,
            exempt: true,
        });
        assert_eq!(bridge.module_name(), "BatteryOptimization");
        assert_eq!(bridge.error_code(), "ERROR");
    }

    #[test]
    fn test_sync_calls_resolve_outside_async_context() {
        // Bridge callers are plain threads; the global runtime does the work.
        let bridge = bridge(StubAdapter {
            manufacturer: "Xiaomi",
            sdk_version: 34,
            exempt: false,
        });

        assert_eq!(bridge.is_ignoring_battery_optimizations().unwrap(), false);
        assert_eq!(bridge.is_auto_revoke_whitelisted().unwrap(), false);
        assert_eq!(bridge.open_battery_settings().unwrap(), true);
        assert_eq!(bridge.open_application_details().unwrap(), true);
    }

    #[test]
    fn test_pre_feature_device_through_bridge() {
        let bridge = bridge(StubAdapter {
            manufacturer: "Samsung",
            sdk_version: 21,
            exempt: false,
        });

        assert_eq!(bridge.is_ignoring_battery_optimizations().unwrap(), true);
        assert_eq!(bridge.is_auto_revoke_whitelisted().unwrap(), true);
    }
}
