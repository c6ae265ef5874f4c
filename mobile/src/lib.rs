// battguard-mobile — Native mobile bindings for iOS and Android
// This crate exports the BattGuard core API via UniFFI

pub use battguard_core::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct DeviceStub {
        manufacturer: &'static str,
        sdk_version: u32,
    }

    impl PlatformAdapter for DeviceStub {
        fn manufacturer(&self) -> String {
            self.manufacturer.to_string()
        }

        fn sdk_version(&self) -> u32 {
            self.sdk_version
        }

        fn package_name(&self) -> String {
            "com.example.dispatch".to_string()
        }

        fn is_ignoring_battery_optimizations(&self, _package: String) -> Result<bool, PlatformError> {
            Ok(false)
        }

        fn is_auto_revoke_whitelisted(&self, _package: String) -> Result<bool, PlatformError> {
            Ok(false)
        }

        fn can_resolve(&self, _target: DeepLinkTarget) -> bool {
            true
        }

        fn launch(&self, _target: DeepLinkTarget) -> Result<(), PlatformError> {
            Ok(())
        }
    }

    #[test]
    fn test_mobile_bridge_lifecycle() {
        let bridge = BatteryOptimizationBridge::new(Arc::new(DeviceStub {
            manufacturer: "Samsung",
            sdk_version: 34,
        }));

        assert_eq!(bridge.module_name(), "BatteryOptimization");
        assert_eq!(bridge.is_ignoring_battery_optimizations().unwrap(), false);
        assert_eq!(bridge.open_battery_settings().unwrap(), true);
    }

    #[test]
    fn test_mobile_bridge_pre_feature_device() {
        let bridge = BatteryOptimizationBridge::new(Arc::new(DeviceStub {
            manufacturer: "Huawei",
            sdk_version: 22,
        }));

        assert_eq!(bridge.is_ignoring_battery_optimizations().unwrap(), true);
        assert_eq!(bridge.is_auto_revoke_whitelisted().unwrap(), true);
    }
}
