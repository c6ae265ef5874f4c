//! Deep-link targets for system settings screens
//!
//! A target identifies one destination inside the device settings UI:
//! either an explicit component (owning package + entry activity) or a
//! platform action, optionally scoped to a package URI. Targets are built
//! on the stack per navigation attempt and never stored across calls.

use serde::{Deserialize, Serialize};

/// Platform action opening the per-app details screen.
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// Platform action opening the top-level settings screen.
pub const ACTION_SETTINGS: &str = "android.settings.SETTINGS";

/// Flags applied when launching a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
pub enum LaunchFlag {
    /// Start the screen as a new, independent task.
    NewTask,
    /// Clear any existing task the screen belongs to.
    ClearTask,
}

impl std::fmt::Display for LaunchFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewTask => write!(f, "NewTask"),
            Self::ClearTask => write!(f, "ClearTask"),
        }
    }
}

/// An addressable destination screen within the system settings UI.
///
/// Either `authority` + `entry_point` (explicit component) or `action`
/// (generic target) is set; `data_uri` scopes an action to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct DeepLinkTarget {
    /// Owning system package of an explicit component target.
    pub authority: Option<String>,
    /// Entry activity within the owning package.
    pub entry_point: Option<String>,
    /// Platform action of a generic target.
    pub action: Option<String>,
    /// Data URI the action is scoped to, e.g. `package:<app-id>`.
    pub data_uri: Option<String>,
    /// Launch flags.
    pub flags: Vec<LaunchFlag>,
}

impl DeepLinkTarget {
    /// Explicit component target inside a vendor settings package.
    pub fn component(authority: &str, entry_point: &str) -> Self {
        Self {
            authority: Some(authority.to_string()),
            entry_point: Some(entry_point.to_string()),
            action: None,
            data_uri: None,
            flags: vec![LaunchFlag::NewTask],
        }
    }

    /// Application-details screen scoped to `package`.
    pub fn application_details(package: &str) -> Self {
        Self {
            authority: None,
            entry_point: None,
            action: Some(ACTION_APPLICATION_DETAILS_SETTINGS.to_string()),
            data_uri: Some(format!("package:{}", package)),
            flags: vec![LaunchFlag::NewTask],
        }
    }

    /// Top-level settings screen, the terminal fallback.
    pub fn settings_root() -> Self {
        Self {
            authority: None,
            entry_point: None,
            action: Some(ACTION_SETTINGS.to_string()),
            data_uri: None,
            flags: vec![LaunchFlag::NewTask],
        }
    }

    /// Whether this target names an explicit component.
    pub fn is_component(&self) -> bool {
        self.authority.is_some() && self.entry_point.is_some()
    }

    /// Whether `flag` is set on this target.
    pub fn has_flag(&self, flag: LaunchFlag) -> bool {
        self.flags.contains(&flag)
    }
}

impl std::fmt::Display for DeepLinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.authority, &self.entry_point, &self.action) {
            (Some(authority), Some(entry_point), _) => {
                write!(f, "{}/{}", authority, entry_point)
            }
            (_, _, Some(action)) => {
                if let Some(uri) = &self.data_uri {
                    write!(f, "{} ({})", action, uri)
                } else {
                    write!(f, "{}", action)
                }
            }
            _ => write!(f, "<empty target>"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_target() {
        let target = DeepLinkTarget::component("com.miui.securitycenter", "AutoStartActivity");
        assert!(target.is_component());
        assert!(target.action.is_none());
        assert!(target.has_flag(LaunchFlag::NewTask));
    }

    #[test]
    fn test_application_details_target() {
        let target = DeepLinkTarget::application_details("com.example.app");
        assert!(!target.is_component());
        assert_eq!(
            target.action.as_deref(),
            Some(ACTION_APPLICATION_DETAILS_SETTINGS)
        );
        assert_eq!(target.data_uri.as_deref(), Some("package:com.example.app"));
        assert!(target.has_flag(LaunchFlag::NewTask));
    }

    #[test]
    fn test_settings_root_target() {
        let target = DeepLinkTarget::settings_root();
        assert!(!target.is_component());
        assert_eq!(target.action.as_deref(), Some(ACTION_SETTINGS));
        assert!(target.data_uri.is_none());
        assert!(target.has_flag(LaunchFlag::NewTask));
    }

    #[test]
    fn test_every_constructor_sets_new_task() {
        let targets = [
            DeepLinkTarget::component("a", "b"),
            DeepLinkTarget::application_details("com.example.app"),
            DeepLinkTarget::settings_root(),
        ];
        for target in &targets {
            assert!(target.has_flag(LaunchFlag::NewTask), "target {}", target);
        }
    }

    #[test]
    fn test_display() {
        let component = DeepLinkTarget::component("com.huawei.systemmanager", "ProtectActivity");
        assert_eq!(
            format!("{}", component),
            "com.huawei.systemmanager/ProtectActivity"
        );

        let details = DeepLinkTarget::application_details("com.example.app");
        assert_eq!(
            format!("{}", details),
            "android.settings.APPLICATION_DETAILS_SETTINGS (package:com.example.app)"
        );

        let root = DeepLinkTarget::settings_root();
        assert_eq!(format!("{}", root), "android.settings.SETTINGS");
    }

    #[test]
    fn test_target_serialization() {
        let target = DeepLinkTarget::application_details("com.example.app");
        let json = serde_json::to_string(&target).unwrap();
        let deserialized: DeepLinkTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(target, deserialized);
    }
}
