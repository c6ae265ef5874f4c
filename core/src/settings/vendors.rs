//! Manufacturer profile table
//!
//! Several custom ROMs relocate the battery-optimization toggle out of the
//! stock settings hierarchy into vendor "autostart" / "protected apps"
//! screens. Each profile maps a normalized manufacturer substring to the
//! vendor screen known to host that toggle.
//!
//! The table is read-only process-wide configuration. New vendors are added
//! by appending a row; match priority is table order, first match wins.

use crate::settings::target::DeepLinkTarget;
use serde::Serialize;

/// One row of the manufacturer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorProfile {
    /// Lower-case substring matched against the device manufacturer.
    pub matcher: &'static str,
    /// Owning system package of the vendor screen.
    pub authority: &'static str,
    /// Activity hosting the background-management UI.
    pub entry_point: &'static str,
}

impl VendorProfile {
    /// The deep-link target for this vendor's screen.
    pub fn target(&self) -> DeepLinkTarget {
        DeepLinkTarget::component(self.authority, self.entry_point)
    }
}

/// Vendor screens known to host background-restriction toggles, in match
/// priority order.
pub const VENDOR_PROFILES: &[VendorProfile] = &[
    VendorProfile {
        matcher: "huawei",
        authority: "com.huawei.systemmanager",
        entry_point: "com.huawei.systemmanager.optimize.process.ProtectActivity",
    },
    VendorProfile {
        matcher: "xiaomi",
        authority: "com.miui.securitycenter",
        entry_point: "com.miui.permcenter.autostart.AutoStartManagementActivity",
    },
    VendorProfile {
        matcher: "oppo",
        authority: "com.coloros.safecenter",
        entry_point: "com.coloros.safecenter.permission.startup.StartupAppListActivity",
    },
    VendorProfile {
        matcher: "vivo",
        authority: "com.vivo.permissionmanager",
        entry_point: "com.vivo.permissionmanager.activity.BgStartUpManagerActivity",
    },
    VendorProfile {
        matcher: "oneplus",
        authority: "com.oneplus.security",
        entry_point: "com.oneplus.security.chainlaunch.view.ChainLaunchAppListActivity",
    },
];

/// Match a raw manufacturer identity against the table.
///
/// Matching is case-insensitive substring containment, not equality:
/// regional builds report identities like "Xiaomi Redmi".
pub fn match_profile(manufacturer: &str) -> Option<&'static VendorProfile> {
    let normalized = manufacturer.to_lowercase();
    VENDOR_PROFILES
        .iter()
        .find(|profile| normalized.contains(profile.matcher))
}

// ============================================================================
// TESTS
// ============================================================================
