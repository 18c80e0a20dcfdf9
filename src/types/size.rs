//! The fixed icon size table.
//!
//! App Store submission wants the same artwork at a spread of edge lengths.
//! The table is static data; there is no discovery or configuration.

/// What a size variant is for, in App Store terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRole {
    Store,
    Device,
    Spotlight,
    Settings,
    Notification,
}

impl IconRole {
    /// All roles, in the order the table lists them.
    pub const ALL: [IconRole; 5] = [
        IconRole::Store,
        IconRole::Device,
        IconRole::Spotlight,
        IconRole::Settings,
        IconRole::Notification,
    ];

    /// Short display label, used as the printer verb in listings.
    pub fn label(&self) -> &'static str {
        match self {
            IconRole::Store => "Store",
            IconRole::Device => "Device",
            IconRole::Spotlight => "Spotlight",
            IconRole::Settings => "Settings",
            IconRole::Notification => "Notification",
        }
    }

    /// Filename pattern covering this role's entries.
    pub fn pattern(&self) -> &'static str {
        match self {
            IconRole::Store => "AppStore_*",
            IconRole::Device => "iPhone_*, iPad_*, iPadPro_*",
            IconRole::Spotlight => "Spotlight_*",
            IconRole::Settings => "Settings_*",
            IconRole::Notification => "Notification_*",
        }
    }

    /// One-line upload purpose for the post-run guide.
    pub fn purpose(&self) -> &'static str {
        match self {
            IconRole::Store => "App Store listing artwork (upload in App Store Connect)",
            IconRole::Device => "home screen icons for iPhone and iPad",
            IconRole::Spotlight => "search results on device",
            IconRole::Settings => "the Settings app's per-app row",
            IconRole::Notification => "notification banners",
        }
    }
}

/// One required output icon: a distinct name plus a square pixel edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub name: &'static str,
    pub edge: u32,
    pub role: IconRole,
}

impl SizeSpec {
    pub const fn new(name: &'static str, edge: u32, role: IconRole) -> Self {
        Self { name, edge, role }
    }

    /// Output filename for this spec.
    pub fn filename(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// The 15 required variants. Names are unique; edges repeat across roles.
pub const ICON_SIZES: [SizeSpec; 15] = [
    SizeSpec::new("AppStore_1024x1024", 1024, IconRole::Store),
    SizeSpec::new("iPhone_120x120", 120, IconRole::Device),
    SizeSpec::new("iPhone_180x180", 180, IconRole::Device),
    SizeSpec::new("iPad_76x76", 76, IconRole::Device),
    SizeSpec::new("iPad_152x152", 152, IconRole::Device),
    SizeSpec::new("iPadPro_167x167", 167, IconRole::Device),
    SizeSpec::new("Spotlight_40x40", 40, IconRole::Spotlight),
    SizeSpec::new("Spotlight_80x80", 80, IconRole::Spotlight),
    SizeSpec::new("Spotlight_120x120", 120, IconRole::Spotlight),
    SizeSpec::new("Settings_29x29", 29, IconRole::Settings),
    SizeSpec::new("Settings_58x58", 58, IconRole::Settings),
    SizeSpec::new("Settings_87x87", 87, IconRole::Settings),
    SizeSpec::new("Notification_20x20", 20, IconRole::Notification),
    SizeSpec::new("Notification_40x40", 40, IconRole::Notification),
    SizeSpec::new("Notification_60x60", 60, IconRole::Notification),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_has_fifteen_entries() {
        assert_eq!(ICON_SIZES.len(), 15);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = ICON_SIZES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), ICON_SIZES.len());
    }

    #[test]
    fn test_edges_are_positive() {
        assert!(ICON_SIZES.iter().all(|s| s.edge > 0));
    }

    #[test]
    fn test_names_encode_dimensions() {
        for spec in &ICON_SIZES {
            let suffix = format!("_{}x{}", spec.edge, spec.edge);
            assert!(
                spec.name.ends_with(&suffix),
                "{} does not end with {}",
                spec.name,
                suffix
            );
        }
    }

    #[test]
    fn test_every_role_is_covered() {
        let roles: HashSet<IconRole> = ICON_SIZES.iter().map(|s| s.role).collect();
        assert_eq!(roles.len(), IconRole::ALL.len());
    }

    #[test]
    fn test_filename_extension() {
        assert_eq!(ICON_SIZES[0].filename(), "AppStore_1024x1024.png");
    }
}
