//! Static option catalogs backing the wizard's screens.

use serde::Serialize;

use super::form::{AppChoice, MotivationKey};

/// One selectable app, with the display name shown in the wizard and the
/// Android package name a future monitoring engine would watch.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCatalogEntry {
    pub choice: AppChoice,
    pub name: &'static str,
    pub package_name: Option<&'static str>,
}

pub const APP_CATALOG: [AppCatalogEntry; 5] = [
    AppCatalogEntry {
        choice: AppChoice::Facebook,
        name: "Facebook",
        package_name: Some("com.facebook.katana"),
    },
    AppCatalogEntry {
        choice: AppChoice::Instagram,
        name: "Instagram",
        package_name: Some("com.instagram.android"),
    },
    AppCatalogEntry {
        choice: AppChoice::X,
        name: "X (Twitter)",
        package_name: Some("com.twitter.android"),
    },
    AppCatalogEntry {
        choice: AppChoice::TikTok,
        name: "TikTok",
        package_name: Some("com.zhiliaoapp.musically"),
    },
    AppCatalogEntry {
        choice: AppChoice::Other,
        name: "Other",
        package_name: None,
    },
];

/// One motivation option with its user-facing label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MotivationOption {
    pub key: MotivationKey,
    pub label: &'static str,
}

pub const MOTIVATION_OPTIONS: [MotivationOption; 4] = [
    MotivationOption {
        key: MotivationKey::LovedOnes,
        label: "Spend more time with my loved ones",
    },
    MotivationOption {
        key: MotivationKey::Hobbies,
        label: "Dedicate my time to hobbies",
    },
    MotivationOption {
        key: MotivationKey::PhysicalActivity,
        label: "Do physical activity",
    },
    MotivationOption {
        key: MotivationKey::Other,
        label: "Other",
    },
];

impl AppChoice {
    pub fn catalog_entry(self) -> &'static AppCatalogEntry {
        APP_CATALOG
            .iter()
            .find(|entry| entry.choice == self)
            .expect("catalog covers every AppChoice variant")
    }

    pub fn display_name(self) -> &'static str {
        self.catalog_entry().name
    }
}
