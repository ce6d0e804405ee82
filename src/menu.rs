// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation keys of the interactive menus and label rendering.

use crate::i18n::Localization;
use colored::*;

pub const MODE_APPS: &str = "menu.main.option.apps";
pub const MODE_SETTINGS: &str = "menu.main.option.settings";
pub const MODE_EXIT: &str = "menu.main.option.exit";

pub const CATEGORY_SECURITY: &str = "category.security";
pub const CATEGORY_NETWORK: &str = "category.network";
pub const CATEGORY_OTHER: &str = "category.other";
pub const CATEGORY_BACK: &str = "category.back";

pub const NETWORK_OPENSSH: &str = "network.option.openssh";
pub const NETWORK_PROXY: &str = "network.option.proxy";
pub const NETWORK_DNS: &str = "network.option.dns";
pub const NETWORK_ADGUARD: &str = "network.option.adguard";
pub const NETWORK_BACK: &str = "network.option.back";

pub const SECURITY_PARENTAL: &str = "security.option.parental";
pub const SECURITY_ANTISCAN: &str = "security.option.antiscan";
pub const SECURITY_BACKUP: &str = "security.option.backup";
pub const SECURITY_BACK: &str = "security.option.back";

pub const OTHER_INFO: &str = "others.option.info";
pub const OTHER_BACK: &str = "others.option.back";

pub const SETTINGS_LOGGING: &str = "settings.option.logging";
pub const SETTINGS_BACK: &str = "settings.option.back";

/// A menu: title key plus option keys, in display order.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub const MAIN: Menu = Menu {
    title: "menu.main.task.title",
    options: &[MODE_APPS, MODE_SETTINGS, MODE_EXIT],
};

pub const CATEGORIES: Menu = Menu {
    title: "category.task.title",
    options: &[CATEGORY_SECURITY, CATEGORY_NETWORK, CATEGORY_OTHER, CATEGORY_BACK],
};

pub const NETWORK: Menu = Menu {
    title: "network.task.title",
    options: &[
        NETWORK_OPENSSH,
        NETWORK_PROXY,
        NETWORK_DNS,
        NETWORK_ADGUARD,
        NETWORK_BACK,
    ],
};

pub const SECURITY: Menu = Menu {
    title: "security.task.title",
    options: &[SECURITY_PARENTAL, SECURITY_ANTISCAN, SECURITY_BACKUP, SECURITY_BACK],
};

pub const OTHERS: Menu = Menu {
    title: "others.task.title",
    options: &[OTHER_INFO, OTHER_BACK],
};

pub const SETTINGS: Menu = Menu {
    title: "settings.task.title",
    options: &[SETTINGS_LOGGING, SETTINGS_BACK],
};

pub const ALL: &[Menu] = &[MAIN, CATEGORIES, NETWORK, SECURITY, OTHERS, SETTINGS];

/// Translate each key in order.
pub fn labels_for(l10n: &Localization, keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| l10n.translate(key)).collect()
}

/// Plain-text rendering of a menu, one numbered option per line.
pub fn render(l10n: &Localization, menu: &Menu) -> String {
    let mut out = format!("{}\n", l10n.translate(menu.title).bold().cyan());
    for (idx, label) in labels_for(l10n, menu.options).iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, label));
    }
    out
}
