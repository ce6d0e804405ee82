// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terem: menu-driven manager for router services.
//!
//! Menus and command output are thin callers of the localization engine in
//! [`i18n`]; every label they show goes through a shared
//! [`i18n::Localization`].
//!
//! MODULES:
//! 1. **i18n**: dictionary format, one-time loading, language switching and
//!    lookup with fallback.
//! 2. **config** / **logging** / **setup**: startup composition.
//! 3. **menu** / **diagnostics**: user-facing rendering and dictionary audit.

pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod logging;
pub mod menu;
pub mod setup;
