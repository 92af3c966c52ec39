// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale resolution, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from config, then OS settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching (`Site::set_locale`)
//! - `MISSING: key` rendering when a message is absent

pub mod fluent;

pub use fluent::I18n;
