// SPDX-License-Identifier: MPL-2.0
//! `nexus_site` is the interactivity layer of the NEXUS student club website.
//!
//! It is headless: a host describes the page's anchor elements, forwards
//! user and window events as [`app::Message`]s, calls [`app::Site::tick`] for
//! timers, and applies the [`ui::view::ViewCommand`]s it gets back. Strings
//! are localized with Fluent, settings come from an optional TOML file, and
//! the theme preference is persisted between visits.

#![doc(html_root_url = "https://docs.rs/nexus_site/0.3.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
