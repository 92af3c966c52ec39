// SPDX-License-Identifier: MPL-2.0
//! Feature controllers and the view-state protocol.
//!
//! Each feature follows the same "state down, commands out" pattern: a
//! controller is built from its page anchors (or disabled when they are
//! absent), receives messages through `handle`, and emits [`view::ViewCommand`]s
//! through the shared [`Context`](crate::app::context::Context).
//!
//! # Features
//!
//! - [`navigation`] - Mobile navigation toggle
//! - [`scroll_top`] - Scroll-to-top control
//! - [`theme_toggle`] - Persisted light/dark toggle
//! - [`counters`] - Animated statistic counters
//! - [`lightbox`] - Gallery lightbox viewer
//! - [`contact_form`] - Contact form validation
//! - [`event_filter`] - Event category filter and search
//! - [`typing_cursor`] - Hero title cursor decoration
//! - [`reveal`] - Scroll reveal animation
//! - [`anchor_links`] - Smooth in-page link scrolling
//!
//! # Shared Infrastructure
//!
//! - [`view`] - View commands and state enums with their CSS classes
//! - [`page_state`] - In-memory document applying view commands
//! - [`theming`] - Light/Dark theme mode
//! - [`visibility`] - Visibility observer for counters and reveal
//! - [`notifications`] - Toast notification system for user feedback

pub mod anchor_links;
pub mod contact_form;
pub mod counters;
pub mod event_filter;
pub mod lightbox;
pub mod navigation;
pub mod notifications;
pub mod page_state;
pub mod reveal;
pub mod scroll_top;
pub mod theme_toggle;
pub mod theming;
pub mod typing_cursor;
pub mod view;
pub mod visibility;
