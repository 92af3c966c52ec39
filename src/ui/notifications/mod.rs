// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to confirm actions (theme switched, message
//! sent) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core [`Toast`] struct with its [`ToastKind`]
//! - [`manager`] - [`NotificationService`] for the toast lifecycle
//!
//! # Lifecycle
//!
//! - Inserted hidden, made visible after the show delay (10 ms)
//! - Auto-dismissed after 4 s, or earlier from its close button
//! - Detached once the hide transition (300 ms) has run
//! - No limit on concurrent toasts, no de-duplication

mod manager;
mod notification;

pub use manager::NotificationService;
pub use notification::{Phase, Toast, ToastId, ToastKind};
