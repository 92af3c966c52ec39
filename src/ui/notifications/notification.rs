// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] struct, its [`ToastKind`] and the
//! lifecycle [`Phase`] used by the notification service.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a toast, unique within one notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind determines the icon and the styling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }

    /// Class set on the toast element, e.g. `toast-success`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
            ToastKind::Warning => "toast-warning",
        }
    }
}

/// Unknown kinds fall back to [`ToastKind::Info`].
impl FromStr for ToastKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        })
    }
}

/// Lifecycle of a toast: inserted, shown, then hidden before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

/// A toast currently attached to the container.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    text: String,
    phase: Phase,
}

impl Toast {
    pub(crate) fn new(id: ToastId, kind: ToastKind, text: String) -> Self {
        Self {
            id,
            kind,
            text,
            phase: Phase::Entering,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_with_info_fallback() {
        assert_eq!("success".parse::<ToastKind>(), Ok(ToastKind::Success));
        assert_eq!("error".parse::<ToastKind>(), Ok(ToastKind::Error));
        assert_eq!("warning".parse::<ToastKind>(), Ok(ToastKind::Warning));
        assert_eq!("info".parse::<ToastKind>(), Ok(ToastKind::Info));
        assert_eq!("bogus".parse::<ToastKind>(), Ok(ToastKind::Info));
    }

    #[test]
    fn each_kind_has_its_icon() {
        assert_eq!(ToastKind::Success.icon(), "✓");
        assert_eq!(ToastKind::Error.icon(), "✕");
        assert_eq!(ToastKind::Info.icon(), "ℹ");
        assert_eq!(ToastKind::Warning.icon(), "⚠");
    }

    #[test]
    fn new_toast_starts_entering() {
        let toast = Toast::new(ToastId::new(1), ToastKind::Info, "hello".into());
        assert_eq!(toast.phase(), Phase::Entering);
        assert_eq!(toast.id().to_string(), "toast-1");
    }
}
