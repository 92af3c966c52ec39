// SPDX-License-Identifier: MPL-2.0
//! Contact form field rules.
//!
//! Each field has one independent predicate and one localized error
//! message. Lengths are measured in UTF-16 code units after trimming,
//! so a character outside the Basic Multilingual Plane counts as two.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A validated contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id of the input in the page markup.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// i18n key of the inline error message.
    #[must_use]
    pub fn error_key(self) -> &'static str {
        match self {
            Field::Name => "form-error-name",
            Field::Email => "form-error-email",
            Field::Subject => "form-error-subject",
            Field::Message => "form-error-message",
        }
    }

    /// Returns whether `value` satisfies this field's rule.
    #[must_use]
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Field::Name => min_trimmed_units(value, 2),
            Field::Email => EMAIL_PATTERN.is_match(value),
            Field::Subject => min_trimmed_units(value, 3),
            Field::Message => min_trimmed_units(value, 10),
        }
    }
}

fn min_trimmed_units(value: &str, min: usize) -> bool {
    value.trim().encode_utf16().count() >= min
}
