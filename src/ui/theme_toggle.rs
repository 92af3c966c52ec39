// SPDX-License-Identifier: MPL-2.0
//! Persisted light/dark theme toggle.

use crate::app::context::Context;
use crate::app::persisted_state::THEME_KEY;
use crate::ui::notifications::ToastKind;
use crate::ui::theming::ThemeMode;
use crate::ui::view::ViewCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Clicked,
}

#[derive(Debug, Clone)]
pub struct ThemeToggle {
    mode: ThemeMode,
}

impl ThemeToggle {
    /// Produces the toggle and applies the stored theme.
    pub fn init(ctx: &mut Context<'_>) -> Self {
        let stored = ctx.store.get(THEME_KEY);
        let mode = ThemeMode::from_stored(stored.as_deref());

        let label = ctx.i18n.tr("theme-toggle-label");
        let title = ctx.i18n.tr("theme-toggle-title");
        ctx.emit(ViewCommand::InsertThemeToggle {
            label,
            title,
            icon: mode.icon(),
        });
        ctx.emit(ViewCommand::Theme {
            mode,
            icon: mode.icon(),
        });
        tracing::debug!(?mode, "theme restored");

        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::Clicked => {
                self.mode = self.mode.toggled();
                ctx.emit(ViewCommand::Theme {
                    mode: self.mode,
                    icon: self.mode.icon(),
                });

                if let Err(err) = ctx.store.set(THEME_KEY, self.mode.as_stored()) {
                    tracing::warn!(%err, "failed to persist theme preference");
                }

                let key = match self.mode {
                    ThemeMode::Dark => "toast-theme-dark",
                    ThemeMode::Light => "toast-theme-light",
                };
                ctx.toast_key(ToastKind::Info, key);
            }
        }
    }
}
