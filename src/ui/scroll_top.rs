// SPDX-License-Identifier: MPL-2.0
//! Scroll-to-top control.
//!
//! The control is shown once the page is scrolled strictly past the
//! threshold. Scroll events are throttled: the first event of a window is
//! evaluated at once, later ones only record the offset, and the last
//! recorded offset is evaluated when the window closes. The view only hears
//! about actual visibility changes.

use crate::app::context::Context;
use crate::app::timers::TimerEvent;
use crate::ui::view::{ScrollBehavior, ViewCommand, Visibility};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The window's vertical offset changed.
    Scrolled(f64),
    Clicked,
}

#[derive(Debug, Clone)]
pub struct ScrollTop {
    visibility: Visibility,
    threshold: f64,
    throttle: Duration,
    window_open: bool,
    pending: Option<f64>,
}

impl ScrollTop {
    /// Produces the control, hidden.
    pub fn init(ctx: &mut Context<'_>) -> Self {
        ctx.emit(ViewCommand::InsertScrollTopButton {
            label: ctx.i18n.tr("scroll-top-label"),
            title: ctx.i18n.tr("scroll-top-title"),
        });
        Self {
            visibility: Visibility::Hidden,
            threshold: ctx.config.scroll.threshold(),
            throttle: ctx.config.scroll.throttle(),
            window_open: false,
            pending: None,
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::Scrolled(offset) => {
                if self.window_open {
                    self.pending = Some(offset);
                } else {
                    self.evaluate(offset, ctx);
                    self.open_window(ctx);
                }
            }
            Message::Clicked => ctx.emit(ViewCommand::ScrollTo {
                top: 0.0,
                behavior: ScrollBehavior::Smooth,
            }),
        }
    }

    /// Closes the throttle window, evaluating the last offset it swallowed.
    pub fn handle_timer(&mut self, ctx: &mut Context<'_>) {
        self.window_open = false;
        if let Some(offset) = self.pending.take() {
            self.evaluate(offset, ctx);
            self.open_window(ctx);
        }
    }

    fn open_window(&mut self, ctx: &mut Context<'_>) {
        if !self.throttle.is_zero() {
            self.window_open = true;
            ctx.schedule_after(self.throttle, TimerEvent::ScrollThrottle);
        }
    }

    fn evaluate(&mut self, offset: f64, ctx: &mut Context<'_>) {
        let visibility = Visibility::from_shown(offset > self.threshold);
        if visibility != self.visibility {
            self.visibility = visibility;
            ctx.emit(ViewCommand::ScrollTopButton(visibility));
        }
    }
}
