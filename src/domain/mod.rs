// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure page rules with no I/O and no timing.
//!
//! This module contains the value objects and business rules the feature
//! controllers build on. Nothing here touches the view or the clock, which
//! keeps every rule testable in isolation.
//!
//! # Modules
//!
//! - [`page`]: Page anchors consumed at startup ([`PageAnchors`](page::PageAnchors),
//!   [`ElementId`](page::ElementId))
//! - [`geometry`]: Viewport geometry ([`Rect`](geometry::Rect),
//!   [`RootMargin`](geometry::RootMargin))
//! - [`counter`]: Statistic counter parsing ([`CounterTarget`](counter::CounterTarget))
//! - [`validation`]: Contact form rules ([`Field`](validation::Field))
//! - [`filter`]: Event card matching ([`Category`](filter::Category),
//!   [`EventCard`](filter::EventCard))

pub mod counter;
pub mod filter;
pub mod geometry;
pub mod page;
pub mod validation;
