// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a toast notification system built with the Iced GUI framework.
//!
//! The core is [`ui::notifications::Manager`], which owns the visible
//! notification sequence and runs each notification through a two-phase exit
//! (leaving, then deleted). Around it sit a toast overlay widget, a demo
//! application shell, a signed-in user context, and a small HTTP route stub.

pub mod app;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod router;
pub mod session;
pub mod ui;

pub use app::config;
