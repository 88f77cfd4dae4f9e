//! Component trait system for the TUI
//!
//! Panels declare their capabilities through traits instead of App knowing
//! how to scroll, copy or route keys for each one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │     (orchestrator: owns widget + log, routes key events)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Input   │   │  Events  │   │   Logs   │
//!        │  Panel   │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - identity and focus-aware border styling
//! - [`Scrollable`] - shared scroll state and keys
//! - [`Copyable`] - clipboard content for `y` / `Y`
//! - [`Interactive`] - keyboard handling for the focused panel

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
