// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Pointer interaction state machines.
//!
//! Both machines are ephemeral view state: they never touch the network and
//! never outlive the gesture they track.

mod connect;
mod drag;

pub use connect::{ClickAction, EdgeCreationMode};
pub use drag::{DragController, DragError, DragOutcome};
