// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Skein — campaign mind-map editor core.
//!
//! Local graph state, pointer interaction state machines, pure SVG scene
//! derivation, and a REST sync client for one campaign's mind map. The crate
//! is headless: a UI shell feeds it pointer/click events and drains surfaced
//! notices; the server stays authoritative for all persisted state.

pub mod editor;
pub mod interact;
pub mod model;
pub mod remote;
pub mod render;
pub mod store;
