//! Drag-and-drop core for the treasure map puzzle.
//!
//! Eight numbered map pieces start shuffled in a staging area and must be
//! dragged into the grid slot carrying the same number. This crate owns the
//! whole game logic: translating pointer and touch input into one drag state
//! machine, hit-testing slots by coordinate, validating placements, and
//! tracking completion. Rendering, audio and the win banner are collaborators
//! reached through the [`session::Surface`] and [`session::FeedbackSink`]
//! traits; on `wasm32` the [`web`] module provides browser implementations of
//! both and exports a [`web::WebGame`] handle to the host page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | `GameSession`: reset/teardown lifecycle and collaborator wiring |
//! | [`engine`] | `PuzzleCore`: the drag controller and the [`engine::Action`]s it emits |
//! | [`input`] | Input events, input sources and the drag state |
//! | [`markup`] | Piece node attributes and id parsing shared with the DOM surface |
//! | [`hit`] | The `HitTester` capability and the geometric `GridLayout` |
//! | [`piece`] | Piece and slot identifiers, locations, the piece registry |
//! | [`slot`] | Slot occupancy |
//! | [`placement`] | The placement validator |
//! | [`completion`] | The completion set |
//! | [`shuffle`] | Fisher–Yates shuffle |
//! | [`geom`] | Points, sizes and rectangles in CSS pixels |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (piece count, delays, class names) |

pub mod completion;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod markup;
pub mod piece;
pub mod placement;
pub mod session;
pub mod shuffle;
pub mod slot;

#[cfg(target_arch = "wasm32")]
pub mod web;
