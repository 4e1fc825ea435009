//! Board state container for the EcoArchitect simulation.
//!
//! A [`Board`] holds everything the player has placed for the active
//! scenario and enforces the placement rules: affordability, capacity,
//! upgrade limits, connection uniqueness and refunds. It also carries the
//! scenario countdown. Scoring reads the board through
//! [`Board::snapshot`]; it never mutates it.
//!
//! # Modules
//!
//! - [`board`] -- The [`Board`] itself: queries and mutations.
//! - [`connect`] -- Two-click connection state machine.
//! - [`countdown`] -- Scenario countdown with single-shot expiry.
//! - [`error`] -- [`BoardError`], the reason a mutation was rejected.

pub mod board;
pub mod connect;
pub mod countdown;
pub mod error;

pub use board::Board;
pub use connect::ConnectMode;
pub use countdown::{Countdown, TickOutcome};
pub use error::BoardError;
