//! # Connect Four
//!
//! A Connect Four engine with a minimax computer opponent. The engine owns
//! the grid as a plain value: callers apply moves through it and render or
//! transmit the result however they like; nothing here reads state back
//! from a display or a wire.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, minimax search with window evaluation, random opponent
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
