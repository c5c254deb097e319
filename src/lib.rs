//! Bingo caller
//!
//! Draws unique numbers from a fixed range in shuffled order, shows the
//! current number with a short history, and lists every number drawn so far
//! in a grid. Two buttons drive the whole game.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
pub mod platform;
pub mod ui;
