//! weatherdash - terminal weather dashboard
//!
//! The binary wires these modules into a tui-dispatch runtime; the library
//! exposes them for integration tests.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod effect;
pub mod glyphs;
pub mod logging;
pub mod reducer;
pub mod state;
