//! Pokedex TUI - PokeAPI lookup with live name autocomplete
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod autocomplete;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod presenter;
pub mod reducer;
pub mod sprite;
pub mod state;
