//! Catalog browser for community game mods.
//!
//! The [`core`] and [`models`] modules are plain Rust and run anywhere;
//! [`app`] and [`components`] are the Leptos front end.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
