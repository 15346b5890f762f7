pub mod controllers;
pub mod error;
pub mod lookup;
pub mod models;
pub mod state;
pub mod tui;
