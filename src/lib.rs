//! A small interactive 2D demo: shapes composed from components, moved by
//! a frame loop and drawn through swappable render strategies.

pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod entity;
pub mod menubar;
pub mod renderer;
pub mod strategies;
pub mod types;
