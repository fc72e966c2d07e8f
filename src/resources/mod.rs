//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions shared across entities
//! - `animconfig` – INI-backed playback settings for the headless player
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod animconfig;
pub mod worldtime;
