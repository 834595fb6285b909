//! # Gesture Particles
//!
//! A real-time hand-gesture driven particle field engine built with Rust.
//!
//! ## Features
//!
//! - **Gesture Classification**: Stateless per-frame classification of hand
//!   landmarks into openness, pinch and hand-distance signals
//! - **Procedural Shapes**: Five deterministic-or-seeded particle shape
//!   families (sphere, heart, flower, firework, nebula)
//! - **Simulation**: Gravity-integrated firework variant plus exponential
//!   smoothing of scale/rotation targets
//! - **Pipeline Abstraction**: Camera/ML detector and renderer are modeled as
//!   capability traits, so the core runs without any real camera or GPU
//! - **Configuration**: TOML/JSON config files with env overrides
//!
//! ## Architecture Design
//!
//! The engine is a single-threaded cooperative core: a host animation loop
//! drives one `tick(dt)` per displayed frame. Within a tick the engine polls
//! the landmark source, classifies the latest frame, feeds the resulting
//! targets into the particle field, advances the simulation, and hands the
//! position buffer to the render sink.
//!
//! ### Example
//!
//! ```ignore
//! use gesture_particles::core::Engine;
//! use gesture_particles::config::EngineConfig;
//!
//! let mut engine = Engine::new(EngineConfig::load_or_default(), source, sink);
//! loop {
//!     engine.tick(1.0 / 60.0);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Engine entry point, frame loop and error types
//! - [`gesture`]: Hand landmark model and the gesture classifier
//! - [`particles`]: Shape generators and the particle field simulation
//! - [`pipeline`]: Capability traits for the landmark source and render sink
//! - [`config`]: Configuration system

/// Core engine functionality including the frame loop and error types
pub mod core;
/// Hand landmark data model and gesture classification
pub mod gesture;
/// Procedural shape generation and particle field simulation
pub mod particles;
/// Capability traits for external collaborators (camera pipeline, renderer)
pub mod pipeline;
/// Configuration system
pub mod config;
