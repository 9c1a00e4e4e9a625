//! Tearable 2D Verlet cloth with interactive cutting.
//!
//! `tearcloth` simulates a hanging mass-spring cloth on a fixed-rate tick:
//! Verlet integration with implicit velocity, iterative distance-constraint
//! relaxation, viewport wall collisions, tearing under excess stretch, and
//! cutting the link nearest to a cursor.
//!
//! # Features
//!
//! - **Verlet integration**: velocity is derived from position history
//! - **Rigid and elastic links**: elastic links go slack under compression
//! - **Tearing**: overstretched links are dropped, order of the rest preserved
//! - **Cutting**: nearest-midpoint query against the cursor
//! - **Observable**: monitor ticks, tears and cuts via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tearcloth::{ClothConfig, NoOpStepObserver, SimConfig, Simulation, TickInput, Vec2};
//!
//! let mut sim = Simulation::from_config(
//!     &ClothConfig::new(10, 5, 10.0f32, Vec2::new(50.0, 20.0)),
//!     SimConfig::new(),
//! )?;
//! for _ in 0..60 {
//!     sim.step(&TickInput::idle(), &mut NoOpStepObserver);
//! }
//! sim.step(&TickInput::cut_at(Vec2::new(95.0, 25.0)), &mut NoOpStepObserver);
//! assert!(sim.cloth().link_count() < 85);
//! # Ok::<(), tearcloth::ClothError>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point_mass;
pub mod link;
pub mod cloth;
pub mod bounds;
pub mod query;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use point_mass::PointMass;
pub use link::{Link, Material, Relaxation};
pub use cloth::Cloth;
pub use bounds::Bounds;
pub use query::{link_within, nearest_link, NearestLink};
pub use simulation::{Simulation, TickInput};
pub use config::{ClothConfig, SimConfig};
pub use observer::{NoOpStepObserver, StepObserver, TearCounter};
pub use error::ClothError;
