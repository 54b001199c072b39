//! # Simple analog
//!
//! An analog watch face: hour and minute hands, tick marks around the dial and the week of the
//! year, redrawn once a minute.
//!
//! ---
//!
//! The face is host agnostic. The host supplies a [`Surface`] to draw on and the wall clock,
//! either with each minute tick or through a [`TimeSource`]; the face supplies the geometry.
//! Nothing here allocates or blocks, so a frame fits comfortably within the time budget of a
//! small display controller.
//!
//! - [`angle`] converts the time into hand angles, with the hour hand stepping every ten minutes
//! - [`geometry`] lays the dial out within the surface bounds
//! - [`hand`] holds the hand outlines and rotates them into place
//! - [`week`] numbers the weeks of the year under one of three policies
//! - [`face`] ties it together into a mountable [`Watchface`]
//!
//! ```ignore
//! let mut face = Watchface::new(FaceConfig::hour_ticks(Shape::Round));
//! let mut mounted = face.mount(&mut surface)?;
//!
//! // on every minute tick from the host
//! mounted.on_tick(now)?;
//! ```
//!
//! ## Features
//!
//! - `defmt`: log through [`defmt`](https://docs.rs/defmt) and derive `defmt::Format` for the
//!   public types

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod angle;
pub mod clock;
pub mod config;
pub mod face;
pub mod geometry;
pub mod hand;
pub mod surface;
pub mod week;

pub use angle::Angle;
pub use clock::{CalendarTime, ClockError, ClockTime, FixedClock, TimeSource};
pub use config::{ColorScheme, FaceConfig};
pub use face::{FaceError, Mounted, Watchface};
pub use geometry::{FaceGeometry, GeometryError, Shape, Tick, TickLengths};
pub use hand::{HandKind, HandShape};
pub use surface::{GraphicsSurface, Surface};
pub use week::{WeekLabel, WeekPolicy};
