//! Deterministic per-key colors for avatars and labels.
//!
//! A [`ColorGenerator`] wraps a fixed palette and maps any hashable key to one
//! of its colors, always the same one for the same key. Two palettes are
//! shared process-wide; custom ones come from [`ColorGenerator::create`].
//!
//! ```
//! use keyhue::ColorGenerator;
//!
//! let material = ColorGenerator::material();
//! assert_eq!(material.get_color("alice"), material.get_color("alice"));
//! assert!(material.colors().contains(&material.random_color()));
//! ```
pub mod avatar;
pub mod color;
pub mod config;
pub mod generator;

pub use avatar::{Avatar, AvatarBuilder, Shape};
pub use color::{Color, ParseColorError};
pub use generator::{ColorGenerator, InvalidPaletteError};
