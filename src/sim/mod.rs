//! Deterministic ray simulation module
//!
//! All path generation lives here. This module must be pure and deterministic:
//! - Fixed step size only
//! - Explicit parameters, no ambient configuration
//! - No rendering or platform dependencies
//!
//! Identical inputs always produce bit-identical paths, so a scene can be
//! re-traced whenever a slider moves without re-reading the original gestures.

pub mod collision;
pub mod fan;
pub mod path;
pub mod rect;
pub mod scene;
pub mod trace;

pub use collision::{Deflection, deflect_walls};
pub use fan::expand;
pub use path::{Path, PathBuilder, Segment};
pub use rect::Rect;
pub use scene::{RayConfig, Scene};
pub use trace::trace;
