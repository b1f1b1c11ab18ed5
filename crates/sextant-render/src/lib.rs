//! SEXTANT Rendering Boundary
//!
//! All presentation side effects go through the `RenderSurface` and
//! `Location` capability traits, so the navigation core runs without a
//! real rendering environment. `HeadlessSurface` and `MemoryLocation`
//! are complete in-memory implementations used by tests and headless
//! embedders.

mod headless;
mod location;
mod surface;

pub use headless::HeadlessSurface;
pub use location::{Location, MemoryLocation};
pub use surface::{ElementHandle, RenderSurface};
