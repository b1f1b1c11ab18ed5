//! SEXTANT Navigation System
//!
//! Decides which route the fragment names and runs the lifecycle
//! transition between the outgoing and incoming views:
//!
//! ```text
//! Idle → Resolving → Deactivating → Draining → Activating → Rendering → Idle
//! ```
//!
//! The whole sequence is synchronous and run-to-completion; once
//! resolution succeeds no step is skipped.

mod controller;
mod error;
mod exit_stack;
mod resolver;

pub use controller::{NavPhase, NavigationController};
pub use error::NavigationError;
pub use exit_stack::{ExitFn, ExitStack};
pub use resolver::{resolve, Resolution};

pub type Result<T> = std::result::Result<T, NavigationError>;
