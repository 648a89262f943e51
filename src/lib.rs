//! # Animation Template
//!
//! Declarative action templates for property animations. A template
//! describes what an animation does to an object before any object
//! exists: a staged builder binds logical object names to an expected
//! type, accumulates behavior as functions of the not-yet-resolved
//! object, and only materializes concrete actions when a caller-supplied
//! lookup maps the names to live objects.
//!
//! ## Features
//!
//! - **Deferred evaluation**: end values, curves, gates and caps are
//!   stored as functions and re-evaluated against the bound object on
//!   every query
//! - **Late binding**: one template stamps out independent actions for
//!   any number of object graphs, with per-element type checking
//! - **Execution gating**: per-action monotonic counters with finite or
//!   unlimited caps decide when an action has run its course
//! - **Engine agnostic**: targets and curves are opaque handles; this
//!   crate never schedules time or interpolates values itself
//!
//! Everything here is meant for the single animation thread: behavior is
//! shared through `Rc` and evaluated synchronously, with no internal
//! locking.
//!
//! ## Example
//!
//! ```
//! use std::any::Any;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use animation_template::{ObjectBinder, TargetHandle};
//!
//! struct Button {
//!     opacity: Rc<Cell<f32>>,
//! }
//!
//! impl Button {
//!     fn opacity_target(&self) -> TargetHandle<f32> {
//!         self.opacity.clone()
//!     }
//! }
//!
//! // The engine owns the objects; the template only knows their names.
//! let button = Rc::new(Button {
//!     opacity: Rc::new(Cell::new(0.0)),
//! });
//!
//! let mut builder = ObjectBinder::<Button>::named("ok")
//!     .target_with(|b: &Button| b.opacity_target())
//!     .end_value(1.0)
//!     .executions(1);
//!
//! let mut action = builder.build_with(|_names: &[String]| {
//!     let candidate = Rc::clone(&button) as Rc<dyn Any>;
//!     Some(candidate)
//! })?;
//!
//! assert!(action.should_execute());
//! if let Some(target) = action.first_target() {
//!     target.set(action.end_value().unwrap_or_default());
//! }
//! action.add_execution(1);
//!
//! assert_eq!(button.opacity.get(), 1.0);
//! assert!(!action.should_execute());
//! # Ok::<(), animation_template::TemplateError>(())
//! ```

pub mod action;
pub mod binding;
pub mod curve;
pub mod error;
pub mod event;
pub mod executions;
pub mod target;

// Re-export common types for convenience
pub use action::{ActionBuilder, ObjectBinder, ResolvedActions, TemplateAction};
pub use binding::{ObjectBinding, DEFAULT_OBJECT_NAME};
pub use curve::{Curve, CurveHandle};
pub use error::TemplateError;
pub use event::FinishEvent;
pub use executions::{ExecutionCounter, ExecutionPhase, INFINITE_EXECUTIONS};
pub use target::{from_fns, TargetHandle, WritableTarget};

/// Template result type
pub type Result<T> = std::result::Result<T, TemplateError>;
