//! Interpolation curve handles
//!
//! Actions carry curves as opaque handles: the template machinery stores
//! and returns them without ever invoking them, leaving evaluation to the
//! driving engine.

use std::rc::Rc;

/// An easing curve over normalized animation progress.
pub trait Curve {
    /// Map an input fraction `t` in `[0, 1]` to an eased output fraction.
    fn ease(&self, t: f32) -> f32;
}

/// Shared handle to a curve, cheap to clone into action config.
pub type CurveHandle = Rc<dyn Curve>;

/// Any `f32 -> f32` function is usable as a curve directly.
impl<F> Curve for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn ease(&self, t: f32) -> f32 {
        self(t)
    }
}
