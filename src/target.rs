//! Writable animation targets
//!
//! A target is a single writable property slot on an animation object, the
//! place an engine reads start values from and writes interpolated values
//! to. Targets are shared handles so one slot can sit in several actions.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

/// A property slot holding a value of type `T`.
pub trait WritableTarget<T> {
    /// Read the current value.
    fn get(&self) -> T;
    /// Overwrite the current value.
    fn set(&self, value: T);
}

/// Shared handle to a writable target.
pub type TargetHandle<T> = Rc<dyn WritableTarget<T>>;

impl<T: Copy> WritableTarget<T> for Cell<T> {
    fn get(&self) -> T {
        Cell::get(self)
    }

    fn set(&self, value: T) {
        Cell::set(self, value);
    }
}

impl<T: Clone> WritableTarget<T> for RefCell<T> {
    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

/// Adapt a getter/setter pair into a target handle.
///
/// Useful when the property lives behind an API rather than in a cell.
pub fn from_fns<T, G, S>(getter: G, setter: S) -> TargetHandle<T>
where
    T: 'static,
    G: Fn() -> T + 'static,
    S: Fn(T) + 'static,
{
    Rc::new(FnTarget {
        getter,
        setter,
        _value: PhantomData,
    })
}

struct FnTarget<T, G, S> {
    getter: G,
    setter: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, G, S> WritableTarget<T> for FnTarget<T, G, S>
where
    G: Fn() -> T,
    S: Fn(T),
{
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&self, value: T) {
        (self.setter)(value);
    }
}
