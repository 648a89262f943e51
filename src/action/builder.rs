//! Two-stage action builders
//!
//! Stage one ([`ObjectBinder`]) fixes which objects an action is about,
//! stage two ([`ActionBuilder`]) accumulates deferred behavior, and the
//! `build*` methods resolve names to live objects through a caller-supplied
//! lookup. Until then nothing is evaluated, so one builder can stamp out
//! independent actions against many object graphs.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::vec;

use log::{debug, warn};

use crate::action::config::ActionConfig;
use crate::action::instance::TemplateAction;
use crate::binding::ObjectBinding;
use crate::curve::CurveHandle;
use crate::error::TemplateError;
use crate::event::FinishEvent;
use crate::target::TargetHandle;
use crate::Result;

/// Stage-one builder: binds logical object names to an expected type `N`.
pub struct ObjectBinder<N> {
    binding: Rc<ObjectBinding<N>>,
}

impl<N: 'static> ObjectBinder<N> {
    /// Create a binder addressing the default object
    pub fn new() -> Self {
        Self::named_all(Vec::<String>::new())
    }

    /// Create a binder addressing a single named object
    pub fn named(name: impl Into<String>) -> Self {
        Self::named_all([name.into()])
    }

    /// Create a binder addressing several named objects at once.
    ///
    /// Name order is preserved and an empty set falls back to the default
    /// object name.
    pub fn named_all<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            binding: Rc::new(ObjectBinding::new(names)),
        }
    }

    /// The names this binder addresses, in declaration order.
    #[inline]
    pub fn names(&self) -> &[String] {
        self.binding.names()
    }

    /// Human-readable name of the expected object type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.binding.type_name()
    }

    /// Start a sibling binder for a differently named (and typed) object.
    ///
    /// This exists for chain readability when one template touches several
    /// objects; the new binder is independent of `self`.
    pub fn with_object<M, S>(&self, name: S) -> ObjectBinder<M>
    where
        M: 'static,
        S: Into<String>,
    {
        ObjectBinder::named(name.into())
    }

    /// Start a sibling binder addressing several named objects.
    pub fn with_object_names<M, I, S>(&self, names: I) -> ObjectBinder<M>
    where
        M: 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ObjectBinder::named_all(names)
    }

    /// Enter stage two with one target slot shared by every resolved object.
    pub fn target<T: 'static>(&self, target: TargetHandle<T>) -> ActionBuilder<N, T> {
        self.target_with(move |_: &N| Rc::clone(&target))
    }

    /// Enter stage two with a target derived from each resolved object.
    pub fn target_with<T, F>(&self, accessor: F) -> ActionBuilder<N, T>
    where
        T: 'static,
        F: Fn(&N) -> TargetHandle<T> + 'static,
    {
        let mut builder = self.control::<T>();
        builder.config.targets.push(Rc::new(accessor));
        builder
    }

    /// Enter stage two as a target-less control action with a fixed gate.
    pub fn execute_when(&self, execute_when: bool) -> ActionBuilder<N, ()> {
        self.control().execute_when(execute_when)
    }

    /// Enter stage two as a target-less control action with a dynamic gate.
    pub fn execute_when_with<P>(&self, predicate: P) -> ActionBuilder<N, ()>
    where
        P: Fn(&N) -> bool + 'static,
    {
        self.control().execute_when_with(predicate)
    }

    /// Enter stage two as a permanently inert action.
    pub fn ignore(&self) -> ActionBuilder<N, ()> {
        self.control().ignore()
    }

    /// Enter stage two as a target-less action with a finish callback.
    pub fn on_finish<F>(&self, on_finish: F) -> ActionBuilder<N, ()>
    where
        F: Fn(&N, &FinishEvent) + 'static,
    {
        self.control().on_finish(on_finish)
    }

    /// Enter stage two as a target-less action with a fixed execution cap.
    pub fn executions(&self, executions: i32) -> ActionBuilder<N, ()> {
        self.control().executions(executions)
    }

    /// Enter stage two as a target-less action with a dynamic execution cap.
    pub fn executions_with<F>(&self, executions: F) -> ActionBuilder<N, ()>
    where
        F: Fn(&N) -> i32 + 'static,
    {
        self.control().executions_with(executions)
    }

    fn control<T: 'static>(&self) -> ActionBuilder<N, T> {
        ActionBuilder::new(Rc::clone(&self.binding))
    }
}

impl<N: 'static> Default for ObjectBinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for ObjectBinder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectBinder").field(&self.binding).finish()
    }
}

/// Stage-two builder: accumulates deferred behavior for actions on `N`
/// whose target slots hold values of type `T`.
///
/// Every setter comes in an eager form taking a plain value and a `_with`
/// form taking a function of the resolved object; the eager form is sugar
/// that wraps the value in a constant function. Later calls to the same
/// setter replace the earlier value. Target accessors are the exception:
/// they accumulate.
pub struct ActionBuilder<N, T> {
    binding: Rc<ObjectBinding<N>>,
    config: ActionConfig<N, T>,
    resolved: Option<Rc<N>>,
}

impl<N: 'static, T: 'static> ActionBuilder<N, T> {
    fn new(binding: Rc<ObjectBinding<N>>) -> Self {
        Self {
            binding,
            config: ActionConfig::default(),
            resolved: None,
        }
    }

    /// Add another target slot shared by every resolved object.
    pub fn and_target(self, target: TargetHandle<T>) -> Self {
        self.and_target_with(move |_: &N| Rc::clone(&target))
    }

    /// Add another target derived from each resolved object.
    pub fn and_target_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&N) -> TargetHandle<T> + 'static,
    {
        self.config.targets.push(Rc::new(accessor));
        self
    }

    /// Set a fixed interpolation end value.
    pub fn end_value(self, end_value: T) -> Self
    where
        T: Clone,
    {
        self.end_value_with(move |_: &N| end_value.clone())
    }

    /// Derive the interpolation end value from the resolved object.
    pub fn end_value_with<F>(mut self, end_value: F) -> Self
    where
        F: Fn(&N) -> T + 'static,
    {
        self.config.end_value = Rc::new(move |object: &N| Some(end_value(object)));
        self
    }

    /// Set a fixed interpolation curve.
    pub fn interpolator(self, curve: CurveHandle) -> Self {
        self.interpolator_with(move |_: &N| Some(Rc::clone(&curve)))
    }

    /// Derive the interpolation curve from the resolved object.
    ///
    /// Returning `None` leaves the action without a curve for that object.
    pub fn interpolator_with<F>(mut self, curve: F) -> Self
    where
        F: Fn(&N) -> Option<CurveHandle> + 'static,
    {
        self.config.curve = Rc::new(curve);
        self
    }

    /// Set a fixed execution gate.
    pub fn execute_when(self, execute_when: bool) -> Self {
        self.execute_when_with(move |_: &N| execute_when)
    }

    /// Gate execution on a predicate of the resolved object, re-evaluated
    /// on every query.
    pub fn execute_when_with<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&N) -> bool + 'static,
    {
        self.config.execute_when = Rc::new(predicate);
        self
    }

    /// Make the action permanently inert: gate closed and cap zero.
    pub fn ignore(self) -> Self {
        self.execute_when(false).executions(0)
    }

    /// Set the completion callback.
    pub fn on_finish<F>(mut self, on_finish: F) -> Self
    where
        F: Fn(&N, &FinishEvent) + 'static,
    {
        self.config.on_finish = Rc::new(on_finish);
        self
    }

    /// Set a fixed execution cap; [`crate::INFINITE_EXECUTIONS`] lifts the
    /// limit.
    pub fn executions(self, executions: i32) -> Self {
        self.executions_with(move |_: &N| executions)
    }

    /// Derive the execution cap from the resolved object, re-evaluated on
    /// every query.
    pub fn executions_with<F>(mut self, executions: F) -> Self
    where
        F: Fn(&N) -> i32 + 'static,
    {
        self.config.executions = Rc::new(executions);
        self
    }

    /// Resolve a single object through `lookup` and build an action for it.
    ///
    /// The lookup receives the bound names and is expected to produce the
    /// one object they denote. The resolved object is remembered, so
    /// further actions can be built from the same builder with [`build`]
    /// without resolving again.
    ///
    /// [`build`]: ActionBuilder::build
    pub fn build_with<L>(&mut self, lookup: L) -> Result<TemplateAction<N, T>>
    where
        L: FnOnce(&[String]) -> Option<Rc<dyn Any>>,
    {
        let names = self.binding.names();
        debug!(
            "resolve: looking up {:?} as {}",
            names,
            self.binding.type_name()
        );
        let candidate = lookup(names).ok_or_else(|| TemplateError::ObjectNotFound {
            names: names.to_vec(),
        })?;
        let object = downcast_object(candidate, &self.binding)?;
        self.resolved = Some(Rc::clone(&object));
        Ok(TemplateAction::new(
            Rc::clone(&self.binding),
            self.config.clone(),
            object,
        ))
    }

    /// Build one more action against the object resolved by the last
    /// [`build_with`], with a fresh execution counter.
    ///
    /// [`build_with`]: ActionBuilder::build_with
    pub fn build(&self) -> Result<TemplateAction<N, T>> {
        let object = self
            .resolved
            .clone()
            .ok_or_else(|| TemplateError::UnboundObject {
                names: self.binding.names().to_vec(),
            })?;
        Ok(TemplateAction::new(
            Rc::clone(&self.binding),
            self.config.clone(),
            object,
        ))
    }

    /// Resolve every object `lookup` yields for the bound names and build
    /// one action per object, lazily.
    ///
    /// The lookup runs exactly once, up front; type checking happens per
    /// element as the returned iterator is advanced, so one mismatched
    /// object yields an `Err` without suppressing its neighbors.
    pub fn build_many_with<L>(&self, lookup: L) -> ResolvedActions<N, T>
    where
        L: FnOnce(&[String]) -> Vec<Rc<dyn Any>>,
    {
        let names = self.binding.names();
        debug!(
            "resolve: looking up all of {:?} as {}",
            names,
            self.binding.type_name()
        );
        ResolvedActions {
            binding: Rc::clone(&self.binding),
            config: self.config.clone(),
            candidates: lookup(names).into_iter(),
        }
    }
}

impl<N, T> fmt::Debug for ActionBuilder<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionBuilder")
            .field("binding", &self.binding)
            .field("targets", &self.config.targets.len())
            .field("resolved", &self.resolved.is_some())
            .finish()
    }
}

/// Lazy iterator over actions produced by
/// [`build_many_with`](ActionBuilder::build_many_with).
///
/// Collect into `Result<Vec<_>, _>` to stop at the first failure instead.
pub struct ResolvedActions<N, T> {
    binding: Rc<ObjectBinding<N>>,
    config: ActionConfig<N, T>,
    candidates: vec::IntoIter<Rc<dyn Any>>,
}

impl<N: 'static, T: 'static> Iterator for ResolvedActions<N, T> {
    type Item = Result<TemplateAction<N, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidates.next()?;
        Some(downcast_object(candidate, &self.binding).map(|object| {
            TemplateAction::new(Rc::clone(&self.binding), self.config.clone(), object)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

fn downcast_object<N: 'static>(
    candidate: Rc<dyn Any>,
    binding: &ObjectBinding<N>,
) -> Result<Rc<N>> {
    candidate.downcast::<N>().map_err(|_| {
        warn!(
            "resolve: object for {:?} is not a {}",
            binding.names(),
            binding.type_name()
        );
        TemplateError::TypeMismatch {
            expected: binding.type_name().to_string(),
            names: binding.names().to_vec(),
        }
    })
}
