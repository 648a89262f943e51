//! Resolved action instances

use std::fmt;
use std::rc::Rc;

use log::debug;
use uuid::Uuid;

use crate::action::config::ActionConfig;
use crate::binding::ObjectBinding;
use crate::curve::CurveHandle;
use crate::event::FinishEvent;
use crate::executions::{ExecutionCounter, ExecutionPhase, INFINITE_EXECUTIONS};
use crate::target::TargetHandle;

/// One action bound to one live object.
///
/// All behavior configured on the builder stays deferred: every getter
/// below re-applies the stored function to the bound object, so dynamic
/// gates, caps and end values observe current object state. The only
/// mutable state owned by the action is its execution counter.
pub struct TemplateAction<N, T> {
    id: Uuid,
    binding: Rc<ObjectBinding<N>>,
    config: ActionConfig<N, T>,
    object: Rc<N>,
    counter: ExecutionCounter,
}

impl<N: 'static, T: 'static> TemplateAction<N, T> {
    pub(crate) fn new(
        binding: Rc<ObjectBinding<N>>,
        config: ActionConfig<N, T>,
        object: Rc<N>,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(
            "bind: action {} attached to {} {:?}",
            id,
            binding.type_name(),
            binding.names()
        );
        Self {
            id,
            binding,
            config,
            object,
            counter: ExecutionCounter::new(),
        }
    }

    /// Unique id of this action instance
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The bound object.
    #[inline]
    pub fn object(&self) -> &N {
        &self.object
    }

    /// The logical names this action was resolved from.
    #[inline]
    pub fn names(&self) -> &[String] {
        self.binding.names()
    }

    /// Current execution cap, clamped to at least [`INFINITE_EXECUTIONS`].
    ///
    /// Re-derived from the bound object on every call, so a dynamic cap
    /// function sees current object state.
    pub fn executions(&self) -> i32 {
        (self.config.executions)(self.object()).max(INFINITE_EXECUTIONS)
    }

    /// Record up to `count` completed executions against the current cap.
    ///
    /// Negative counts are ignored. Under a finite cap the counter
    /// saturates at the cap; under the infinite sentinel it keeps growing.
    pub fn add_execution(&mut self, count: i32) {
        let cap = self.executions();
        self.counter.advance(count, cap);
    }

    /// Executions recorded so far.
    #[inline]
    pub fn execution_count(&self) -> i32 {
        self.counter.count()
    }

    /// Executions still available, or [`INFINITE_EXECUTIONS`] when
    /// unlimited.
    #[inline]
    pub fn remaining_executions(&self) -> i32 {
        self.counter.remaining(self.executions())
    }

    /// Whether the counter still permits at least one execution.
    #[inline]
    pub fn has_remaining_executions(&self) -> bool {
        self.counter.has_remaining(self.executions())
    }

    /// Lifecycle phase of the counter under the current cap.
    #[inline]
    pub fn execution_phase(&self) -> ExecutionPhase {
        self.counter.phase(self.executions())
    }

    /// Evaluate the execution gate against the bound object.
    pub fn execute_when(&self) -> bool {
        (self.config.execute_when)(self.object())
    }

    /// Whether the action should run now: gate open and executions left.
    pub fn should_execute(&self) -> bool {
        self.has_remaining_executions() && self.execute_when()
    }

    /// Evaluate the end value against the bound object, if one was set.
    pub fn end_value(&self) -> Option<T> {
        (self.config.end_value)(self.object())
    }

    /// Evaluate the interpolation curve against the bound object, if any.
    pub fn interpolator(&self) -> Option<CurveHandle> {
        (self.config.curve)(self.object())
    }

    /// The first configured target slot, already applied to the object.
    ///
    /// `None` only for target-less control actions.
    pub fn first_target(&self) -> Option<TargetHandle<T>> {
        self.config
            .targets
            .first()
            .map(|accessor| accessor(self.object()))
    }

    /// Apply every target accessor to the object and map the handles.
    ///
    /// Yields targets in the order their accessors were added.
    pub fn map_targets<'a, M, F>(&'a self, mut mapping: F) -> impl Iterator<Item = M> + 'a
    where
        F: FnMut(TargetHandle<T>) -> M + 'a,
    {
        self.config
            .targets
            .iter()
            .map(move |accessor| mapping(accessor(self.object())))
    }

    /// Invoke the finish callback with the bound object and `event`.
    pub fn handle_finish(&self, event: &FinishEvent) {
        (self.config.on_finish)(self.object(), event);
    }
}

impl<N, T> fmt::Debug for TemplateAction<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateAction")
            .field("id", &self.id)
            .field("object_type", &self.binding.type_name())
            .field("names", &self.binding.names())
            .field("targets", &self.config.targets.len())
            .field("counter", &self.counter)
            .finish()
    }
}
