//! Deferred behavior configuration
//!
//! All behavior on an action is stored as functions of the bound object and
//! evaluated only when the action is queried. Cloning a config shares the
//! function values, so actions built from one builder alias the same
//! behavior; only per-action state (the execution counter) is independent.

use std::rc::Rc;

use crate::curve::CurveHandle;
use crate::event::FinishEvent;
use crate::executions::INFINITE_EXECUTIONS;
use crate::target::TargetHandle;

/// Selects one writable target slot on the bound object.
pub type TargetFn<N, T> = dyn Fn(&N) -> TargetHandle<T>;
/// Computes the interpolation end value from the bound object.
pub type EndValueFn<N, T> = dyn Fn(&N) -> Option<T>;
/// Picks the interpolation curve for the bound object, if any.
pub type CurveFn<N> = dyn Fn(&N) -> Option<CurveHandle>;
/// Per-object gating predicate.
pub type ExecuteWhenFn<N> = dyn Fn(&N) -> bool;
/// Completion callback, invoked with the bound object and the finish event.
pub type OnFinishFn<N> = dyn Fn(&N, &FinishEvent);
/// Computes the execution cap for the bound object.
pub type ExecutionsFn<N> = dyn Fn(&N) -> i32;

pub(crate) struct ActionConfig<N, T> {
    pub(crate) targets: Vec<Rc<TargetFn<N, T>>>,
    pub(crate) end_value: Rc<EndValueFn<N, T>>,
    pub(crate) curve: Rc<CurveFn<N>>,
    pub(crate) execute_when: Rc<ExecuteWhenFn<N>>,
    pub(crate) on_finish: Rc<OnFinishFn<N>>,
    pub(crate) executions: Rc<ExecutionsFn<N>>,
}

impl<N, T> Default for ActionConfig<N, T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            end_value: Rc::new(|_: &N| None),
            curve: Rc::new(|_: &N| None),
            execute_when: Rc::new(|_: &N| true),
            on_finish: Rc::new(|_: &N, _: &FinishEvent| {}),
            executions: Rc::new(|_: &N| INFINITE_EXECUTIONS),
        }
    }
}

impl<N, T> Clone for ActionConfig<N, T> {
    fn clone(&self) -> Self {
        Self {
            targets: self.targets.clone(),
            end_value: Rc::clone(&self.end_value),
            curve: Rc::clone(&self.curve),
            execute_when: Rc::clone(&self.execute_when),
            on_finish: Rc::clone(&self.on_finish),
            executions: Rc::clone(&self.executions),
        }
    }
}
