//! Ordered, individually gated setup steps.
//!
//! A [`Pipeline`] is a list of [`Step`] records evaluated in order by one
//! runner. Every step either runs, is disabled by its `enabled` predicate, or
//! is bypassed by its `skip` predicate. A failing step does not stop the
//! steps after it; all outcomes are collected into a [`RunReport`].

use crate::error::Error;
use log::{debug, info, warn};

type Predicate<C> = Box<dyn Fn(&C) -> bool>;
type SkipPredicate<C> = Box<dyn Fn(&C) -> Option<String>>;
type Task<C> = Box<dyn Fn(&C) -> crate::error::Result<()>>;

/// One named unit of work.
pub struct Step<C> {
    title: String,
    enabled: Option<Predicate<C>>,
    skip: Option<SkipPredicate<C>>,
    task: Task<C>,
}

impl<C> Step<C> {
    pub fn new<F>(title: impl Into<String>, task: F) -> Self
    where
        F: Fn(&C) -> crate::error::Result<()> + 'static,
    {
        Self { title: title.into(), enabled: None, skip: None, task: Box::new(task) }
    }

    /// Runs the step only when `predicate` holds.
    pub fn enabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.enabled = Some(Box::new(predicate));
        self
    }

    /// Bypasses the step with a reason when `predicate` returns one.
    pub fn skip<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> Option<String> + 'static,
    {
        self.skip = Some(Box::new(predicate));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn execute(&self, context: &C) -> StepOutcome {
        if let Some(enabled) = &self.enabled {
            if !enabled(context) {
                return StepOutcome::Disabled;
            }
        }
        if let Some(skip) = &self.skip {
            if let Some(reason) = skip(context) {
                return StepOutcome::Skipped(reason);
            }
        }
        match (self.task)(context) {
            Ok(()) => StepOutcome::Succeeded,
            Err(e) => StepOutcome::Failed(e),
        }
    }
}

/// Result of evaluating one step.
#[derive(Debug)]
pub enum StepOutcome {
    Succeeded,
    Failed(Error),
    /// Intentionally bypassed, with the reason shown to the user
    Skipped(String),
    /// Not applicable to this run
    Disabled,
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

/// Receives each outcome as soon as its step finishes.
pub trait StepObserver {
    fn step_started(&mut self, _title: &str) {}
    fn step_finished(&mut self, title: &str, outcome: &StepOutcome);
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn step_finished(&mut self, _title: &str, _outcome: &StepOutcome) {}
}

/// Outcomes of every step of one run, in pipeline order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(String, StepOutcome)>,
}

impl RunReport {
    pub fn outcomes(&self) -> &[(String, StepOutcome)] {
        &self.outcomes
    }

    /// Outcome of the step with the given title.
    pub fn outcome(&self, title: &str) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|(t, _)| t == title).map(|(_, o)| o)
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_failure())
    }

    /// Failed steps with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes.iter().filter_map(|(title, outcome)| match outcome {
            StepOutcome::Failed(e) => Some((title.as_str(), e)),
            _ => None,
        })
    }
}

/// Ordered list of steps sharing one context.
pub struct Pipeline<C> {
    steps: Vec<Step<C>>,
}

impl<C> Default for Pipeline<C> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<C> Pipeline<C> {
    pub fn new(steps: Vec<Step<C>>) -> Self {
        Self { steps }
    }

    pub fn push(&mut self, step: Step<C>) {
        self.steps.push(step);
    }

    pub fn titles(&self) -> Vec<&str> {
        self.steps.iter().map(Step::title).collect()
    }

    /// Runs every step in order, each one finished before the next starts.
    pub fn run(&self, context: &C, observer: &mut dyn StepObserver) -> RunReport {
        let mut report = RunReport::default();
        for step in &self.steps {
            debug!("Evaluating step '{}'", step.title);
            observer.step_started(&step.title);
            let outcome = step.execute(context);
            match &outcome {
                StepOutcome::Succeeded => info!("Step '{}' succeeded", step.title),
                StepOutcome::Failed(e) => warn!("Step '{}' failed: {}", step.title, e),
                StepOutcome::Skipped(reason) => info!("Step '{}' skipped: {}", step.title, reason),
                StepOutcome::Disabled => debug!("Step '{}' disabled", step.title),
            }
            observer.step_finished(&step.title, &outcome);
            report.outcomes.push((step.title.clone(), outcome));
        }
        report
    }
}
