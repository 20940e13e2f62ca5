use kiln::error::Error;
use kiln::pipeline::{NoopObserver, Pipeline, Step, StepObserver, StepOutcome};
use std::cell::RefCell;

#[derive(Default)]
struct Flags {
    enabled: bool,
    requested: bool,
    log: RefCell<Vec<&'static str>>,
}

fn record(name: &'static str) -> impl Fn(&Flags) -> kiln::error::Result<()> {
    move |flags: &Flags| {
        flags.log.borrow_mut().push(name);
        Ok(())
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl StepObserver for Recorder {
    fn step_started(&mut self, title: &str) {
        self.events.push(format!("start {title}"));
    }

    fn step_finished(&mut self, title: &str, outcome: &StepOutcome) {
        let kind = match outcome {
            StepOutcome::Succeeded => "ok",
            StepOutcome::Failed(_) => "failed",
            StepOutcome::Skipped(_) => "skipped",
            StepOutcome::Disabled => "disabled",
        };
        self.events.push(format!("{kind} {title}"));
    }
}

#[test]
fn test_steps_run_in_order() {
    let pipeline: Pipeline<Flags> = Pipeline::new(vec![
        Step::new("one", record("one")),
        Step::new("two", record("two")),
        Step::new("three", record("three")),
    ]);
    let flags = Flags::default();

    let report = pipeline.run(&flags, &mut NoopObserver);

    assert_eq!(*flags.log.borrow(), vec!["one", "two", "three"]);
    assert!(!report.has_failures());
    assert_eq!(pipeline.titles(), vec!["one", "two", "three"]);
}

#[test]
fn test_failure_does_not_stop_later_steps() {
    let pipeline: Pipeline<Flags> = Pipeline::new(vec![
        Step::new("first", record("first")),
        Step::new("broken", |_: &Flags| Err(Error::ValidationError("boom".to_string()))),
        Step::new("last", record("last")),
    ]);
    let flags = Flags::default();

    let report = pipeline.run(&flags, &mut NoopObserver);

    assert_eq!(*flags.log.borrow(), vec!["first", "last"]);
    assert!(report.has_failures());
    assert!(matches!(report.outcome("last"), Some(StepOutcome::Succeeded)));
    let failures: Vec<&str> = report.failures().map(|(title, _)| title).collect();
    assert_eq!(failures, vec!["broken"]);
}

#[test]
fn test_disabled_and_skipped_are_distinct() {
    let mut pipeline: Pipeline<Flags> = Pipeline::default();
    pipeline.push(Step::new("gated", record("gated")).enabled(|f: &Flags| f.enabled));
    pipeline.push(
        Step::new("optional", record("optional"))
            .skip(|f: &Flags| (!f.requested).then(|| "not requested".to_string())),
    );
    let flags = Flags::default();

    let report = pipeline.run(&flags, &mut NoopObserver);

    assert!(flags.log.borrow().is_empty());
    assert!(matches!(report.outcome("gated"), Some(StepOutcome::Disabled)));
    match report.outcome("optional") {
        Some(StepOutcome::Skipped(reason)) => assert_eq!(reason, "not requested"),
        other => panic!("Expected skipped outcome, got {other:?}"),
    }
    assert!(!report.has_failures());
}

#[test]
fn test_enabled_steps_run() {
    let pipeline: Pipeline<Flags> = Pipeline::new(vec![
        Step::new("gated", record("gated")).enabled(|f: &Flags| f.enabled),
        Step::new("optional", record("optional"))
            .skip(|f: &Flags| (!f.requested).then(|| "not requested".to_string())),
    ]);
    let flags = Flags { enabled: true, requested: true, ..Default::default() };

    pipeline.run(&flags, &mut NoopObserver);

    assert_eq!(*flags.log.borrow(), vec!["gated", "optional"]);
}

#[test]
fn test_observer_sees_each_step_finish_before_next_starts() {
    let pipeline: Pipeline<Flags> = Pipeline::new(vec![
        Step::new("a", record("a")),
        Step::new("b", |_: &Flags| Err(Error::ValidationError("b".to_string()))),
        Step::new("c", record("c")).enabled(|_: &Flags| false),
    ]);
    let mut recorder = Recorder::default();

    pipeline.run(&Flags::default(), &mut recorder);

    assert_eq!(
        recorder.events,
        vec!["start a", "ok a", "start b", "failed b", "start c", "disabled c"]
    );
}
