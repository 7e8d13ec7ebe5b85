//! Integration tests for the walker tracing macros.
//!
//! Events are captured with a recording layer installed as the thread-local
//! default subscriber, so the tests never touch the global dispatcher.

use std::sync::{Arc, Mutex};

use logging::{VerbosityConfig, trace_descend, trace_walk, trace_walk_error, trace_walk_summary};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(String, Level)>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        self.events
            .lock()
            .expect("recorder lock")
            .push((metadata.target().to_owned(), *metadata.level()));
    }
}

fn record(config: VerbosityConfig, emit: impl FnOnce()) -> Vec<(String, Level)> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(config.directive()))
        .with(recorder.clone());
    tracing::subscriber::with_default(subscriber, emit);
    let events = recorder.events.lock().expect("recorder lock").clone();
    events
}

fn emit_all() {
    trace_walk_summary!("walking {:?}", "/tmp/tree");
    trace_walk!("opened directory {:?}", "/tmp/tree");
    trace_descend!("entering directory {:?}", "/tmp/tree/first");
    trace_walk_error!("halting traversal: {}", "permission denied");
}

#[test]
fn macros_use_walk_targets() {
    let events = record(VerbosityConfig::from_verbose_level(3), emit_all);
    assert_eq!(
        events,
        vec![
            ("walk::summary".to_owned(), Level::INFO),
            ("walk::flist".to_owned(), Level::DEBUG),
            ("walk::descend".to_owned(), Level::TRACE),
            ("walk::error".to_owned(), Level::DEBUG),
        ]
    );
}

#[test]
fn quiet_level_emits_nothing() {
    let events = record(VerbosityConfig::default(), emit_all);
    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn single_verbose_shows_walk_summaries() {
    let events = record(VerbosityConfig::from_verbose_level(1), emit_all);
    assert_eq!(events, vec![("walk::summary".to_owned(), Level::INFO)]);
}

#[test]
fn double_verbose_hides_descent_traces() {
    let events = record(VerbosityConfig::from_verbose_level(2), emit_all);
    let targets: Vec<_> = events.iter().map(|(target, _)| target.as_str()).collect();
    assert_eq!(targets, ["walk::summary", "walk::flist", "walk::error"]);
}
