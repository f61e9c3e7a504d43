//! Shared test utilities and fixtures.

#![allow(dead_code)]

use guardrail::config::{BuildLevel, ContractConfig};
use guardrail::contract::{SourceLocation, ViolationInfo};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// Re-export canonical test utilities from guardrail::testing
#[allow(unused_imports)]
pub use guardrail::testing::{catch_violation, lock, panicking_handler};

// ============================================================================
// RECORDING HANDLER
// ============================================================================

static RECORDED: Mutex<Vec<ViolationInfo>> = parking_lot::const_mutex(Vec::new());

/// Handler that stores every violation it sees and returns.
pub fn recording_handler(info: ViolationInfo) {
    RECORDED.lock().push(info);
}

/// Drain everything [`recording_handler`] has seen so far.
pub fn take_recorded() -> Vec<ViolationInfo> {
    std::mem::take(&mut *RECORDED.lock())
}

// ============================================================================
// CONFIGURATIONS
// ============================================================================

/// Handler returns are allowed; nothing terminates.
pub fn continuing(level: BuildLevel) -> ContractConfig {
    ContractConfig::new(level).with_continue_on_violation(true)
}

/// Fatal paths unwind with a `ContractViolation` instead of aborting.
pub fn compliant(level: BuildLevel) -> ContractConfig {
    ContractConfig::new(level).with_autosar_compliant(true)
}

/// A fixed location, so assertions on file and line are stable.
pub fn fixture_location(line: u32) -> SourceLocation {
    SourceLocation::new("src/fixture.rs", "fixture::run", line, 1)
}

// ============================================================================
// TRACING CAPTURE
// ============================================================================

/// One `tracing` event, with every field rendered to a string.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

/// Run `f` with a thread-local subscriber and return every event it emitted.
pub fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = std::mem::take(&mut *events.lock());
    (result, captured)
}
