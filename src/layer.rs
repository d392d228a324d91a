//! Bridges the host's `tracing` pipeline into the overlay: registered next
//! to the usual fmt layer, it turns every event into a [`RawLogEvent`] and
//! hands it to an [`OverlaySink`].

use crate::overlay::OverlaySink;
use crate::record::RawLogEvent;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

pub struct OverlayLayer {
    sink: OverlaySink,
}

impl OverlayLayer {
    pub fn new(sink: OverlaySink) -> Self {
        Self { sink }
    }
}

impl<S: tracing::Subscriber> Layer<S> for OverlayLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut raw = RawLogEvent::new((*event.metadata().level()).into(), visitor.message);
        if let Some(error) = visitor.error {
            raw = raw.with_exception(error);
        }
        self.sink.emit(raw);
    }
}

/// Pulls the `message` and `error` fields out of an event. Format-string
/// messages arrive through `record_debug`; plain `&str` messages come
/// through `record_str`.
#[derive(Default)]
struct EventVisitor {
    message: String,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message.push_str(value),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        use std::fmt::Write;
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            "error" => self.error = Some(format!("{value:?}")),
            _ => {}
        }
    }
}
