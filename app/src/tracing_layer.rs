// In app/src/tracing_layer.rs

use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;

/// Timestamp layout of a log line, e.g. `2024-05-01 09:30:00,125`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Writes every event as `<timestamp> - <LEVEL> - <message>` to a single sink.
///
/// Only the message is written. Structured fields such as `stage` or `kind`
/// stay on the stderr layer so file lines keep a fixed shape.
pub struct LogFileLayer<W> {
    sink: Mutex<W>,
}

impl<W: Write> LogFileLayer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl<S, W> Layer<S> for LogFileLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = LogMessageVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} - {} - {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level(),
            visitor.message
        );

        // A poisoned sink only means an earlier write panicked; keep logging.
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = sink.write_all(line.as_bytes()).and_then(|()| sink.flush());
    }
}

// Captures the `message` field; every other field is ignored.
#[derive(Default)]
struct LogMessageVisitor {
    message: String,
}

impl tracing::field::Visit for LogMessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
