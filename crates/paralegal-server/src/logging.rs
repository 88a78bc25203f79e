use std::{collections::VecDeque, sync::Arc};

use tokio::sync::broadcast;

/// Mirrors every log event as a JSON line to `/api/logs` subscribers and
/// keeps the last `capacity` lines for replay.
pub(crate) struct BroadcastLayer {
    pub tx: broadcast::Sender<String>,
    pub ring: Arc<std::sync::Mutex<VecDeque<String>>>,
    pub capacity: usize,
}

struct MessageVisitor<'a> {
    message: &'a mut String,
}

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.clear();
            use std::fmt::Write;
            let _ = write!(self.message, "{value:?}");
            // Strip surrounding quotes added by Debug on &str
            if self.message.starts_with('"') && self.message.ends_with('"') && self.message.len() > 1 {
                *self.message = self.message[1..self.message.len() - 1].to_string();
            }
        }
    }
}

/// Log category shown in the UI, derived from the event target.
pub(crate) fn category(target: &str) -> &'static str {
    if target.contains("motion") {
        "motion"
    } else if target.contains("contract") {
        "contract"
    } else if target.contains("strategy") {
        "strategy"
    } else {
        "system"
    }
}

impl BroadcastLayer {
    pub(crate) fn publish(&self, json: String) {
        let _ = self.tx.send(json.clone());
        if let Ok(mut ring) = self.ring.lock() {
            ring.push_back(json);
            while ring.len() > self.capacity {
                ring.pop_front();
            }
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for BroadcastLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let level = match *event.metadata().level() {
            tracing::Level::ERROR => "err",
            tracing::Level::WARN => "warn",
            tracing::Level::INFO => "info",
            tracing::Level::DEBUG => "debug",
            tracing::Level::TRACE => return,
        };

        let mut message = String::new();
        event.record(&mut MessageVisitor {
            message: &mut message,
        });

        let json = serde_json::json!({
            "ts": chrono::Utc::now().timestamp(),
            "level": level,
            "message": message,
            "category": category(event.metadata().target()),
        })
        .to_string();

        self.publish(json);
    }
}
