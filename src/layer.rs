use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use crate::Progress;

/// A `tracing` [`Layer`] that forwards a numeric field on events to a
/// [`Progress`] sink.
///
/// Events without the field pass through untouched. Integer values are
/// taken as they are, so report fractions, not percentages.
///
/// ```rust,ignore
/// let bar = Arc::new(ProgressBar::new());
/// tracing_subscriber::registry()
///     .with(progress_layer(bar.clone()))
///     .init();
///
/// tracing::info!(progress = 0.25, "indexing");
/// ```
pub struct ProgressLayer<P> {
    sink: P,
    field: &'static str,
}

impl<P: Progress> ProgressLayer<P> {
    /// Creates a layer reading the `progress` field.
    pub fn new(sink: P) -> Self {
        Self {
            sink,
            field: "progress",
        }
    }

    /// Reads `name` instead of `progress`.
    pub fn field(mut self, name: &'static str) -> Self {
        self.field = name;
        self
    }
}

/// Creates a [`ProgressLayer`] reporting into `sink`.
pub fn progress_layer<P: Progress>(sink: P) -> ProgressLayer<P> {
    ProgressLayer::new(sink)
}

impl<S, P> Layer<S> for ProgressLayer<P>
where
    S: Subscriber,
    P: Progress + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FractionVisitor {
            field: self.field,
            value: None,
        };
        event.record(&mut visitor);
        if let Some(value) = visitor.value {
            self.sink.report(value);
        }
    }
}

struct FractionVisitor {
    field: &'static str,
    value: Option<f64>,
}

impl Visit for FractionVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == self.field {
            self.value = Some(value);
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_f64(field, value as f64);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_f64(field, value as f64);
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::from_fn;

    fn capture(layer_field: Option<&'static str>, emit: impl FnOnce()) -> Vec<f64> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut layer = progress_layer(from_fn(move |v| sink.lock().unwrap().push(v)));
        if let Some(name) = layer_field {
            layer = layer.field(name);
        }
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        seen.lock().unwrap().clone()
    }

    #[test]
    fn forwards_progress_fields() {
        let seen = capture(None, || {
            tracing::info!(progress = 0.25, "step");
            tracing::info!("no progress here");
            tracing::info!(progress = 1u64, "done");
        });
        assert_eq!(seen, vec![0.25, 1.0]);
    }

    #[test]
    fn custom_field_name() {
        let seen = capture(Some("fraction"), || {
            tracing::info!(progress = 0.9, "ignored");
            tracing::info!(fraction = 0.5, "read");
        });
        assert_eq!(seen, vec![0.5]);
    }

    #[test]
    fn drives_a_progress_bar() {
        let bar = Arc::new(
            crate::ProgressBar::builder()
                .writer(Vec::new())
                .interactive(false)
                .build(),
        );
        let subscriber = tracing_subscriber::registry().with(progress_layer(bar.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(progress = 0.75, "almost");
        });
        assert_eq!(bar.fraction(), 0.75);
    }
}
