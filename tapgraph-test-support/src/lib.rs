//! Shared test utilities used across tapgraph crates.

pub mod tracing {
    //! Recording layer for asserting spans and events emitted under test.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that captures closed spans and emitted events so tests can
    /// assert instrumentation deterministically.
    ///
    /// # Examples
    /// ```
    /// use tapgraph_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(pairs = 3_u64, "done");
    /// });
    /// assert!(layer.has_event(tracing::Level::INFO, "done"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        capture: Arc<Mutex<Capture>>,
    }

    #[derive(Default)]
    struct Capture {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        fn lock(&self) -> MutexGuard<'_, Capture> {
            self.capture.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the first closed span called `name`, if any.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.lock().spans.iter().find(|span| span.name == name).cloned()
        }

        /// Reports whether an event with `level` and `message` was emitted.
        #[must_use]
        pub fn has_event(&self, level: Level, message: &str) -> bool {
            self.lock().events.iter().any(|event| {
                event.level == level && event.field("message") == Some(message)
            })
        }
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded against the span, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target.
        pub target: String,
        /// Fields attached to the event, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldCollector(&mut fields));
            span.extensions_mut().insert(OpenSpan(SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldCollector(&mut open.0.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
                self.lock().spans.push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector(&mut fields));
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }
}

pub mod reference {
    //! Known-good outputs of the reference generator for the default seed.
    //!
    //! Values were derived by hand from the tap formula
    //! `(w ^ w >> 16 ^ w >> 25 ^ w >> 30) & 1`.

    /// The first register states reached from the default seed.
    pub const STATE_STREAM: [u32; 8] = [
        0xb16b_00b5,
        0x58b5_805a,
        0x2c5a_c02d,
        0x962d_6016,
        0x4b16_b00b,
        0xa58b_5805,
        0x52c5_ac02,
        0xa962_d601,
    ];

    /// Triples for three vertices at probability level 8.
    pub const THREE_VERTICES_LEVEL_8: [(usize, usize, u8); 3] = [(0, 1, 1), (0, 2, 0), (1, 2, 0)];

    /// Register state after the three-vertex, level-8 session completes.
    pub const THREE_VERTICES_FINAL_STATE: u32 = 0x962d_6016;

    /// Triples for five vertices at probability level 8.
    pub const FIVE_VERTICES_LEVEL_8: [(usize, usize, u8); 10] = [
        (0, 1, 1),
        (0, 2, 0),
        (0, 3, 0),
        (0, 4, 1),
        (1, 2, 0),
        (1, 3, 1),
        (1, 4, 1),
        (2, 3, 1),
        (2, 4, 1),
        (3, 4, 1),
    ];

    /// Adjacency-list text for [`FIVE_VERTICES_LEVEL_8`].
    pub const FIVE_VERTICES_LEVEL_8_TEXT: &str = "0, 1, 1\n0, 2, 0\n0, 3, 0\n0, 4, 1\n1, 2, 0\n\
                                                  1, 3, 1\n1, 4, 1\n2, 3, 1\n2, 4, 1\n3, 4, 1\n";
}
