use serde_derive::{Deserialize, Serialize};
use std::{
    fmt,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes a `ReductionRecord` for every reduction event into a
/// given writer, one record per line.
pub struct JsonLogger<W: Write> {
    log_file: Mutex<W>,
    next_span: AtomicU64,
}

impl<W: Write> JsonLogger<W> {
    pub fn new(log_file: W) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            next_span: AtomicU64::new(1),
        }
    }
}

impl<W: Write + Send + 'static> subscriber::Subscriber for JsonLogger<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(self.next_span.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        let record = match recorder.event.as_deref() {
            Some(super::FORMULA)
            | Some(super::REDUCE)
            | Some(super::REDUCED)
            | Some(super::VERIFY) => {
                ReductionRecord::try_from(recorder).ok()
            }
            _ => None,
        };

        if let Some(record) = record {
            if let Ok(line) = serde_json::to_string(&record) {
                let _ = self
                    .log_file
                    .lock()
                    .map(|mut file| writeln!(file, "{}", line));
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing the formula of a reduction event and the basis it is reduced to. Records
/// of verification events also tell whether the reduced formula is equivalent to its input.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ReductionRecord {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub basis: Option<String>,
    pub formula: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub equivalent: Option<bool>,
}

impl ReductionRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        match (value.event, value.formula) {
            (Some(event), Some(formula)) => Ok(ReductionRecord {
                event,
                basis: value.basis,
                formula,
                equivalent: value.equivalent,
            }),
            _ => Err(()),
        }
    }
}

/// Generic trace visitor to collect the fields of reduction events.
struct Recorder {
    event: Option<String>,
    basis: Option<String>,
    formula: Option<String>,
    equivalent: Option<bool>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            basis: None,
            formula: None,
            equivalent: None,
        }
    }
}

impl field::Visit for Recorder {
    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::EQUIVALENT_FIELD {
            self.equivalent = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value.to_owned()),
            super::BASIS_FIELD => self.basis = Some(value.to_owned()),
            super::FORMULA_FIELD => self.formula = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::BASIS_FIELD => self.basis = Some(format!("{:?}", value)),
            super::FORMULA_FIELD => self.formula = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
