pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const BASIS_FIELD: &str = "basis";
pub const FORMULA_FIELD: &str = "formula";
pub const EQUIVALENT_FIELD: &str = "equivalent";

// log event types:
/// A formula is read from the input.
pub const FORMULA: &str = "@formula";

/// A formula is about to be reduced to a basis.
pub const REDUCE: &str = "@reduce";

/// A formula is reduced to a basis. The formula of the event is the result.
pub const REDUCED: &str = "@reduced";

/// A reduced formula is checked against its input.
pub const VERIFY: &str = "@verify";
