//! Typed leaf record of a benchmark report

use serde_json::{Number, Value};

/// Key holding the measured time of a record
pub const TIME_KEY: &str = "time";

/// Key holding the RMS error of a record
pub const RMS_KEY: &str = "rms";

/// The `time`/`rms` pair of one metric record.
///
/// Other fields of the record are left in the document and never read.
/// Numbers keep their source representation so a copied value serializes
/// exactly as it appeared in the report it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub time: Number,
    pub rms: Option<Number>,
}

impl MetricRecord {
    /// Read a record object. `time` must be a number; `rms` is optional here.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let record = value
            .as_object()
            .ok_or_else(|| format!("expected a metric record object, found {}", kind(value)))?;

        let time = match record.get(TIME_KEY) {
            Some(Value::Number(n)) => n.clone(),
            Some(other) => return Err(format!("`time` is not a number ({})", kind(other))),
            None => return Err("missing key `time`".to_string()),
        };

        let rms = match record.get(RMS_KEY) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };

        Ok(Self { time, rms })
    }

    /// Whether `time` differs numerically from `other`'s (`1` equals `1.0`).
    ///
    /// Two integers compare exactly; anything involving a float compares as `f64`.
    pub fn time_differs(&self, other: &MetricRecord) -> bool {
        let (a, b) = (&self.time, &other.time);
        if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
            return x != y;
        }
        if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
            return x != y;
        }
        a.as_f64() != b.as_f64()
    }
}

/// Short JSON type name used in mismatch messages
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
