// File: crates/chart-core/src/record.rs
// Summary: Cyclist record model and numeric coercion from the raw JSON dataset.

use serde::Deserialize;
use serde_json::Value as Json;

/// Errors raised while turning the fetched JSON into records. All of them are fatal for a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("dataset must be a JSON array, got {0}")]
    NotAnArray(&'static str),
    #[error("record {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index}: field '{field}' is not numeric ({value})")]
    NotNumeric { index: usize, field: &'static str, value: String },
    #[error("record {index}: {message}")]
    Malformed { index: usize, message: String },
}

/// One chart point. Immutable once coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub place: Option<u32>,
    pub seconds: f64,
    pub year: i32,
    pub name: String,
    pub nationality: String,
    pub time: String,
    pub doping: String,
}

impl Record {
    /// A record is flagged when it carries any doping-allegation text.
    pub fn is_flagged(&self) -> bool {
        !self.doping.is_empty()
    }

    /// Per-point label text, e.g. `Marco Pantani (1995)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}

/// Wire shape of one dataset entry; numeric fields arrive as numbers or numeric text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Place", default)]
    place: Option<Json>,
    #[serde(rename = "Seconds", default)]
    seconds: Option<Json>,
    #[serde(rename = "Year", default)]
    year: Option<Json>,
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Nationality", default)]
    nationality: Option<String>,
    #[serde(rename = "Time", default)]
    time: Option<String>,
    #[serde(rename = "Doping", default)]
    doping: Option<String>,
}

/// Coerce a JSON number or numeric string to `f64`. `None` for null/absent.
fn coerce_number(
    index: usize,
    field: &'static str,
    value: Option<&Json>,
) -> Result<Option<f64>, DataError> {
    let not_numeric = |v: &Json| DataError::NotNumeric { index, field, value: v.to_string() };
    match value {
        None | Some(Json::Null) => Ok(None),
        Some(v @ Json::Number(_)) => v.as_f64().map(Some).ok_or_else(|| not_numeric(v)),
        Some(v) => {
            let text = v.as_str().map(str::trim).ok_or_else(|| not_numeric(v))?;
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Some)
                .ok_or_else(|| not_numeric(v))
        }
    }
}

fn require(index: usize, field: &'static str, v: Option<f64>) -> Result<f64, DataError> {
    v.ok_or(DataError::MissingField { index, field })
}

impl RawRecord {
    fn coerce(self, index: usize) -> Result<Record, DataError> {
        let seconds = require(index, "Seconds", coerce_number(index, "Seconds", self.seconds.as_ref())?)?;
        let year = require(index, "Year", coerce_number(index, "Year", self.year.as_ref())?)?;
        let place = coerce_number(index, "Place", self.place.as_ref())?;
        let name = self.name.ok_or(DataError::MissingField { index, field: "Name" })?;
        Ok(Record {
            place: place.map(|p| p.max(0.0) as u32),
            seconds,
            year: year as i32,
            name,
            nationality: self.nationality.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            doping: self.doping.unwrap_or_default(),
        })
    }
}

fn json_kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Coerce a parsed dataset into records, preserving source order.
pub fn records_from_json(value: &Json) -> Result<Vec<Record>, DataError> {
    let items = value.as_array().ok_or_else(|| DataError::NotAnArray(json_kind(value)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw = RawRecord::deserialize(item)
                .map_err(|e| DataError::Malformed { index, message: e.to_string() })?;
            raw.coerce(index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_numbers_and_numeric_text() {
        let data = json!([
            {"Time": "36:50", "Place": 1, "Seconds": 2210, "Name": "Marco Pantani", "Year": 1995,
             "Nationality": "ITA", "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
             "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"},
            {"Time": "36:55", "Place": "2", "Seconds": "2215", "Name": "Marco Pantani", "Year": "1997",
             "Nationality": "ITA", "Doping": ""}
        ]);
        let records = records_from_json(&data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seconds, 2210.0);
        assert_eq!(records[1].seconds, 2215.0);
        assert_eq!(records[1].place, Some(2));
        assert_eq!(records[1].year, 1997);
        assert!(records[0].is_flagged());
        assert!(!records[1].is_flagged());
        assert_eq!(records[0].label(), "Marco Pantani (1995)");
    }

    #[test]
    fn whitespace_doping_text_still_flags() {
        let data = json!([
            {"Seconds": 1, "Year": 2000, "Name": "x", "Doping": " "},
            {"Seconds": 2, "Year": 2001, "Name": "y", "Doping": ""}
        ]);
        let records = records_from_json(&data).unwrap();
        assert!(records[0].is_flagged());
        assert!(!records[1].is_flagged());
    }

    #[test]
    fn preserves_source_order() {
        let data = json!([
            {"Seconds": 30, "Year": 2000, "Name": "c"},
            {"Seconds": 10, "Year": 2001, "Name": "a"},
            {"Seconds": 20, "Year": 2002, "Name": "b"}
        ]);
        let names: Vec<_> = records_from_json(&data).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn optional_text_fields_default_to_empty() {
        let data = json!([{"Seconds": 1, "Year": 2000, "Name": "x", "Doping": null}]);
        let r = &records_from_json(&data).unwrap()[0];
        assert_eq!(r.place, None);
        assert!(r.doping.is_empty());
        assert!(r.nationality.is_empty());
    }

    #[test]
    fn missing_seconds_is_fatal() {
        let data = json!([{"Year": 2000, "Name": "x"}]);
        assert_eq!(
            records_from_json(&data),
            Err(DataError::MissingField { index: 0, field: "Seconds" })
        );
    }

    #[test]
    fn non_numeric_year_is_fatal() {
        let data = json!([{"Seconds": 1, "Year": "nineteen", "Name": "x"}]);
        assert!(matches!(
            records_from_json(&data),
            Err(DataError::NotNumeric { index: 0, field: "Year", .. })
        ));
    }

    #[test]
    fn non_array_dataset_is_rejected() {
        assert_eq!(records_from_json(&json!({"a": 1})), Err(DataError::NotAnArray("an object")));
    }

    #[test]
    fn non_object_entry_is_malformed() {
        assert!(matches!(records_from_json(&json!([42])), Err(DataError::Malformed { index: 0, .. })));
    }

    #[test]
    fn empty_array_gives_no_records() {
        assert!(records_from_json(&json!([])).unwrap().is_empty());
    }
}
