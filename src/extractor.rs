use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    classifier::ClassificationLabel,
    schema::{self, NO_SCHEMA_NOTE},
};

/// A typed extracted field value.
///
/// Serializes untagged, so records come out as plain JSON strings, numbers,
/// and nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// One structured record per document: the assigned label plus the extracted
/// fields in schema order.
///
/// For schema-bearing labels the field list always matches the schema
/// exactly; unmatched fields are [`FieldValue::Null`]. Labels without a
/// schema carry a single `note` marker field instead.
#[derive(Debug, Clone)]
pub struct StructuredRecord {
    pub label: ClassificationLabel,
    pub fields: Vec<(&'static str, FieldValue)>,
}

impl StructuredRecord {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Flatten into the output-artifact shape: `{"class": ..., <fields>}`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "class".to_string(),
            serde_json::to_value(self.label).unwrap_or_default(),
        );
        for (name, value) in &self.fields {
            map.insert(
                (*name).to_string(),
                serde_json::to_value(value).unwrap_or_default(),
            );
        }
        serde_json::Value::Object(map)
    }
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new($re).expect("invalid extraction pattern")
        });
    };
}

pattern!(INVOICE_NUMBER, r"(?i)(?:Invoice #|INV-|ID:)\s*(\S+)");
pattern!(INVOICE_DATE, r"(?i)Date:\s*(\d{4}-\d{2}-\d{2})");
pattern!(COMPANY, r"(?i)Company:\s*(\S[^\n]*)");
pattern!(TOTAL_AMOUNT, r"(?i)Total Amount:\s*\$?(\S+)");

pattern!(NAME, r"(?m)^\s*([A-Za-z\s]+)\n");
pattern!(EMAIL, r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b");
pattern!(PHONE, r"\+\d-\d{3}-\d{3}-\d{4}");
pattern!(EXPERIENCE_YEARS, r"(?i)Experience:\s*(\S+)\s*years?");

pattern!(ACCOUNT_NUMBER, r"(?i)Account Number:\s*(\S+)");
pattern!(BILLING_DATE, r"(?i)Billing Date:\s*(\d{4}-\d{2}-\d{2})");
pattern!(USAGE_KWH, r"(?i)Usage:\s*(\S+)\s*kWh");
pattern!(AMOUNT_DUE, r"(?i)Amount Due:\s*\$?(\S+)");

/// Capture group 1 of `re` in `text`, trimmed. No match is `Null`.
fn capture(re: &Regex, text: &str) -> FieldValue {
    match re.captures(text).and_then(|c| c.get(1)) {
        Some(m) => FieldValue::Str(m.as_str().trim().to_string()),
        None => FieldValue::Null,
    }
}

/// The whole first match of `re` in `text`, trimmed. No match is `Null`.
fn find(re: &Regex, text: &str) -> FieldValue {
    match re.find(text) {
        Some(m) => FieldValue::Str(m.as_str().trim().to_string()),
        None => FieldValue::Null,
    }
}

/// Monetary coercion: strip `$` and thousands separators and parse as f64.
/// Text that does not parse stays a raw string rather than failing the
/// record.
fn coerce_money(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Str(raw) => {
            let cleaned = raw.replace(['$', ','], "");
            match cleaned.parse::<f64>() {
                Ok(amount) => FieldValue::Float(amount),
                Err(_) => FieldValue::Str(raw),
            }
        }
        other => other,
    }
}

/// Integer coercion with the same raw-string fallback as [`coerce_money`].
fn coerce_int(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Str(raw) => match raw.parse::<i64>() {
            Ok(n) => FieldValue::Int(n),
            Err(_) => FieldValue::Str(raw),
        },
        other => other,
    }
}

fn extract_field(
    label: ClassificationLabel,
    name: &str,
    text: &str,
) -> FieldValue {
    use ClassificationLabel::*;

    match (label, name) {
        (Invoice, "invoice_number") => capture(&INVOICE_NUMBER, text),
        (Invoice, "date") => capture(&INVOICE_DATE, text),
        (Invoice, "company") => capture(&COMPANY, text),
        (Invoice, "total_amount") => {
            coerce_money(capture(&TOTAL_AMOUNT, text))
        }

        (Resume, "name") => capture(&NAME, text),
        (Resume, "email") => find(&EMAIL, text),
        (Resume, "phone") => find(&PHONE, text),
        (Resume, "experience_years") => {
            coerce_int(capture(&EXPERIENCE_YEARS, text))
        }

        (UtilityBill, "account_number") => capture(&ACCOUNT_NUMBER, text),
        (UtilityBill, "date") => capture(&BILLING_DATE, text),
        (UtilityBill, "usage_kwh") => coerce_int(capture(&USAGE_KWH, text)),
        (UtilityBill, "amount_due") => {
            coerce_money(capture(&AMOUNT_DUE, text))
        }

        _ => FieldValue::Null,
    }
}

/// Extract a [`StructuredRecord`] from original-case document text.
///
/// Every schema field is always present; a failed pattern yields `Null` and
/// a failed numeric coercion keeps the raw trimmed string. Extraction never
/// errors.
pub fn extract(
    label: ClassificationLabel,
    text: &str,
) -> StructuredRecord {
    let names = schema::fields_for(label);

    if names.is_empty() {
        return StructuredRecord {
            label,
            fields: vec![(
                "note",
                FieldValue::Str(NO_SCHEMA_NOTE.to_string()),
            )],
        };
    }

    let fields = names
        .iter()
        .map(|&name| (name, extract_field(label, name, text)))
        .collect();

    StructuredRecord { label, fields }
}
