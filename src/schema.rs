use crate::classifier::ClassificationLabel;

/// Marker field used for labels that carry no extraction schema.
pub const NO_SCHEMA_NOTE: &str = "No extraction required";

/// The ordered field names expected for a document type.
///
/// Fixed at compile time; `Other` and `Unclassifiable` intentionally have no
/// schema. The order here is the order fields appear in extraction output.
pub fn fields_for(label: ClassificationLabel) -> &'static [&'static str] {
    match label {
        ClassificationLabel::Invoice => {
            &["invoice_number", "date", "company", "total_amount"]
        }
        ClassificationLabel::Resume => {
            &["name", "email", "phone", "experience_years"]
        }
        ClassificationLabel::UtilityBill => {
            &["account_number", "date", "usage_kwh", "amount_due"]
        }
        ClassificationLabel::Other | ClassificationLabel::Unclassifiable => {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_bearing_labels_have_four_fields() {
        for label in [
            ClassificationLabel::Invoice,
            ClassificationLabel::Resume,
            ClassificationLabel::UtilityBill,
        ] {
            assert_eq!(fields_for(label).len(), 4);
        }
    }

    #[test]
    fn fallback_labels_have_no_schema() {
        assert!(fields_for(ClassificationLabel::Other).is_empty());
        assert!(fields_for(ClassificationLabel::Unclassifiable).is_empty());
    }

    #[test]
    fn invoice_field_order() {
        assert_eq!(
            fields_for(ClassificationLabel::Invoice),
            &["invoice_number", "date", "company", "total_amount"]
        );
    }
}
