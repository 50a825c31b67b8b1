use serde::Serialize;

/// Document type assigned by [`classify`].
///
/// Serialized with the human-readable names used in the output artifact
/// (`"Utility Bill"` carries a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassificationLabel {
    Invoice,
    Resume,
    #[serde(rename = "Utility Bill")]
    UtilityBill,
    Other,
    Unclassifiable,
}

impl ClassificationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Resume => "Resume",
            Self::UtilityBill => "Utility Bill",
            Self::Other => "Other",
            Self::Unclassifiable => "Unclassifiable",
        }
    }
}

impl std::fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword requirement over lower-cased text.
enum Keywords {
    /// Satisfied when any listed substring is present.
    Any(&'static [&'static str]),
    /// Satisfied only when every listed substring is present.
    All(&'static [&'static str]),
}

impl Keywords {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Keywords::Any(words) => {
                words.iter().any(|w| lowered.contains(w))
            }
            Keywords::All(words) => {
                words.iter().all(|w| lowered.contains(w))
            }
        }
    }
}

/// Classification rules, evaluated in order. First match wins; the order is
/// part of the contract, so this stays a sequence rather than a map.
const RULES: &[(Keywords, ClassificationLabel)] = &[
    (
        Keywords::Any(&[
            "invoice #",
            "total amount",
            "thank you for your business",
        ]),
        ClassificationLabel::Invoice,
    ),
    (
        Keywords::All(&["email", "phone", "experience"]),
        ClassificationLabel::Resume,
    ),
    (
        Keywords::All(&["account number", "usage", "amount due"]),
        ClassificationLabel::UtilityBill,
    ),
    (
        Keywords::Any(&[
            "general document containing random information",
            "document id",
        ]),
        ClassificationLabel::Other,
    ),
];

/// Classify raw document text into a [`ClassificationLabel`].
///
/// The input is lower-cased once and matched against the fixed rule list.
/// Every input receives a label; text matching no rule is `Unclassifiable`.
pub fn classify(text: &str) -> ClassificationLabel {
    let lowered = text.to_lowercase();

    for (keywords, label) in RULES {
        if keywords.matches(&lowered) {
            return *label;
        }
    }

    ClassificationLabel::Unclassifiable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_by_any_keyword() {
        assert_eq!(classify("Invoice #123"), ClassificationLabel::Invoice);
        assert_eq!(
            classify("TOTAL AMOUNT: $50.00"),
            ClassificationLabel::Invoice
        );
        assert_eq!(
            classify("Thank you for your business!"),
            ClassificationLabel::Invoice
        );
    }

    #[test]
    fn resume_requires_all_keywords() {
        assert_eq!(
            classify("Email: a@b.com Phone: 555 Experience: 3 years"),
            ClassificationLabel::Resume
        );
        // Two of three is not enough.
        assert_eq!(
            classify("Email: a@b.com Phone: 555"),
            ClassificationLabel::Unclassifiable
        );
    }

    #[test]
    fn utility_bill_requires_all_keywords() {
        assert_eq!(
            classify("Account Number: X Usage: 10 kWh Amount Due: $5"),
            ClassificationLabel::UtilityBill
        );
        assert_eq!(
            classify("Account Number: X Usage: 10 kWh"),
            ClassificationLabel::Unclassifiable
        );
    }

    #[test]
    fn other_by_marker_phrases() {
        assert_eq!(
            classify("A general document containing random information."),
            ClassificationLabel::Other
        );
        assert_eq!(classify("Document ID: 42"), ClassificationLabel::Other);
    }

    #[test]
    fn unmatched_text_is_unclassifiable() {
        assert_eq!(classify(""), ClassificationLabel::Unclassifiable);
        assert_eq!(
            classify("completely unrelated prose"),
            ClassificationLabel::Unclassifiable
        );
    }

    #[test]
    fn rule_order_is_first_match_wins() {
        // Satisfies both the Invoice and Resume rules; Invoice precedes.
        let text =
            "Invoice # 9 email phone experience total amount due today";
        assert_eq!(classify(text), ClassificationLabel::Invoice);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("ACCOUNT NUMBER: 1 USAGE: 2 AMOUNT DUE: 3"),
            ClassificationLabel::UtilityBill
        );
    }
}
