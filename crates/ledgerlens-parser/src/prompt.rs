//! LLM prompt engineering for transaction extraction

use ledgerlens_domain::Category;

/// Builds the statement-extraction prompt for the LLM oracle
pub struct PromptBuilder<'a> {
    raw_text: &'a str,
    document_type: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(raw_text: &'a str, document_type: &'a str) -> Self {
        Self {
            raw_text,
            document_type,
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n- \"category\": one of: ");
        prompt.push_str(&category_list());
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Document type: {}\n", self.document_type));
        prompt.push_str("Raw text:\n");
        prompt.push_str(self.raw_text);

        prompt
    }
}

/// The shared category enumeration rendered for the prompt
fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are a financial data extraction assistant for Indian bank statements.

Extract ALL transactions from the text and return ONLY a valid JSON array.

Each object must have:
- "date": convert any date format to DD-MM-YYYY
  Common Indian bank formats you will see:
  * 01 Feb 2026 -> 01-02-2026
  * 01/02/2026 -> 01-02-2026
  * 02-02-2026 -> keep as is
  * 2 Feb 26 -> 02-02-2026
  If a date is completely unreadable, use the date of the nearest valid
  transaction. Never return null or empty for the date field.
- "description": original text
- "merchant": cleaned name
- "amount": positive number
- "type": "debit" or "credit""#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Return ONLY a JSON array. No markdown. No backticks. No explanations.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_raw_text() {
        let prompt = PromptBuilder::new("01-02-2026 SWIGGY 450 DR", "bank_statement").build();
        assert!(prompt.contains("01-02-2026 SWIGGY 450 DR"));
    }

    #[test]
    fn test_prompt_includes_document_type() {
        let prompt = PromptBuilder::new("text", "credit_card_statement").build();
        assert!(prompt.contains("Document type: credit_card_statement"));
    }

    #[test]
    fn test_prompt_includes_every_category() {
        let prompt = PromptBuilder::new("text", "bank_statement").build();
        for category in Category::ALL {
            assert!(prompt.contains(category.as_str()));
        }
    }

    #[test]
    fn test_prompt_demands_normalized_dates_and_json_only() {
        let prompt = PromptBuilder::new("text", "bank_statement").build();
        assert!(prompt.contains("DD-MM-YYYY"));
        assert!(prompt.contains("Never return null or empty"));
        assert!(prompt.contains("ONLY a JSON array"));
    }
}
