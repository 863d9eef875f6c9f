//! Merchant-keyword category validation

use ledgerlens_domain::Category;

const FOOD_KEYWORDS: &[&str] = &[
    "swiggy",
    "zomato",
    "dominos",
    "mcdonald",
    "kfc",
    "restaurant",
    "cafe",
    "pizza",
    "burger",
    "coffee",
    "tea",
];

const TRANSPORT_KEYWORDS: &[&str] = &[
    "uber", "ola", "rapido", "metro", "petrol", "fuel", "shell", "hpcl", "bpcl",
];

const SHOPPING_KEYWORDS: &[&str] = &[
    "amazon", "flipkart", "myntra", "ajio", "meesho", "nykaa", "shopping", "retail",
];

const ENTERTAINMENT_KEYWORDS: &[&str] = &[
    "netflix",
    "spotify",
    "hotstar",
    "prime",
    "youtube premium",
    "cinema",
    "movie",
    "bookmyshow",
];

const HEALTH_KEYWORDS: &[&str] = &[
    "apollo", "medplus", "1mg", "hospital", "clinic", "doctor", "pharmacy",
];

const INVESTMENT_KEYWORDS: &[&str] = &[
    "sip",
    "mutual fund",
    "zerodha",
    "groww",
    "nps",
    "investment",
    "broker",
];

const INCOME_KEYWORDS: &[&str] = &["salary", "neft inward", "credited by"];

const UTILITIES_KEYWORDS: &[&str] = &[
    "electricity",
    "bescom",
    "mseb",
    "water",
    "internet",
    "airtel",
    "jio",
    "vodafone",
    "bill",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "school", "college", "udemy", "coursera", "education", "learning",
];

const HOUSING_KEYWORDS: &[&str] = &["emi", "home loan", "car loan", "rent", "housing"];

/// Keyword tables in fixed priority order: the first category whose table
/// matches the merchant wins
const RULES: &[(Category, &[&str])] = &[
    (Category::Food, FOOD_KEYWORDS),
    (Category::Transport, TRANSPORT_KEYWORDS),
    (Category::Shopping, SHOPPING_KEYWORDS),
    (Category::Entertainment, ENTERTAINMENT_KEYWORDS),
    (Category::Health, HEALTH_KEYWORDS),
    (Category::Investment, INVESTMENT_KEYWORDS),
    (Category::Income, INCOME_KEYWORDS),
    (Category::Utilities, UTILITIES_KEYWORDS),
    (Category::Education, EDUCATION_KEYWORDS),
    (Category::Housing, HOUSING_KEYWORDS),
];

/// Deterministic override of an oracle-suggested category
///
/// Pure and total: case-insensitive substring match of the merchant name
/// against the keyword tables, evaluated in priority order. A match
/// overrides whatever the oracle proposed; no match passes the oracle's
/// category through unchanged.
pub fn validate_category(merchant: &str, _description: &str, ai_category: Category) -> Category {
    let merchant_lower = merchant.to_lowercase();

    for (category, keywords) in RULES {
        if keywords.iter().any(|k| merchant_lower.contains(k)) {
            return *category;
        }
    }

    ai_category
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_overrides_oracle() {
        assert_eq!(
            validate_category("Swiggy Instamart", "", Category::Shopping),
            Category::Food
        );
        assert_eq!(
            validate_category("NETFLIX.COM", "", Category::Others),
            Category::Entertainment
        );
        assert_eq!(
            validate_category("Zerodha Broking", "", Category::Others),
            Category::Investment
        );
    }

    #[test]
    fn test_unknown_merchant_passes_oracle_category_through() {
        assert_eq!(
            validate_category("Corner Store 42", "", Category::Shopping),
            Category::Shopping
        );
        assert_eq!(
            validate_category("", "", Category::Others),
            Category::Others
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            validate_category("UBER INDIA", "", Category::Others),
            Category::Transport
        );
        assert_eq!(
            validate_category("uber india", "", Category::Others),
            Category::Transport
        );
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "pizza" (Food) appears before any later table could match
        assert_eq!(
            validate_category("Pizza Hut Retail", "", Category::Others),
            Category::Food
        );
        // "uber" matches Transport even for Uber Eats; Food has no "uber"
        // keyword and Transport is evaluated before Shopping
        assert_eq!(
            validate_category("Uber Eats", "", Category::Food),
            Category::Transport
        );
    }

    #[test]
    fn test_is_pure_and_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                validate_category("Apollo Pharmacy", "refill", Category::Shopping),
                Category::Health
            );
        }
    }

    #[test]
    fn test_description_does_not_affect_result() {
        assert_eq!(
            validate_category("Corner Store", "swiggy order", Category::Others),
            Category::Others
        );
    }
}
