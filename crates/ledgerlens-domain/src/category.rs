//! The shared spending-category enumeration
//!
//! A single fixed set consumed by prompt construction, the category
//! validator, and the storage layer, so the three never drift apart.

use std::fmt;

/// Fixed spending-category set for parsed transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Restaurants, delivery, cafes
    Food,
    /// Ride hailing, fuel, transit
    Transport,
    /// Online and retail shopping
    Shopping,
    /// Rent, loan EMIs
    Housing,
    /// Hospitals, pharmacies
    Health,
    /// Streaming, movies, events
    Entertainment,
    /// SIPs, brokers, mutual funds
    Investment,
    /// Salary and inward credits
    Income,
    /// Electricity, telecom, bills
    Utilities,
    /// Schools, courses
    Education,
    /// Anything the oracle could not place
    Others,
}

impl Category {
    /// Every category, in the canonical enumeration order
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Housing,
        Category::Health,
        Category::Entertainment,
        Category::Investment,
        Category::Income,
        Category::Utilities,
        Category::Education,
        Category::Others,
    ];

    /// Storage/prompt representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Housing => "Housing",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Investment => "Investment",
            Category::Income => "Income",
            Category::Utilities => "Utilities",
            Category::Education => "Education",
            Category::Others => "Others",
        }
    }

    /// Lenient parse: case-insensitive, unknown values map to `Others`
    ///
    /// The oracle is untrusted, so an unexpected label must never fail;
    /// it degrades to the catch-all bucket.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        for category in Category::ALL {
            if category.as_str().to_lowercase() == normalized {
                return category;
            }
        }
        Category::Others
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
