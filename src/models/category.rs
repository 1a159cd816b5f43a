//! Recommended category labels
//!
//! Categories are free-form strings on both transactions and budgets. This
//! list is what the entry forms suggest; anything else is still accepted.

pub const FOOD_AND_DINING: &str = "Food & Dining";
pub const HOUSING: &str = "Housing";
pub const TRANSPORTATION: &str = "Transportation";
pub const UTILITIES: &str = "Utilities";
pub const ENTERTAINMENT: &str = "Entertainment";
pub const SHOPPING: &str = "Shopping";
pub const HEALTH_AND_FITNESS: &str = "Health & Fitness";
pub const EDUCATION: &str = "Education";
pub const INCOME: &str = "Income";
pub const OTHER: &str = "Other";

/// The suggested categories, in the order the forms list them
pub const RECOMMENDED_CATEGORIES: [&str; 10] = [
    FOOD_AND_DINING,
    HOUSING,
    TRANSPORTATION,
    UTILITIES,
    ENTERTAINMENT,
    SHOPPING,
    HEALTH_AND_FITNESS,
    EDUCATION,
    INCOME,
    OTHER,
];

/// Check whether a label is one of the recommended categories (exact match)
pub fn is_recommended(category: &str) -> bool {
    RECOMMENDED_CATEGORIES.contains(&category)
}
