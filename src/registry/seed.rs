//! Default budget heads
//!
//! Every registry built with seeding enabled starts from these five records.

use crate::models::{BudgetHead, BudgetHeadId, BudgetHeadType};

/// (id, name, code, type, description)
const DEFAULT_HEADS: &[(&str, &str, &str, BudgetHeadType, &str)] = &[
    (
        "1",
        "Maintenance",
        "MAINT",
        BudgetHeadType::Operational,
        "Regular maintenance and repair expenses",
    ),
    (
        "2",
        "Corpus Fund",
        "CORPUS",
        BudgetHeadType::Reserve,
        "Long-term corpus fund contributions",
    ),
    (
        "3",
        "Capital Expenditure",
        "CAPEX",
        BudgetHeadType::Capital,
        "Major capital investments and improvements",
    ),
    (
        "4",
        "Miscellaneous",
        "MISC",
        BudgetHeadType::Operational,
        "Other operational expenses",
    ),
    (
        "5",
        "Utilities",
        "UTIL",
        BudgetHeadType::Operational,
        "Water, electricity and common-area utilities",
    ),
];

/// Number of seeded records
pub const DEFAULT_HEAD_COUNT: usize = DEFAULT_HEADS.len();

/// Build the default budget heads, all active
pub fn default_budget_heads() -> Vec<BudgetHead> {
    DEFAULT_HEADS
        .iter()
        .map(|&(id, name, code, head_type, description)| BudgetHead {
            id: BudgetHeadId::new(id),
            name: name.to_string(),
            code: code.to_string(),
            head_type,
            description: description.to_string(),
            is_active: true,
        })
        .collect()
}
