//! Budget head display formatting
//!
//! Formats budget heads for terminal output as a table, a detail view, and
//! a legend of type styles.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetHead, BudgetHeadType, DisplayStyle};

#[derive(Tabled)]
struct BudgetHeadRow<'a> {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Code")]
    code: &'a str,
    #[tabled(rename = "Type")]
    head_type: &'static str,
    #[tabled(rename = "Style")]
    style: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format budget heads as a table, in registry order
pub fn format_budget_head_table(heads: &[BudgetHead]) -> String {
    if heads.is_empty() {
        return "No budget heads found.\n".to_string();
    }

    let rows = heads.iter().enumerate().map(|(i, head)| BudgetHeadRow {
        position: i + 1,
        id: head.id.as_str(),
        name: &head.name,
        code: &head.code,
        head_type: head.head_type.name(),
        style: head.display_style().tag(),
        status: head.status_label(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let active = heads.iter().filter(|h| h.is_active).count();
    format!(
        "{}\n{} budget heads ({} active)\n",
        table,
        heads.len(),
        active
    )
}

/// Format budget head details
pub fn format_budget_head_details(head: &BudgetHead) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget Head: {}\n", head.name));
    output.push_str(&format!("  ID:          {}\n", head.id));
    output.push_str(&format!("  Code:        {}\n", head.code));
    output.push_str(&format!(
        "  Type:        {} ({})\n",
        head.head_type,
        head.display_style()
    ));
    output.push_str(&format!("  Status:      {}\n", head.status_label()));
    output.push_str(&format!("  Description: {}\n", head.description));

    output
}

/// Format the type-to-style mapping
pub fn format_style_legend() -> String {
    let mut output = String::new();
    output.push_str("Type Styles:\n");

    for head_type in BudgetHeadType::all() {
        let style = head_type.display_style();
        output.push_str(&format!(
            "  {:<12} {:<8} {}\n",
            head_type.name(),
            style.tag(),
            style.color()
        ));
    }

    let fallback = DisplayStyle::Neutral;
    output.push_str(&format!(
        "  {:<12} {:<8} {}\n",
        "(other)",
        fallback.tag(),
        fallback.color()
    ));

    output
}
