//! CSV Export functionality
//!
//! Writes one row per budget head, in registry order.

use std::io::Write;

use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::models::BudgetHead;

/// Export budget heads to CSV
///
/// Rows are encoded into a buffer first, so a failing writer surfaces as an
/// `Io` error rather than an encoding one.
pub fn export_csv<W: Write>(heads: &[BudgetHead], writer: &mut W) -> BudgetHeadResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(Vec::new());

    csv_writer
        .write_record(["id", "name", "code", "type", "description", "is_active"])
        .map_err(|e| BudgetHeadError::Export(e.to_string()))?;

    for head in heads {
        csv_writer
            .write_record([
                head.id.as_str(),
                head.name.as_str(),
                head.code.as_str(),
                head.head_type.name(),
                head.description.as_str(),
                if head.is_active { "true" } else { "false" },
            ])
            .map_err(|e| BudgetHeadError::Export(e.to_string()))?;
    }

    let encoded = csv_writer
        .into_inner()
        .map_err(|e| BudgetHeadError::Export(e.to_string()))?;
    writer.write_all(&encoded)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_budget_heads;

    #[test]
    fn test_csv_export() {
        let heads = default_budget_heads();

        let mut output = Vec::new();
        export_csv(&heads, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "id,name,code,type,description,is_active");
        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("3,Capital Expenditure,CAPEX,Capital,"));
        // Description with a comma is quoted
        assert!(lines[5].contains("\"Water, electricity and common-area utilities\""));
    }
}
