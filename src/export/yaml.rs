//! YAML Export functionality
//!
//! Exports the registry to YAML format for human reading.

use std::io::Write;

use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::export::json::RegistrySnapshot;
use crate::models::BudgetHead;

/// Export budget heads to YAML format
pub fn export_yaml<W: Write>(heads: &[BudgetHead], writer: &mut W) -> BudgetHeadResult<()> {
    let snapshot = RegistrySnapshot::from_heads(heads);

    let yaml =
        serde_yaml::to_string(&snapshot).map_err(|e| BudgetHeadError::Export(e.to_string()))?;

    writeln!(writer, "# Budget heads export")?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)?;
    writeln!(writer)?;
    writer.write_all(yaml.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_budget_heads;

    #[test]
    fn test_yaml_export() {
        let heads = default_budget_heads();

        let mut output = Vec::new();
        export_yaml(&heads, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Budget heads export"));
        assert!(yaml.contains("code: CORPUS"));
        assert!(yaml.contains("type: Reserve"));
        assert!(yaml.contains("isActive: true"));

        let snapshot: RegistrySnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(snapshot.budget_heads.len(), 5);
    }
}
