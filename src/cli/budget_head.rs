//! Budget head CLI commands
//!
//! Implements the list/show/create/edit/delete/toggle/styles commands. They
//! run against a [`CliContext`], which the one-shot binary builds fresh for
//! each invocation and the shell keeps alive between lines.

use std::io::Write;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget_head::{
    format_budget_head_details, format_budget_head_table, format_style_legend,
};
use crate::error::BudgetHeadResult;
use crate::export::{export_csv, export_json, export_yaml, OutputFormat};
use crate::models::{type_display_style, BudgetHeadId};
use crate::registry::BudgetHeadRegistry;
use crate::services::BudgetHeadService;
use crate::session::{EditSession, FormField, FormValues, NotificationLog};

/// Budget head subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetHeadCommands {
    /// List all budget heads
    #[command(alias = "ls")]
    List {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show budget head details
    Show {
        /// Budget head ID or code
        head: String,
    },

    /// Create a new budget head
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Short code (e.g., "MAINT")
        #[arg(short, long)]
        code: String,
        /// Type (operational, capital, reserve)
        #[arg(short = 't', long = "type")]
        head_type: String,
        /// Description
        #[arg(short, long)]
        description: String,
    },

    /// Edit a budget head
    Edit {
        /// Budget head ID or code
        head: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New code
        #[arg(short, long)]
        code: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        head_type: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a budget head
    #[command(alias = "rm")]
    Delete {
        /// Budget head ID or code
        head: String,
    },

    /// Toggle a budget head between active and inactive
    Toggle {
        /// Budget head ID or code
        head: String,
    },

    /// Show how each type is styled
    Styles {
        /// Type names to look up (shows the full legend when empty)
        types: Vec<String>,
    },
}

impl BudgetHeadCommands {
    /// Whether running this command can change the registry
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Edit { .. } | Self::Delete { .. } | Self::Toggle { .. }
        )
    }
}

/// Everything a command needs: settings, the registry, the form session and
/// the notification queue
#[derive(Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub registry: BudgetHeadRegistry,
    pub session: EditSession,
    pub notifications: NotificationLog,
}

impl CliContext {
    /// Build a context with a registry described by the settings
    pub fn new(settings: Settings) -> Self {
        let registry = BudgetHeadRegistry::from_settings(&settings);
        Self {
            settings,
            registry,
            session: EditSession::new(),
            notifications: NotificationLog::new(),
        }
    }

    /// Borrow the form session and a service over the registry together
    pub fn split(&mut self) -> (&mut EditSession, BudgetHeadService<'_>) {
        let service = BudgetHeadService::with_settings(
            &mut self.registry,
            &mut self.notifications,
            &self.settings,
        );
        (&mut self.session, service)
    }

    /// Resolve an ID or code to a budget head ID
    pub fn resolve(&mut self, identifier: &str) -> BudgetHeadResult<BudgetHeadId> {
        let (_, service) = self.split();
        service.resolve(identifier)
    }

    /// Print and clear pending notifications
    pub fn flush_notifications<W: Write>(&mut self, out: &mut W) -> BudgetHeadResult<()> {
        for notification in self.notifications.drain() {
            writeln!(out, "{}", notification.line())?;
        }
        Ok(())
    }
}

/// Handle a budget head command
pub fn handle_budget_head_command<W: Write>(
    ctx: &mut CliContext,
    cmd: BudgetHeadCommands,
    out: &mut W,
) -> BudgetHeadResult<()> {
    match cmd {
        BudgetHeadCommands::List { format } => {
            let format = format.unwrap_or(ctx.settings.default_format);
            let heads = ctx.registry.as_slice();
            match format {
                OutputFormat::Table => write!(out, "{}", format_budget_head_table(heads))?,
                OutputFormat::Json => export_json(heads, out)?,
                OutputFormat::Yaml => export_yaml(heads, out)?,
                OutputFormat::Csv => export_csv(heads, out)?,
            }
        }

        BudgetHeadCommands::Show { head } => {
            let id = ctx.resolve(&head)?;
            let (_, service) = ctx.split();
            let found = service.require(&id)?;
            write!(out, "{}", format_budget_head_details(found))?;
        }

        BudgetHeadCommands::Create {
            name,
            code,
            head_type,
            description,
        } => {
            let values = FormValues::from_pairs([
                (FormField::Name.key(), name),
                (FormField::Code.key(), code),
                (FormField::Type.key(), head_type),
                (FormField::Description.key(), description),
            ])?;

            // The shell's form stays untouched
            let mut session = EditSession::new();
            let (_, mut service) = ctx.split();
            session.open_create();
            let created = session.submit_values(&mut service, values)?;
            ctx.flush_notifications(out)?;
            writeln!(out, "  ID: {}", created.id)?;
        }

        BudgetHeadCommands::Edit {
            head,
            name,
            code,
            head_type,
            description,
        } => {
            if name.is_none() && code.is_none() && head_type.is_none() && description.is_none() {
                writeln!(
                    out,
                    "No changes specified. Use --name, --code, --type, or --description."
                )?;
                return Ok(());
            }

            let id = ctx.resolve(&head)?;
            let mut session = EditSession::new();
            let (_, mut service) = ctx.split();
            session.open_edit(&service, &id)?;

            let changes = [
                (FormField::Name, name),
                (FormField::Code, code),
                (FormField::Type, head_type),
                (FormField::Description, description),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    session.set_field(field, value)?;
                }
            }

            session.submit(&mut service)?;
            ctx.flush_notifications(out)?;
        }

        BudgetHeadCommands::Delete { head } => {
            let id = ctx.resolve(&head)?;
            let (_, mut service) = ctx.split();
            service.delete(&id)?;
            ctx.flush_notifications(out)?;
        }

        BudgetHeadCommands::Toggle { head } => {
            let id = ctx.resolve(&head)?;
            let (_, mut service) = ctx.split();
            service.toggle_active(&id)?;
            ctx.flush_notifications(out)?;
        }

        BudgetHeadCommands::Styles { types } => {
            if types.is_empty() {
                write!(out, "{}", format_style_legend())?;
            } else {
                for raw in types {
                    let style = type_display_style(&raw);
                    writeln!(out, "{}: {} ({})", raw, style.tag(), style.color())?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &mut CliContext, cmd: BudgetHeadCommands) -> BudgetHeadResult<String> {
        let mut out = Vec::new();
        handle_budget_head_command(ctx, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn context() -> CliContext {
        CliContext::new(Settings::default())
    }

    #[test]
    fn test_list_table() {
        let mut ctx = context();
        let output = run(&mut ctx, BudgetHeadCommands::List { format: None }).unwrap();
        assert!(output.contains("MAINT"));
        assert!(output.contains("UTIL"));
    }

    #[test]
    fn test_list_csv() {
        let mut ctx = context();
        let output = run(
            &mut ctx,
            BudgetHeadCommands::List {
                format: Some(OutputFormat::Csv),
            },
        )
        .unwrap();
        assert!(output.starts_with("id,name,code,type,description,is_active"));
    }

    #[test]
    fn test_create() {
        let mut ctx = context();
        let output = run(
            &mut ctx,
            BudgetHeadCommands::Create {
                name: "Insurance".into(),
                code: "INS".into(),
                head_type: "operational".into(),
                description: "Insurance premiums".into(),
            },
        )
        .unwrap();

        assert!(output.contains("[+] Budget head \"Insurance\" created"));
        assert!(output.contains("ID: 6"));
        assert_eq!(ctx.registry.len(), 6);
    }

    #[test]
    fn test_create_keeps_open_form() {
        let mut ctx = context();
        ctx.session.open_create();
        ctx.session.set_field(FormField::Name, "Draft").unwrap();

        run(
            &mut ctx,
            BudgetHeadCommands::Create {
                name: "Insurance".into(),
                code: "INS".into(),
                head_type: "capital".into(),
                description: "Premiums".into(),
            },
        )
        .unwrap();

        assert!(ctx.session.is_open());
        assert_eq!(ctx.session.values().get(FormField::Name), "Draft");
    }

    #[test]
    fn test_shared_code_is_ambiguous() {
        let mut ctx = context();
        run(
            &mut ctx,
            BudgetHeadCommands::Create {
                name: "Upkeep".into(),
                code: "MAINT".into(),
                head_type: "operational".into(),
                description: "Second maintenance head".into(),
            },
        )
        .unwrap();

        let err = run(&mut ctx, BudgetHeadCommands::Delete { head: "maint".into() }).unwrap_err();
        assert!(err.to_string().contains("matching ids: 1, 6"));
        assert_eq!(ctx.registry.len(), 6);

        run(&mut ctx, BudgetHeadCommands::Delete { head: "6".into() }).unwrap();
        assert_eq!(ctx.registry.len(), 5);
    }

    #[test]
    fn test_create_with_bad_type() {
        let mut ctx = context();
        let result = run(
            &mut ctx,
            BudgetHeadCommands::Create {
                name: "Insurance".into(),
                code: "INS".into(),
                head_type: "Savings".into(),
                description: "Insurance premiums".into(),
            },
        );
        assert!(result.unwrap_err().is_validation());
        assert_eq!(ctx.registry.len(), 5);
    }

    #[test]
    fn test_edit_by_code() {
        let mut ctx = context();
        run(
            &mut ctx,
            BudgetHeadCommands::Edit {
                head: "maint".into(),
                name: Some("Maintenance & Repairs".into()),
                code: None,
                head_type: None,
                description: Some("Updated desc".into()),
            },
        )
        .unwrap();

        let head = &ctx.registry.as_slice()[0];
        assert_eq!(head.id.as_str(), "1");
        assert_eq!(head.name, "Maintenance & Repairs");
        assert_eq!(head.code, "MAINT");
        assert_eq!(head.description, "Updated desc");
        assert!(head.is_active);
    }

    #[test]
    fn test_edit_without_changes() {
        let mut ctx = context();
        let output = run(
            &mut ctx,
            BudgetHeadCommands::Edit {
                head: "1".into(),
                name: None,
                code: None,
                head_type: None,
                description: None,
            },
        )
        .unwrap();
        assert!(output.contains("No changes specified"));
    }

    #[test]
    fn test_delete_and_toggle() {
        let mut ctx = context();
        let output = run(&mut ctx, BudgetHeadCommands::Delete { head: "3".into() }).unwrap();
        assert!(output.contains("\"Capital Expenditure\" deleted"));
        assert_eq!(ctx.registry.len(), 4);

        let output = run(&mut ctx, BudgetHeadCommands::Toggle { head: "UTIL".into() }).unwrap();
        assert!(output.contains("\"Utilities\" deactivated"));

        let err = run(&mut ctx, BudgetHeadCommands::Delete { head: "3".into() }).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_styles() {
        let mut ctx = context();
        let output = run(
            &mut ctx,
            BudgetHeadCommands::Styles {
                types: vec!["Capital".into(), "Bogus".into()],
            },
        )
        .unwrap();
        assert!(output.contains("Capital: accent (purple)"));
        assert!(output.contains("Bogus: neutral (gray)"));
    }

    #[test]
    fn test_is_mutation() {
        assert!(BudgetHeadCommands::Delete { head: "1".into() }.is_mutation());
        assert!(!BudgetHeadCommands::Show { head: "1".into() }.is_mutation());
    }
}
