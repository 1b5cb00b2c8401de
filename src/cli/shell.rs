//! Interactive shell
//!
//! Reads commands line by line and applies them to one long-lived
//! [`CliContext`], so changes made in the shell stay visible until it exits.
//! On top of the regular commands the shell drives the form directly:
//!
//! ```text
//! new                       open a blank form
//! open <id|code>            open the form on an existing budget head
//! set <field> <value...>    fill in name, code, type or description
//! form                      show the open form
//! submit                    create or update from the form
//! cancel                    close the form without saving
//! ```

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use super::budget_head::{handle_budget_head_command, BudgetHeadCommands, CliContext};
use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::session::{FormField, SessionMode};

/// One line of shell input
#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Head(BudgetHeadCommands),

    /// Open a blank form for a new budget head
    New,

    /// Open the form on an existing budget head
    Open {
        /// Budget head ID or code
        head: String,
    },

    /// Set a form field
    Set {
        /// Field name (name, code, type, description)
        field: String,
        /// Value (remaining words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Show the open form
    Form,

    /// Create or update from the open form
    Submit,

    /// Close the form without saving
    Cancel,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    ctx: &mut CliContext,
    input: R,
    out: &mut W,
) -> BudgetHeadResult<()> {
    writeln!(out, "Budget heads shell. Type 'help' for commands, 'quit' to leave.")?;
    prompt(ctx, out)?;

    for line in input.lines() {
        let line = line?;
        if execute_line(ctx, &line, out)? == Flow::Quit {
            break;
        }
        prompt(ctx, out)?;
    }

    Ok(())
}

/// Execute one line of shell input
///
/// Command errors are printed and the shell carries on; only output
/// failures are returned.
pub fn execute_line<W: Write>(
    ctx: &mut CliContext,
    line: &str,
    out: &mut W,
) -> BudgetHeadResult<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let Some(words) = shlex::split(line) else {
        writeln!(out, "Error: unbalanced quotes")?;
        return Ok(Flow::Continue);
    };

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Help and usage errors are both rendered by clap
            write!(out, "{}", err.render())?;
            return Ok(Flow::Continue);
        }
    };
    debug!(command = ?parsed.command, "shell command");

    if matches!(parsed.command, ShellCommand::Quit) {
        return Ok(Flow::Quit);
    }

    let result = dispatch(ctx, parsed.command, out);
    let notified = ctx.notifications.entries().iter().any(|n| n.is_error());
    ctx.flush_notifications(out)?;

    match result {
        Ok(()) => {}
        Err(err @ BudgetHeadError::Io(_)) => return Err(err),
        Err(err) => {
            if !notified {
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(Flow::Continue)
}

fn dispatch<W: Write>(
    ctx: &mut CliContext,
    command: ShellCommand,
    out: &mut W,
) -> BudgetHeadResult<()> {
    match command {
        ShellCommand::Head(cmd) => handle_budget_head_command(ctx, cmd, out),

        ShellCommand::New => {
            ctx.session.open_create();
            writeln!(out, "New budget head form opened.")?;
            Ok(())
        }

        ShellCommand::Open { head } => {
            let id = ctx.resolve(&head)?;
            let (session, service) = ctx.split();
            session.open_edit(&service, &id)?;
            writeln!(out, "Editing budget head {}.", id)?;
            Ok(())
        }

        ShellCommand::Set { field, value } => {
            let field: FormField = field.parse()?;
            ctx.session.set_field(field, value.join(" "))?;
            Ok(())
        }

        ShellCommand::Form => write_form(ctx, out),

        ShellCommand::Submit => {
            let (session, mut service) = ctx.split();
            let head = session.submit(&mut service)?;
            writeln!(out, "  ID: {}", head.id)?;
            Ok(())
        }

        ShellCommand::Cancel => {
            ctx.session.cancel();
            writeln!(out, "Form closed.")?;
            Ok(())
        }

        ShellCommand::Quit => Ok(()),
    }
}

fn write_form<W: Write>(ctx: &CliContext, out: &mut W) -> BudgetHeadResult<()> {
    let session = &ctx.session;
    match session.mode() {
        SessionMode::Idle => {
            writeln!(out, "No form is open.")?;
            return Ok(());
        }
        SessionMode::Creating => writeln!(out, "New budget head")?,
        SessionMode::Editing => {
            if let Some(target) = session.editing_target() {
                writeln!(out, "Editing {} (ID {})", target, target.id)?;
            }
        }
    }

    for field in FormField::all() {
        writeln!(out, "  {:<12} {}", field.key(), session.values().get(*field))?;
    }
    if let Some(message) = session.error_message() {
        writeln!(out, "  ! {}", message)?;
    }
    Ok(())
}

fn prompt<W: Write>(ctx: &CliContext, out: &mut W) -> BudgetHeadResult<()> {
    let marker = match ctx.session.mode() {
        SessionMode::Idle => "",
        SessionMode::Creating => " [new]",
        SessionMode::Editing => " [edit]",
    };
    write!(out, "budget-heads{}> ", marker)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn run_script(script: &str) -> (CliContext, String) {
        let mut ctx = CliContext::new(Settings::default());
        let mut out = Vec::new();
        run_shell(&mut ctx, script.as_bytes(), &mut out).unwrap();
        (ctx, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_form_create_flow() {
        let (ctx, output) = run_script(
            "new\n\
             set name Insurance\n\
             set code INS\n\
             set type Operational\n\
             set description \"Insurance premiums\"\n\
             submit\n",
        );

        assert!(output.contains("[+] Budget head \"Insurance\" created"));
        assert_eq!(ctx.registry.len(), 6);
        let created = &ctx.registry.as_slice()[5];
        assert_eq!(created.description, "Insurance premiums");
        assert!(created.is_active);
    }

    #[test]
    fn test_state_persists_between_lines() {
        let (ctx, output) = run_script("delete 3\nshow 3\nlist\n");
        assert!(output.contains("\"Capital Expenditure\" deleted"));
        assert!(output.contains("Error: Budget head not found: 3"));
        assert_eq!(ctx.registry.len(), 4);
    }

    #[test]
    fn test_edit_and_cancel() {
        let (ctx, output) = run_script("open MAINT\nset name Something Else\nform\ncancel\n");
        assert!(output.contains("Editing Maintenance (MAINT)"));
        assert!(output.contains("Something Else"));
        assert!(output.contains("Form closed."));
        assert_eq!(ctx.registry.as_slice()[0].name, "Maintenance");
    }

    #[test]
    fn test_rejected_submit_reports_once() {
        let (ctx, output) = run_script("new\nset name Insurance\nsubmit\n");
        assert_eq!(output.matches("required").count(), 1);
        assert!(output.contains("[x]"));
        assert!(ctx.session.is_open());
    }

    #[test]
    fn test_create_leaves_new_form_open() {
        let (ctx, output) = run_script(
            "new\n\
             set name Draft\n\
             set code DRF\n\
             create -n Insurance -c INS -t capital -d Premiums\n\
             form\n",
        );

        assert!(output.contains("\"Insurance\" created"));
        assert!(!output.contains("No form is open."));
        assert!(ctx.session.is_open());
        assert_eq!(ctx.session.values().get(FormField::Name), "Draft");
        assert_eq!(ctx.session.values().get(FormField::Code), "DRF");
    }

    #[test]
    fn test_edit_leaves_open_form_submittable() {
        let (ctx, output) = run_script(
            "open 2\n\
             set name \"Reserve Fund\"\n\
             edit 1 --name Upkeep\n\
             submit\n",
        );

        assert!(!output.contains("Session error"));
        assert!(output.contains("\"Upkeep\" updated"));
        assert!(output.contains("\"Reserve Fund\" updated"));
        assert_eq!(ctx.registry.as_slice()[0].name, "Upkeep");
        assert_eq!(ctx.registry.as_slice()[1].name, "Reserve Fund");
        assert!(!ctx.session.is_open());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_returned() {
        for line in ["list", "list --format json", "list --format yaml", "list --format csv"] {
            let mut ctx = CliContext::new(Settings::default());
            let result = execute_line(&mut ctx, line, &mut BrokenPipe);
            assert!(
                matches!(result, Err(BudgetHeadError::Io(_))),
                "{line}: {result:?}"
            );
        }
    }

    #[test]
    fn test_quit_stops_reading() {
        let (ctx, _) = run_script("quit\ndelete 1\n");
        assert_eq!(ctx.registry.len(), 5);
    }

    #[test]
    fn test_bad_input_does_not_stop_shell() {
        let (ctx, output) = run_script("frobnicate\nset\nset name \"unterminated\ntoggle 2\n");
        assert!(output.contains("unbalanced quotes"));
        assert!(output.contains("\"Corpus Fund\" deactivated"));
        assert!(!ctx.registry.as_slice()[1].is_active);
    }
}
