use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_heads::cli::{handle_budget_head_command, run_shell, BudgetHeadCommands, CliContext};
use budget_heads::config::{BudgetHeadPaths, Settings};
use budget_heads::logging;

#[derive(Parser)]
#[command(
    name = "budget-heads",
    version,
    about = "Manage the budget heads expenses are booked against",
    long_about = "budget-heads keeps a registry of budget heads (maintenance, corpus \
                  fund, capital expenditure, ...) in memory. One-shot commands act \
                  on the default records; use 'budget-heads shell' to make several \
                  changes in one session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Head(BudgetHeadCommands),

    /// Start an interactive shell over one registry
    #[command(alias = "repl")]
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetHeadPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Head(cmd)) => {
            let mutation = cmd.is_mutation();
            let mut ctx = CliContext::new(settings);
            handle_budget_head_command(&mut ctx, cmd, &mut out)?;
            if mutation {
                writeln!(
                    out,
                    "Note: changes are kept in memory only. \
                     Use 'budget-heads shell' to keep working on them."
                )?;
            }
        }
        Some(Commands::Shell) => {
            let mut ctx = CliContext::new(settings);
            run_shell(&mut ctx, io::stdin().lock(), &mut out)?;
            writeln!(out)?;
        }
        Some(Commands::Config { save }) => {
            writeln!(out, "budget-heads Configuration")?;
            writeln!(out, "==========================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  ID strategy:          {:?}", settings.id_strategy)?;
            writeln!(out, "  Seed defaults:        {}", settings.seed_defaults)?;
            writeln!(out, "  Enforce unique codes: {}", settings.enforce_unique_codes)?;
            writeln!(out, "  Default format:       {:?}", settings.default_format)?;
            writeln!(out, "  Log filter:           {}", settings.log_filter)?;

            if save {
                settings.save(&paths)?;
                writeln!(out)?;
                writeln!(out, "Settings saved to {}", paths.settings_file().display())?;
            }
        }
        None => {
            writeln!(out, "budget-heads - budget head registry")?;
            writeln!(out)?;
            writeln!(out, "Run 'budget-heads --help' for usage information.")?;
            writeln!(out, "Run 'budget-heads shell' to start an interactive session.")?;
        }
    }

    Ok(())
}
