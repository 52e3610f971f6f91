//! hrdesk CLI - HR screens in the terminal
//!
//! Renders each HR screen (employee directory, attendance register, document
//! library, employee detail, dashboards) to stdout in grid or table form, runs
//! the simulated sign-in, and hosts an interactive TUI over the same
//! view-models.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod render;
mod tracing_setup;
mod tui;
mod ui;

use commands::Context;

#[derive(Parser, Debug)]
#[command(
    name = "hrdesk",
    author,
    version,
    about = "Searchable HR screens: employees, attendance, documents and dashboards",
    long_about = "Browse employee, attendance and attachment records with live search and a \
                  grid/table view toggle, from the command line or an interactive TUI."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress spinners and informational logs (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Config file (default: ~/.hrdesk/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "HRDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Employee directory with department filter and search
    Employees(commands::list::EmployeesArgs),
    /// Attendance register for one day, with summary counts
    Attendance(commands::list::AttendanceArgs),
    /// Document library
    Attachments(commands::list::AttachmentsArgs),
    /// Employee detail page
    Employee(commands::employee::EmployeeArgs),
    /// Admin or manager dashboard
    Dashboard(commands::dashboard::DashboardArgs),
    /// Simulated sign-in
    Login(commands::login::LoginArgs),
    /// Interactive terminal UI
    Tui,
    /// Resolve a router path to its screen
    Routes(commands::routes::RoutesArgs),
    /// Manage hrdesk configuration (path, show, init)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would tear the alternate screen; the TUI only logs when asked to
    let tui = matches!(cli.command, Commands::Tui);
    if !tui || std::env::var_os("RUST_LOG").is_some() {
        tracing_setup::init(&tracing_setup::TracingConfig {
            debug: cli.debug,
            quiet: cli.quiet,
        })
        .ok();
    }
    ui::init_quiet_mode(cli.quiet);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Employees(args) => commands::run_employees(args, &Context::load(config_path)?)?,
        Commands::Attendance(args) => commands::run_attendance(args, &Context::load(config_path)?)?,
        Commands::Attachments(args) => {
            commands::run_attachments(args, &Context::load(config_path)?)?
        }
        Commands::Employee(args) => commands::run_employee(args, &Context::load(config_path)?)?,
        Commands::Dashboard(args) => commands::run_dashboard(args, &Context::load(config_path)?)?,
        Commands::Login(args) => commands::run_login(args, &Context::load(config_path)?).await?,
        Commands::Tui => tui::run(&Context::load(config_path)?)?,
        Commands::Routes(args) => commands::run_routes(args)?,
        Commands::Config(args) => config::run_config(args, config_path)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
