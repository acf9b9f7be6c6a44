use clap::{Parser, Subcommand};

/// Command-line interface definition for rStandup
/// CLI application that reminds you to stand up during work hours
#[derive(Parser)]
#[command(
    name = "rstandup",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small stand-up reminder: schedules breaks across your workday, skipping lunch",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no terminal bell, no stdin commands)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Manage the configuration file (view, check, migrate, edit, set)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Rename legacy keys and add missing fields to the configuration file"
        )]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Set a configuration value, e.g. --set start_time=08:30 --set work_days=1,2,3,4,5"
        )]
        set: Vec<String>,
    },

    /// Show whether you are in active hours and when the next reminder is due
    Status {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Evaluate at this instant instead of now (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,

        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },

    /// Show the daily schedule (work start, lunch, stand-up breaks, work end)
    Schedule {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Highlight the entry current at this instant (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,

        #[arg(long = "json", help = "Print the schedule as JSON")]
        json: bool,
    },

    /// Run in the foreground and notify when a reminder is due
    Watch {
        #[arg(
            long = "tick-ms",
            default_value_t = 1000,
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Polling period in milliseconds"
        )]
        tick_ms: u64,

        /// Stop after this many ticks (used by tests)
        #[arg(long = "max-ticks", hide = true)]
        max_ticks: Option<u64>,
    },
}
