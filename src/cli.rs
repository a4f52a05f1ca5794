use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::commands::{
    LsOptions, cmd_categories, cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard,
    cmd_ls, cmd_resolve, cmd_stats,
};
use crate::error::Result;
use crate::types::{
    Category, SortDirection, TicketStatus, VALID_CATEGORIES, VALID_STATUSES,
};

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Support ticket dashboard")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides TICKETDESK_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    #[command(visible_alias = "d")]
    Dashboard {
        /// Tickets per page (default: config `page_size`, else 20)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,
    },

    /// List one page of tickets
    Ls {
        /// Zero-based page index
        #[arg(long, default_value = "0")]
        page: u32,

        /// Tickets per page
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        size: Option<u32>,

        /// Field to sort by (default: createdAt)
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction: asc or desc (default: desc)
        #[arg(long, value_parser = parse_direction)]
        direction: Option<SortDirection>,

        /// Only show tickets in this category (applied to the fetched page)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Only show tickets with this status (applied to the fetched page)
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Print full ticket details instead of one line each
        #[arg(long)]
        full: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show aggregate ticket statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a ticket as resolved
    Resolve {
        /// Backend ticket id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the category split of one page of tickets
    Categories {
        /// Zero-based page index
        #[arg(long, default_value = "0")]
        page: u32,

        /// Tickets per page
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        size: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, page_size)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_url, page_size)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, Commands::Dashboard { .. })
    }

    pub async fn run(self) -> Result<()> {
        self.command.run(self.api_url.as_deref()).await
    }
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self, api_url: Option<&str>) -> Result<()> {
        match self {
            Commands::Dashboard { page_size } => cmd_dashboard(api_url, page_size).await,

            Commands::Ls {
                page,
                size,
                sort_by,
                direction,
                category,
                status,
                full,
                json,
            } => {
                cmd_ls(
                    api_url,
                    LsOptions {
                        page,
                        size,
                        sort_by,
                        direction,
                        category,
                        status,
                        full,
                        json,
                    },
                )
                .await
            }

            Commands::Stats { json } => cmd_stats(api_url, json).await,
            Commands::Resolve { id, json } => cmd_resolve(api_url, &id, json).await,
            Commands::Categories { page, size, json } => {
                cmd_categories(api_url, page, size, json).await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> std::result::Result<T, String>
where
    F: FnOnce(&str) -> std::result::Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    parse_with_validation(
        s,
        |v| Category::from_str(v).map_err(|_| String::new()),
        "category",
        VALID_CATEGORIES,
    )
}

fn parse_status(s: &str) -> std::result::Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| TicketStatus::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}

fn parse_direction(s: &str) -> std::result::Result<SortDirection, String> {
    parse_with_validation(
        s,
        |v| SortDirection::from_str(v).map_err(|_| String::new()),
        "direction",
        &["asc", "desc"],
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ticketdesk", &mut io::stdout());
}
