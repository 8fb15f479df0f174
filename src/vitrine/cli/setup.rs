use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vitrine", bin_name = "vitrine", version)]
#[command(about = "Browse a tagged catalog one page at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Use the global configuration
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show one page of the catalog
    #[command(alias = "ls")]
    List {
        /// Tag to filter by ("all" for everything)
        #[arg(default_value = "all")]
        filter: String,

        /// Show every match instead of the first page
        #[arg(short, long)]
        all: bool,
    },

    /// List the available filters
    #[command(alias = "t")]
    Tags,

    /// Browse interactively, reading commands from stdin
    #[command(alias = "b")]
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, reveal-step-ms, item-noun, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the configuration directory
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["vitrine"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_defaults_to_all() {
        let cli = Cli::try_parse_from(["vitrine", "list"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                filter: "all".into(),
                all: false
            })
        );
    }

    #[test]
    fn list_alias_with_tag_and_all() {
        let cli = Cli::try_parse_from(["vitrine", "ls", "floral", "--all"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                filter: "floral".into(),
                all: true
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "tags",
            "--catalog",
            "shop.json",
            "--no-color",
            "-g",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Tags));
        assert_eq!(cli.catalog, Some(PathBuf::from("shop.json")));
        assert!(cli.no_color);
        assert!(cli.global);
    }

    #[test]
    fn config_key_and_value() {
        let cli = Cli::try_parse_from(["vitrine", "config", "page-size", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("page-size".into()),
                value: Some("9".into())
            })
        );
    }
}
