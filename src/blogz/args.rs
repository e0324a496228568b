use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), env!("BLOGZ_BUILD_INFO"));

#[derive(Parser, Debug)]
#[command(name = "blogz")]
#[command(about = "Create, edit, search and delete short articles", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $BLOGZ_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty article store
    Init,

    /// List all articles
    #[command(alias = "ls")]
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new article
    #[command(alias = "n")]
    Create {
        /// Header of the article
        header: String,

        /// Body of the article
        body: String,
    },

    /// Show one article in full
    #[command(alias = "v")]
    View {
        /// Article id
        id: String,
    },

    /// Replace the header and body of an article
    #[command(alias = "e")]
    Update {
        /// Article id
        id: String,

        /// New header
        header: String,

        /// New body
        body: String,
    },

    /// Delete an article
    #[command(alias = "rm")]
    Delete {
        /// Article id
        id: String,
    },

    /// List articles whose header or body contains a keyword (case-insensitive)
    Search {
        keyword: String,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, indent)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_update() {
        let cli = Cli::try_parse_from(["blogz", "update", "42", "Hi", "Earth"]).unwrap();
        match cli.command {
            Some(Commands::Update { id, header, body }) => {
                assert_eq!(id, "42");
                assert_eq!(header, "Hi");
                assert_eq!(body, "Earth");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blogz", "ls", "--json", "--dir", "/tmp/x", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn create_requires_body() {
        assert!(Cli::try_parse_from(["blogz", "create", "Only header"]).is_err());
    }
}
