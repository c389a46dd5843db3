use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fstore_protocol::DEFAULT_FREQ_LIMIT;
use fstore_types::SortOrder;

/// Server the client talks to when neither `--url` nor `FSTORE_URL` is set.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(
    name = "fstore",
    about = "fstore: a small networked file store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the fstore server
    #[arg(long, global = true, env = "FSTORE_URL", default_value = DEFAULT_URL)]
    pub url: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add files to the store
    Add(AddArgs),
    /// List files in the store
    Ls,
    /// Remove a file from the store
    Rm(RmArgs),
    /// Replace the content of a stored file
    Update(UpdateArgs),
    /// Count words across all files in the store
    Wc,
    /// Show the most or least frequent words in the store
    FreqWords(FreqWordsArgs),
    /// Check that the server is up
    Health,
    /// Run the fstore server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Local files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Stored file name to remove
    pub filename: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Stored file name to replace
    pub filename: String,
    /// Local file holding the new content
    pub new_file: PathBuf,
}

#[derive(Args)]
pub struct FreqWordsArgs {
    /// Number of words to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_FREQ_LIMIT)]
    pub limit: usize,
    /// Most frequent first (dsc) or least frequent first (asc)
    #[arg(long, default_value_t = SortOrder::Dsc)]
    pub order: SortOrder,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Address to bind, overriding the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Upload directory, overriding the config file
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_many() {
        let cli = Cli::try_parse_from(["fstore", "add", "a.txt", "b.txt"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn add_requires_a_file() {
        assert!(Cli::try_parse_from(["fstore", "add"]).is_err());
    }

    #[test]
    fn parse_ls_and_wc() {
        let cli = Cli::try_parse_from(["fstore", "ls"]).unwrap();
        assert!(matches!(cli.command, Command::Ls));
        let cli = Cli::try_parse_from(["fstore", "wc"]).unwrap();
        assert!(matches!(cli.command, Command::Wc));
    }

    #[test]
    fn parse_rm() {
        let cli = Cli::try_parse_from(["fstore", "rm", "old.txt"]).unwrap();
        if let Command::Rm(args) = cli.command {
            assert_eq!(args.filename, "old.txt");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_update() {
        let cli = Cli::try_parse_from(["fstore", "update", "stored.txt", "./local.txt"]).unwrap();
        if let Command::Update(args) = cli.command {
            assert_eq!(args.filename, "stored.txt");
            assert_eq!(args.new_file, PathBuf::from("./local.txt"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn freq_words_defaults() {
        let cli = Cli::try_parse_from(["fstore", "freq-words"]).unwrap();
        if let Command::FreqWords(args) = cli.command {
            assert_eq!(args.limit, 10);
            assert_eq!(args.order, SortOrder::Dsc);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn freq_words_short_limit_and_order() {
        let cli = Cli::try_parse_from(["fstore", "freq-words", "-n", "3", "--order", "asc"]).unwrap();
        if let Command::FreqWords(args) = cli.command {
            assert_eq!(args.limit, 3);
            assert_eq!(args.order, SortOrder::Asc);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn freq_words_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["fstore", "freq-words", "--order", "desc"]).is_err());
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["fstore", "serve", "--bind", "0.0.0.0:8080", "--root", "/srv"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(args.root, Some(PathBuf::from("/srv")));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_url_and_format() {
        let cli = Cli::try_parse_from(["fstore", "--url", "http://h:1", "--format", "json", "ls"]).unwrap();
        assert_eq!(cli.url, "http://h:1");
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["fstore", "--verbose", "health"]).unwrap();
        assert!(cli.verbose);
    }
}
