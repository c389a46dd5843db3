use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use fstore_protocol::{FileListResponse, FrequentWordsResponse, MessageResponse};
use fstore_server::{FileServer, ServerConfig};
use serde::Serialize;

use crate::cli::*;
use crate::client::{StoreClient, Upload};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = &cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Add(args) => cmd_add(&connect(&cli.url)?, args, format).await,
        Command::Ls => cmd_ls(&connect(&cli.url)?, format).await,
        Command::Rm(args) => {
            let resp = connect(&cli.url)?.remove(&args.filename).await?;
            print_message(&resp, format)
        }
        Command::Update(args) => cmd_update(&connect(&cli.url)?, args, format).await,
        Command::Wc => {
            let resp = connect(&cli.url)?.word_count().await?;
            render(&resp, format, || {
                println!("Total words: {}", resp.total_words.to_string().bold());
            })
        }
        Command::FreqWords(args) => cmd_freq_words(&connect(&cli.url)?, args, format).await,
        Command::Health => cmd_health(&connect(&cli.url)?, format).await,
    }
}

fn connect(url: &str) -> anyhow::Result<StoreClient> {
    Ok(StoreClient::new(url)?)
}

/// Print `value` as pretty JSON, or run the text renderer.
fn render<T: Serialize>(value: &T, format: &OutputFormat, text: impl FnOnce()) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(),
    }
    Ok(())
}

fn print_message(resp: &MessageResponse, format: &OutputFormat) -> anyhow::Result<()> {
    render(resp, format, || {
        // Outcomes share one status code; only the text says whether it worked.
        if resp.message.trim_end_matches('.').ends_with("successfully") {
            println!("{} {}", "✓".green().bold(), resp.message);
        } else {
            println!("{} {}", "✗".yellow().bold(), resp.message.yellow());
        }
    })
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?
        .to_string();
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Upload { name, data })
}

async fn cmd_add(client: &StoreClient, args: AddArgs, format: &OutputFormat) -> anyhow::Result<()> {
    // Nothing is sent unless every path exists.
    if let Some(missing) = args.files.iter().find(|p| !p.exists()) {
        println!("File {} does not exist.", missing.display());
        return Ok(());
    }
    let uploads = args
        .files
        .iter()
        .map(|p| read_upload(p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let resp = client.add(uploads).await?;
    print_message(&resp, format)
}

async fn cmd_ls(client: &StoreClient, format: &OutputFormat) -> anyhow::Result<()> {
    let resp: FileListResponse = client.list().await?;
    render(&resp, format, || {
        if resp.files.is_empty() {
            println!("No files stored.");
        }
        for name in &resp.files {
            println!("{name}");
        }
    })
}

async fn cmd_update(client: &StoreClient, args: UpdateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    if !args.new_file.exists() {
        println!("File {} does not exist.", args.new_file.display());
        return Ok(());
    }
    let upload = read_upload(&args.new_file)?;
    let resp = client.update(&args.filename, upload).await?;
    print_message(&resp, format)
}

async fn cmd_freq_words(client: &StoreClient, args: FreqWordsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let resp: FrequentWordsResponse = client.frequent_words(args.limit, args.order).await?;
    render(&resp, format, || {
        if resp.frequent_words.is_empty() {
            println!("No words stored.");
            return;
        }
        let width = resp
            .frequent_words
            .iter()
            .map(|wf| wf.token().chars().count())
            .max()
            .unwrap_or(0);
        for (rank, wf) in resp.frequent_words.iter().enumerate() {
            println!(
                "{:>3}. {:<width$}  {}",
                rank + 1,
                wf.token(),
                wf.count().to_string().cyan(),
            );
        }
    })
}

async fn cmd_health(client: &StoreClient, format: &OutputFormat) -> anyhow::Result<()> {
    let resp = client.health().await?;
    render(&resp, format, || {
        println!(
            "{} {} (version {})",
            "✓".green().bold(),
            client.base_url().as_str().bold(),
            resp.version
        );
        println!("  {} files, {} bytes", resp.files, resp.bytes);
    })
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    if let Some(root) = args.root {
        config.upload_dir = root;
    }
    println!(
        "fstore server on {} (files in {})",
        config.bind_addr.to_string().bold(),
        config.upload_dir.display()
    );
    FileServer::new(config).serve().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn upload_uses_final_path_component() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"some words").unwrap();
        let upload = read_upload(&path).unwrap();
        assert_eq!(upload.name, "notes.txt");
        assert_eq!(upload.data, b"some words");
    }

    #[test]
    fn upload_of_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_upload(&dir.path().join("absent")).is_err());
    }

    #[tokio::test]
    async fn client_commands_reject_a_bad_url() {
        for args in [vec!["ls"], vec!["wc"], vec!["rm", "a.txt"], vec!["health"]] {
            let argv = ["fstore", "--url", "not a url"].into_iter().chain(args);
            let cli = Cli::try_parse_from(argv).unwrap();
            let err = run_command(cli).await.unwrap_err();
            assert!(err.to_string().contains("invalid server URL"), "{err}");
        }
    }

    #[tokio::test]
    async fn add_with_missing_file_sends_nothing() {
        // Nothing listens on this URL; reaching the network would fail.
        let client = StoreClient::new("http://127.0.0.1:9").unwrap();
        let args = AddArgs {
            files: vec!["/definitely/not/here.txt".into()],
        };
        cmd_add(&client, args, &OutputFormat::Text).await.unwrap();
    }
}
