//! Command-line entry point.
//!
//! Three operations over an export zip: list file attachments as JSON
//! lines, list teams as JSON lines, and download attachments into a
//! partitioned directory tree. Errors go to stderr and exit non-zero;
//! listing output is incremental, so lines emitted before a mid-stream
//! failure remain valid.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slack_archiver::cli::{Cli, Command, DownloadCommand, ListCommand};
use slack_archiver::model::MessageFile;
use slack_archiver::{Archive, EnterpriseGrid, download};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(ListCommand::Files(args)) => list_files(&args.src).await,
        Command::List(ListCommand::Teams(args)) => list_teams(&args.src).await,
        Command::Download(DownloadCommand::Files(args)) => {
            download_files(&args.src, &args.dest, args.overwrite).await
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Emit one JSON line per file attachment found anywhere in the export.
async fn list_files(src: &Path) -> Result<()> {
    let archive = Archive::open(src).await?;
    let grid = EnterpriseGrid::build(&archive).await?;

    let mut stdout = std::io::stdout().lock();
    for prefix in grid.conversation_prefixes() {
        let messages = grid
            .messages(&prefix)
            .await
            .with_context(|| format!("error reading messages for conversation {prefix:?}"))?;
        for message in messages {
            for file in message.files.iter().flatten() {
                serde_json::to_writer(&mut stdout, file)?;
                stdout.write_all(b"\n")?;
            }
        }
    }

    drop(grid);
    archive.close()?;
    Ok(())
}

/// Emit one JSON line per discovered team.
async fn list_teams(src: &Path) -> Result<()> {
    let archive = Archive::open(src).await?;
    let grid = EnterpriseGrid::build(&archive).await?;

    let mut stdout = std::io::stdout().lock();
    for team in grid.teams() {
        serde_json::to_writer(&mut stdout, team)
            .with_context(|| format!("error encoding team {:?}", team.name))?;
        stdout.write_all(b"\n")?;
    }

    drop(grid);
    archive.close()?;
    Ok(())
}

/// Collect every attachment in the export, then download the hosted ones.
async fn download_files(src: &Path, dest: &Path, overwrite: bool) -> Result<()> {
    let archive = Archive::open(src).await?;
    let grid = EnterpriseGrid::build(&archive).await?;

    let mut all_files: Vec<MessageFile> = Vec::new();
    for prefix in grid.conversation_prefixes() {
        let messages = grid
            .messages(&prefix)
            .await
            .with_context(|| format!("error reading messages for conversation {prefix:?}"))?;
        for message in messages {
            if let Some(files) = message.files {
                all_files.extend(files);
            }
        }
    }

    drop(grid);
    archive.close()?;

    download::download_files(&all_files, dest, overwrite).await?;
    Ok(())
}
