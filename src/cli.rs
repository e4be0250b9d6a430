use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "slack-archiver")]
#[command(version)]
#[command(about = "Archive a Slack enterprise grid from an export zip", long_about = None)]
#[command(after_help = "Examples:\n  \
  slack-archiver list teams --src export.zip       list teams as JSON lines\n  \
  slack-archiver list files --src export.zip       list file attachments as JSON lines\n  \
  slack-archiver download files --src export.zip --dest ./files   download attachments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List data from the export
    #[command(subcommand)]
    List(ListCommand),

    /// Download data referenced by the export
    #[command(subcommand)]
    Download(DownloadCommand),

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// List file attachments, one JSON record per line
    Files(SourceArgs),

    /// List teams, one JSON record per line
    Teams(SourceArgs),
}

#[derive(Subcommand, Debug)]
pub enum DownloadCommand {
    /// Download file attachments into a partitioned directory tree
    Files(DownloadArgs),
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to the Slack export zip file
    #[arg(short = 's', long = "src", env = "SRC", value_name = "FILE")]
    pub src: PathBuf,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Path to the Slack export zip file
    #[arg(long = "src", env = "SRC", value_name = "FILE")]
    pub src: PathBuf,

    /// Directory to download files into
    #[arg(long = "dest", env = "DEST", value_name = "DIR")]
    pub dest: PathBuf,

    /// Overwrite existing files even when sizes match
    #[arg(long, env = "OVERWRITE")]
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_files() {
        let cli = Cli::try_parse_from(["slack-archiver", "list", "files", "--src", "export.zip"])
            .unwrap();
        match cli.command {
            Command::List(ListCommand::Files(args)) => {
                assert_eq!(args.src, PathBuf::from("export.zip"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_download_files_with_overwrite() {
        let cli = Cli::try_parse_from([
            "slack-archiver",
            "download",
            "files",
            "--src",
            "export.zip",
            "--dest",
            "out",
            "--overwrite",
        ])
        .unwrap();
        match cli.command {
            Command::Download(DownloadCommand::Files(args)) => {
                assert_eq!(args.src, PathBuf::from("export.zip"));
                assert_eq!(args.dest, PathBuf::from("out"));
                assert!(args.overwrite);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn src_is_required_and_binds_from_environment() {
        // One test so the SRC mutation cannot race a parallel parse.
        assert!(Cli::try_parse_from(["slack-archiver", "list", "teams"]).is_err());

        unsafe { std::env::set_var("SRC", "from-env.zip") };
        let cli = Cli::try_parse_from(["slack-archiver", "list", "teams"]).unwrap();
        unsafe { std::env::remove_var("SRC") };

        match cli.command {
            Command::List(ListCommand::Teams(args)) => {
                assert_eq!(args.src, PathBuf::from("from-env.zip"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
