// Command line definition and dispatcher. `run` executes exactly one
// command and leaves exit codes to `main`.

use crate::models::DeleteAllMode;
use crate::service::DoggoService;
use crate::ui;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "growl",
    version,
    about = "growl: a tool for interacting with doggo.ninja",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List your files (the default)
    #[command(alias = "list")]
    Ls,
    /// Show account information and usage
    User,
    /// Upload a file
    Upload {
        /// Accepted for compatibility; has no effect
        #[arg(short = 'd', long = "dir")]
        dir: bool,
        /// Path of the file to upload
        path: PathBuf,
    },
    /// Delete a file by the name it was uploaded with
    Delete {
        /// Delete every file
        #[arg(long)]
        all: bool,
        /// With --all: list once and delete by short name
        #[arg(long, requires = "all")]
        single_pass: bool,
        /// With --all: do not ask for confirmation
        #[arg(short = 'y', long, requires = "all")]
        yes: bool,
        /// The original name of the file to delete
        #[arg(required_unless_present = "all")]
        original_name: Option<String>,
    },
}

pub fn run(cli: Cli, service: &DoggoService, out: &mut impl Write) -> Result<()> {
    // Bare version number, no program name
    if cli.version {
        writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    match cli.command.unwrap_or(Command::Ls) {
        Command::Ls => {
            let files = service.list_files()?;
            ui::print_files(out, &files)?;
        }
        Command::User => {
            let user = service.fetch_user()?;
            ui::print_user(out, &user)?;
        }
        Command::Upload { dir, path } => {
            if dir {
                tracing::debug!("--dir has no effect");
            }
            let spinner = ui::spinner(format!("Uploading {} ...", path.display()));
            let result = service.upload_file(&path);
            spinner.finish_and_clear();
            ui::print_upload(out, &result?)?;
        }
        Command::Delete {
            all: true,
            single_pass,
            yes,
            ..
        } => {
            // Only prompt when someone is there to answer
            if !yes && std::io::stdin().is_terminal() && !ui::confirm_delete_all()? {
                writeln!(out, "Aborted")?;
                return Ok(());
            }
            let mode = if single_pass {
                DeleteAllMode::Snapshot
            } else {
                DeleteAllMode::Relist
            };
            service.delete_all(mode, |event| ui::print_delete_progress(out, event))?;
            writeln!(out, "Mass delete finished")?;
        }
        Command::Delete { original_name, .. } => {
            // clap guarantees a name when --all is absent
            let name = original_name.unwrap_or_default();
            writeln!(out, "Deleting {}", name)?;
            let outcome = service.delete_file(&name)?;
            ui::print_delete_outcome(out, &name, &outcome)?;
        }
    }
    Ok(())
}
