// UI layer: console output for records and results, plus the spinner and
// confirmation prompt used around long-running or destructive commands.
// Printing goes through any `io::Write` so the output can be captured.

use crate::humanize::{human_size, human_size_signed};
use crate::models::{DeleteAllEvent, DeleteOutcome, File, UploadResult, User};
use anyhow::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

pub fn print_user(out: &mut impl Write, user: &User) -> Result<()> {
    writeln!(out, "Username: {}", user.name)?;
    writeln!(out, "Usage: {}", human_size_signed(user.usage_bytes))?;
    if user.is_admin {
        writeln!(out, "You are an admin")?;
    }
    Ok(())
}

pub fn print_file(out: &mut impl Write, file: &File) -> Result<()> {
    writeln!(out, "- Name: {}", file.original_name)?;
    writeln!(out, "\t URL:  {}", file.url)?;
    writeln!(out, "\t Size: {}", human_size_signed(file.size_bytes))?;
    Ok(())
}

/// One block per file, in the order given. An empty slice prints nothing.
pub fn print_files(out: &mut impl Write, files: &[File]) -> Result<()> {
    for file in files {
        print_file(out, file)?;
    }
    Ok(())
}

pub fn print_upload(out: &mut impl Write, result: &UploadResult) -> Result<()> {
    writeln!(out, "New URL: {}", result.url)?;
    writeln!(out, "Size:    {}", human_size(result.size_bytes))?;
    Ok(())
}

pub fn print_delete_outcome(out: &mut impl Write, name: &str, outcome: &DeleteOutcome) -> Result<()> {
    match outcome {
        DeleteOutcome::Deleted { .. } => writeln!(out, "{} deleted!", name)?,
        DeleteOutcome::NotFound => writeln!(out, "{} not found :(", name)?,
    }
    Ok(())
}

pub fn print_delete_progress(out: &mut impl Write, event: DeleteAllEvent<'_>) -> Result<()> {
    match event {
        DeleteAllEvent::Started(file) => writeln!(out, "Deleting {} ....", file.original_name)?,
        DeleteAllEvent::Finished(file, outcome) => {
            print_delete_outcome(out, &file.original_name, outcome)?
        }
    }
    Ok(())
}

/// Spinner on stderr while a blocking request runs. indicatif hides it
/// when stderr is not a terminal.
pub fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask before wiping every file. Defaults to "no".
pub fn confirm_delete_all() -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt("Delete ALL of your files?")
        .default(false)
        .interact()?;
    Ok(answer)
}
