//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Render the man page for the main command and one page per subcommand to
/// the output directory if specified, else the current directory.
///
/// # Errors
///
/// Returns a [`Result`] with an [`anyhow::Error`] if the output directory or
/// a man page file could not be created.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let output_dir: PathBuf = output_dir.unwrap_or(
        std::env::current_dir().context("Opening current directory")?,
    );

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let root_name = cmd.get_name().to_string();
    render_man_page(cmd.clone(), &output_dir.join(format!("{root_name}.1")))?;

    for subcmd in cmd.get_subcommands() {
        // Prefix the subcommand so clap_mangen uses the full name in the
        // NAME and SYNOPSIS sections. The leaked &'static str is fine here
        // since man page generation is a one-shot operation.
        let prefixed = format!("{}-{}", root_name, subcmd.get_name());
        let leaked_name: &'static str =
            Box::leak(prefixed.clone().into_boxed_str());
        let renamed =
            subcmd.clone().name(leaked_name).disable_help_subcommand(true);
        render_man_page(renamed, &output_dir.join(format!("{prefixed}.1")))?;
    }

    Ok(())
}

/// Render a single man page to `path`.
fn render_man_page(cmd: clap::Command, path: &std::path::Path) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    man.render(&mut file)?;
    println!("Generated: {}", path.display());
    Ok(())
}
