use anyhow::Context;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use texfmt_core::{FormatOptions, IndentUnit, VerbatimHandling};

#[derive(Parser, Debug)]
#[command(name = "texfmt")]
#[command(version)]
#[command(about = "Format LaTeX source code with proper indentation", long_about = None)]
struct Cli {
    /// LaTeX file to format
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Edit the file in place (default: print to stdout)
    #[arg(short, long)]
    in_place: bool,

    /// Create a backup of the original file before editing in place
    #[arg(short, long)]
    backup: bool,

    /// Number of spaces per indent level
    #[arg(short, long, value_name = "N", default_value_t = 4)]
    spaces: usize,

    /// Use a tab character instead of spaces for indentation
    #[arg(short, long)]
    tabs: bool,

    /// Keep verbatim blocks byte-for-byte even inside sections
    #[arg(long)]
    protect_verbatim: bool,
}

impl Cli {
    fn options(&self) -> FormatOptions {
        let indent = if self.tabs {
            IndentUnit::tab()
        } else {
            IndentUnit::spaces(self.spaces)
        };
        let verbatim = if self.protect_verbatim {
            VerbatimHandling::Protect
        } else {
            VerbatimHandling::Shift
        };
        FormatOptions { indent, verbatim }
    }
}

/// `<file>.bak`, next to the original.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let options = cli.options();
    log::debug!("formatting {} with {:?}", cli.file.display(), options);
    let formatted = texfmt_core::format(&source, &options);

    if !cli.in_place {
        if cli.backup {
            log::warn!("--backup has no effect without --in-place");
        }
        writeln!(out, "\n\n{}\n\n", formatted)?;
        return Ok(());
    }

    if cli.backup {
        let backup = backup_path(&cli.file);
        fs::copy(&cli.file, &backup)
            .with_context(|| format!("failed to create backup {}", backup.display()))?;
        writeln!(out, "Backup created: {}", backup.display())?;
    }

    fs::write(&cli.file, formatted)
        .with_context(|| format!("failed to write {}", cli.file.display()))?;
    writeln!(out, "File formatted in place: {}", cli.file.display())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}
