//! Development tasks for rcat.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for rcat")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the rcat(1) man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn generate_man(out: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let cmd = rcat::Cli::command();
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;

    let path = out.join("rcat.1");
    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn generate_completions(out: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let mut written = Vec::new();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let mut cmd = rcat::Cli::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "rcat", out)
            .with_context(|| format!("generating {} completions", shell))?;
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => {
            let path = generate_man(&out)?;
            println!("Wrote {}", path.display());
        }
        Task::Completions { out } => {
            for path in generate_completions(&out)? {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
