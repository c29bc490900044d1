mod extract;
mod report;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{self, Write};

const DEFAULT_FILES: &[&str] = &[
    r"c:\Users\Hello\Downloads\Machine Intelligence  Assignment 1.pdf",
    r"c:\Users\Hello\Downloads\Introduction_MI.pdf",
];

#[derive(Parser)]
#[command(name = "pdfdump", about = "Print the text of each page of a list of PDFs")]
struct Args {
    /// PDF files to read, in order (defaults to the built-in list)
    files: Vec<String>,

    /// `;`-separated file list, used when no files are given
    #[arg(long = "files-env", env = "PDFDUMP_FILES", hide = true)]
    env_files: Option<String>,
}

impl Args {
    fn files(&self) -> Vec<&str> {
        let given: Vec<&str> = self.files.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
        if !given.is_empty() { return given; }
        let listed: Vec<&str> = self.env_files.as_deref().unwrap_or("").split(';').filter(|p| !p.is_empty()).collect();
        if listed.is_empty() { DEFAULT_FILES.to_vec() } else { listed }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = report::dump_all(&mut out, &args.files())?;
    out.flush()?;

    info!("{} read, {} failed, {} pages", summary.read, summary.failed, summary.pages);
    Ok(())
}
