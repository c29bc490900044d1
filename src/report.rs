use std::fmt::Display;
use std::io::{self, Write};
use log::warn;
use crate::extract::{ExtractError, PdfDocument};

/// Totals for one run over a path list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary { pub read: usize, pub failed: usize, pub pages: usize }

/// Writes the START marker, each page as it arrives, an error line if the
/// source fails, then the END marker. Only errors on `out` itself bubble up.
pub fn write_report<W, I, E>(out: &mut W, path: &str, pages: Result<I, E>) -> io::Result<Result<usize, E>>
where
    W: Write,
    I: IntoIterator<Item = Result<String, E>>,
    E: Display,
{
    writeln!(out, "--- START OF {path} ---")?;
    let outcome = match pages {
        Ok(pages) => write_pages(out, pages)?,
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        writeln!(out, "Error reading {path}: {e}")?;
    }
    writeln!(out, "--- END OF {path} ---")?;
    Ok(outcome)
}

fn write_pages<W: Write, I, E>(out: &mut W, pages: I) -> io::Result<Result<usize, E>>
where I: IntoIterator<Item = Result<String, E>> {
    let mut written = 0;
    for page in pages {
        match page {
            Ok(text) => { writeln!(out, "{text}")?; written += 1; }
            Err(e) => return Ok(Err(e)),
        }
    }
    Ok(Ok(written))
}

pub fn dump<W: Write>(out: &mut W, path: &str) -> io::Result<Result<usize, ExtractError>> {
    let pages = PdfDocument::open(path).and_then(PdfDocument::into_pages);
    write_report(out, path, pages)
}

pub fn dump_all<W: Write, P: AsRef<str>>(out: &mut W, paths: &[P]) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for path in paths {
        let path = path.as_ref();
        match dump(out, path)? {
            Ok(n) => { summary.read += 1; summary.pages += n; }
            Err(e) => { summary.failed += 1; warn!("failed to read {path}: {e}"); }
        }
    }
    Ok(summary)
}
