use log::debug;
use mupdf::{Document, Page, TextPageFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Open(mupdf::Error),
    #[error("page {page}: {source}")]
    Page { page: i32, #[source] source: mupdf::Error },
}

/// An opened PDF. Dropping it releases the MuPDF handle.
pub struct PdfDocument { doc: Document, path: String }

impl PdfDocument {
    pub fn open(path: &str) -> Result<Self, ExtractError> {
        Ok(Self { doc: Document::open(path).map_err(ExtractError::Open)?, path: path.to_string() })
    }

    pub fn page_count(&self) -> Result<i32, ExtractError> {
        self.doc.page_count().map_err(ExtractError::Open)
    }

    /// Page texts in document order, each page loaded only when reached.
    pub fn into_pages(self) -> Result<Pages, ExtractError> {
        let count = self.page_count()?;
        debug!("opened {} ({count} pages)", self.path);
        Ok(Pages { doc: self.doc, next: 0, count })
    }
}

pub struct Pages { doc: Document, next: i32, count: i32 }

impl Iterator for Pages {
    type Item = Result<String, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count { return None; }
        let page = self.next;
        self.next += 1;
        let text = self.doc.load_page(page).and_then(|p| page_text(&p));
        if text.is_err() { self.next = self.count; } // stop after the first failure
        Some(text.map_err(|source| ExtractError::Page { page: page + 1, source }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.next).max(0) as usize;
        (0, Some(left))
    }
}

// One string per text line, joined with '\n'. Chars without a unicode mapping are dropped.
fn page_text(page: &Page) -> Result<String, mupdf::Error> {
    let text_page = page.to_text_page(TextPageFlags::empty())?;
    let mut lines = Vec::new();
    for block in text_page.blocks() {
        for line in block.lines() {
            lines.push(line.chars().filter_map(|ch| ch.char()).collect::<String>());
        }
    }
    Ok(lines.join("\n"))
}
