//! Text extraction from uploaded resume files.
//!
//! Extraction is fail-soft: a corrupt or unparseable file degrades to an
//! empty string (logged as a warning) instead of failing the request.
//! Downstream scoring treats empty text as "no keywords, all formatting
//! checks fail".

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// Supported upload kinds, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Doc,
    Docx,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "doc" => Some(FileKind::Doc),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }
}

/// Extracts lowercase plain text from an uploaded file.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> String {
    match kind {
        FileKind::Pdf => extract_text_from_pdf(bytes),
        // Legacy .doc uploads go through the same path as .docx; anything the
        // zip reader cannot open degrades to empty text.
        FileKind::Doc | FileKind::Docx => extract_text_from_docx(bytes),
    }
}

/// All pages concatenated in document order.
fn extract_text_from_pdf(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text.to_lowercase(),
        Err(e) => {
            warn!("Failed to extract text from PDF: {e}");
            String::new()
        }
    }
}

/// Paragraph texts concatenated in document order, one `\n` per paragraph.
fn extract_text_from_docx(bytes: &[u8]) -> String {
    match read_docx_document_xml(bytes) {
        Ok(xml) => paragraphs_to_text(&xml).to_lowercase(),
        Err(e) => {
            warn!("Failed to extract text from DOCX: {e}");
            String::new()
        }
    }
}

/// A .docx file is a zip container; the body lives in `word/document.xml`.
fn read_docx_document_xml(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut document = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Flattens WordprocessingML into plain text: each closing `</w:p>` becomes a
/// newline, remaining tags are stripped, entities unescaped.
fn paragraphs_to_text(xml: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex compiles"));

    let with_breaks = xml.replace("</w:p>", "\n");
    let text = tag_re.replace_all(&with_breaks, "");

    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Builds a minimal in-memory .docx containing the given paragraphs.
    fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document><w:body>{body}</w:body></w:document>"#
        );

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_extension("pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_extension("PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_extension("doc"), Some(FileKind::Doc));
        assert_eq!(FileKind::from_extension("docx"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_extension("txt"), None);
        assert_eq!(FileKind::from_extension(""), None);
    }

    #[test]
    fn test_docx_paragraphs_become_lowercase_lines() {
        let docx = make_docx(&["Python developer", "5 years experience"]);
        let text = extract_text(&docx, FileKind::Docx);
        assert!(
            text.contains("python developer\n5 years experience\n"),
            "Got: {text:?}"
        );
    }

    #[test]
    fn test_docx_entities_are_unescaped() {
        let docx = make_docx(&["C&amp;I engineer"]);
        let text = extract_text(&docx, FileKind::Docx);
        assert!(text.contains("c&i engineer"));
    }

    #[test]
    fn test_corrupt_pdf_degrades_to_empty_text() {
        let text = extract_text(b"not a real pdf", FileKind::Pdf);
        assert_eq!(text, "");
    }

    #[test]
    fn test_corrupt_docx_degrades_to_empty_text() {
        let text = extract_text(b"not a zip container", FileKind::Docx);
        assert_eq!(text, "");
    }

    #[test]
    fn test_doc_kind_uses_docx_path() {
        let docx = make_docx(&["Backend engineer"]);
        let text = extract_text(&docx, FileKind::Doc);
        assert!(text.contains("backend engineer"));
    }
}
