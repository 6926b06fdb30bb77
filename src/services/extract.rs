//! Attachment classification and text extraction.
//!
//! Uploads are classified into a tagged variant up front so every kind
//! has exactly one extraction strategy and unsupported types are an
//! explicit branch. PDF and DOCX extraction run entirely in memory.

use crate::error::AppError;
use crate::services::providers::ImagePart;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;

/// An uploaded file, classified by kind.
pub enum Attachment {
    Pdf(Vec<u8>),
    Docx(Vec<u8>),
    Image(ImagePart),
}

impl Attachment {
    /// Classify a document upload by filename extension.
    ///
    /// Anything other than `.pdf` or `.docx` is rejected before any
    /// generation call is attempted.
    pub fn document(file_name: &str, bytes: Vec<u8>) -> Result<Self, AppError> {
        let name = file_name.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Ok(Attachment::Pdf(bytes))
        } else if name.ends_with(".docx") {
            Ok(Attachment::Docx(bytes))
        } else {
            Err(AppError::UnsupportedMedia)
        }
    }

    /// Accept an image upload, decoding the bytes to verify they are a
    /// valid image before they are forwarded to the model.
    pub fn image(bytes: Vec<u8>, mime_type: String) -> Result<Self, AppError> {
        image::load_from_memory(&bytes)
            .map_err(|e| AppError::Validation(format!("Invalid image data: {}", e)))?;

        Ok(Attachment::Image(ImagePart { mime_type, bytes }))
    }

    /// Extract plain text from the attachment.
    ///
    /// Images carry no extractable text; their bytes go to the model as
    /// a separate content part instead.
    pub fn extracted_text(&self) -> Result<Option<String>, AppError> {
        match self {
            Attachment::Pdf(bytes) => extract_pdf_text(bytes).map(Some),
            Attachment::Docx(bytes) => extract_docx_text(bytes).map(Some),
            Attachment::Image(_) => Ok(None),
        }
    }

    /// The image payload, for image attachments.
    pub fn image_part(&self) -> Option<&ImagePart> {
        match self {
            Attachment::Image(part) => Some(part),
            _ => None,
        }
    }
}

/// Extract visible text from every page of a PDF, in document order.
///
/// Pages without extractable text contribute nothing; an image-only PDF
/// yields an empty string rather than an error.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Validation(format!("Failed to read PDF: {}", e)))
}

/// Extract every paragraph of a DOCX file in document order, each
/// followed by a newline.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let invalid =
        |e: &dyn std::fmt::Display| AppError::Validation(format!("Invalid DOCX file: {}", e));

    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).map_err(|e| invalid(&e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| invalid(&e))?
        .read_to_string(&mut xml)
        .map_err(|e| invalid(&e))?;

    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut paragraph = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    out.push_str(&paragraph);
                    out.push('\n');
                    paragraph.clear();
                }
                _ => {}
            },
            // Empty paragraphs still occupy a line.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Text(t)) if in_text => {
                paragraph.push_str(&t.unescape().map_err(|e| invalid(&e))?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(invalid(&e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}
