//! Page-bounded text extraction with `lopdf` + `pdf-extract`.

use std::borrow::Cow;

use lopdf::Document;

use crate::error::ExtractError;
use crate::text::collapse_whitespace;

/// Normalised text of the leading pages of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPdf {
    /// One entry per extracted page, whitespace collapsed.
    pub pages: Vec<String>,
    /// Page count of the whole document.
    pub total_pages: u32,
}

/// Extract the text of at most `max_pages` pages.
///
/// # Errors
///
/// Returns an error if the bytes are not a PDF, the document has no pages,
/// or the text extractor fails.
pub fn extract_pages(bytes: &[u8], max_pages: u32) -> Result<ExtractedPdf, ExtractError> {
    let mut doc = Document::load_mem(bytes)?;

    let total_pages = u32::try_from(doc.get_pages().len()).unwrap_or(u32::MAX);
    if total_pages == 0 {
        return Err(ExtractError::Empty);
    }

    let keep = max_pages.clamp(1, total_pages);

    // Encrypted documents are passed through untouched; re-saving one after
    // lopdf has decrypted it would leave a stale /Encrypt entry behind.
    let bounded: Cow<'_, [u8]> = if keep < total_pages && !doc.is_encrypted() {
        let surplus: Vec<u32> = (keep + 1..=total_pages).collect();
        doc.delete_pages(&surplus);
        doc.prune_objects();

        let mut buf = Vec::with_capacity(bytes.len() / 2);
        doc.save_to(&mut buf).map_err(|e| ExtractError::Prepare(e.to_string()))?;
        Cow::Owned(buf)
    } else {
        Cow::Borrowed(bytes)
    };

    tracing::trace!(total_pages, keep, bytes = bounded.len(), "Extracting PDF text");

    let raw = pdf_extract::extract_text_from_mem_by_pages(&bounded)
        .map_err(|e| ExtractError::Extract(e.to_string()))?;

    let pages = raw.iter().take(keep as usize).map(|p| collapse_whitespace(p)).collect();

    Ok(ExtractedPdf { pages, total_pages })
}

/// Run [`extract_pages`] on the blocking pool.
///
/// A panic inside the extractor is reported as [`ExtractError::Panicked`].
///
/// # Errors
///
/// Same as [`extract_pages`], plus [`ExtractError::Panicked`].
pub async fn extract_pages_blocking(
    bytes: Vec<u8>,
    max_pages: u32,
) -> Result<ExtractedPdf, ExtractError> {
    match tokio::task::spawn_blocking(move || extract_pages(&bytes, max_pages)).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            let payload = e.into_panic();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%message, "PDF text extractor panicked");
            Err(ExtractError::Panicked(message))
        }
        Err(e) => Err(ExtractError::Panicked(e.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    /// Build a PDF whose page `n` reads `"Page {n} body text"`.
    pub(crate) fn pdf_with_pages(count: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for n in 1..=count {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(format!("Page {n} body text"))]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => i64::from(count),
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
