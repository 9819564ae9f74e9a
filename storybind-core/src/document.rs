use printpdf::image_crate;
use printpdf::{Image, ImageTransform, Mm, PdfDocument, PdfDocumentReference, Px};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Web story scans are screen-resolution images; rendering them at 96
/// DPI gives pages that match the on-screen size.
const IMAGE_DPI: f32 = 96.0;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to write PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An in-progress PDF: an ordered sequence of pages, each holding
/// exactly one image, sized to that image.
pub struct StoryDocument {
    doc: PdfDocumentReference,
    pages: usize,
}

impl StoryDocument {
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::empty(title),
            pages: 0,
        }
    }

    /// Decode the staged image file and append it as a new page.
    pub fn add_image_page(&mut self, staged: &Path) -> Result<(), DocumentError> {
        let image = image_crate::open(staged)
            .map_err(|e| DocumentError::Decode(format!("{}: {}", staged.display(), e)))?;

        let width = Mm::from(Px(image.width() as usize).into_pt(IMAGE_DPI));
        let height = Mm::from(Px(image.height() as usize).into_pt(IMAGE_DPI));

        let (page, layer) = self
            .doc
            .add_page(width, height, format!("Page {}", self.pages + 1));
        let layer = self.doc.get_page(page).get_layer(layer);

        Image::from_dynamic_image(&image).add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );

        self.pages += 1;
        debug!("Appended page {} ({}x{} px)", self.pages, image.width(), image.height());
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Persist the finished document. Consumes the document; callers
    /// check `page_count` first and skip the write when it is zero.
    pub fn save(self, path: &Path) -> Result<(), DocumentError> {
        let file = File::create(path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| DocumentError::Pdf(e.to_string()))
    }
}
