use std::{io::Cursor, sync::Arc};

use deckle_model::element::{ElementId, ElementInner, Media};
use image::ImageReader;

use crate::Editor;

/// MIME type of clips coming out of the recorder
pub const RECORDING_MIME: &str = "audio/wav";

impl Editor {
    /// Adds a text block reading the configured default text
    pub fn create_text(&mut self) -> ElementId {
        let inner = ElementInner::Text {
            content: self.config.default_text.clone(),
            font_size: self.config.default_font_size,
            color: self.config.default_text_color,
        };
        self.place(inner)
    }

    /// Adds an image at its natural width
    pub fn create_image(&mut self, media: Media) -> ElementId {
        let width = natural_width(&media).unwrap_or(self.config.default_image_width);
        self.place(ElementInner::Image {
            media,
            width,
            mirrored: false,
        })
    }

    pub fn create_audio(&mut self, media: Media) -> ElementId {
        self.place(ElementInner::Audio { media })
    }

    pub fn create_audio_from_recording(&mut self, clip: Arc<[u8]>) -> ElementId {
        self.create_audio(Media::new(clip, RECORDING_MIME))
    }

    /// Puts `inner` on the active slide, makes it draggable and then
    /// selects it
    fn place(&mut self, inner: ElementInner) -> ElementId {
        let kind = inner.kind();
        let target = self.slides.insert_element(self.config.default_position, inner);
        self.drag.attach(target.element);
        self.selection.select(self.slides.deck_mut(), target);
        tracing::debug!(?kind, ?target, "Created element");
        target.element
    }
}

/// Reads the pixel width from the image header without decoding the
/// image itself
fn natural_width(media: &Media) -> Option<f32> {
    let reader = match ImageReader::new(Cursor::new(&media.data[..])).with_guessed_format() {
        Ok(reader) => reader,
        Err(error) => {
            tracing::warn!(%error, mime = %media.mime, "Failed to read image header");
            return None;
        }
    };

    match reader.into_dimensions() {
        Ok((width, _)) => Some(width as f32),
        Err(error) => {
            tracing::warn!(%error, mime = %media.mime, "Failed to probe image size");
            None
        }
    }
}
