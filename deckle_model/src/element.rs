use std::sync::Arc;

use ecolor::Color32;
use emath::Pos2;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::slide::SlideId;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// A weak reference to a placed element.
///
/// Holding one does not keep the element alive; resolve it through
/// [`crate::Deck::element`] every time it is used.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub slide: SlideId,
    pub element: ElementId,
}

/// An element placed on a slide
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    /// Top left corner, in pixels relative to the slide
    pub pos: Pos2,
    pub inner: ElementInner,
    /// The visual "selected" marker
    #[serde(skip)]
    pub selected: bool,
}

impl Element {
    pub fn new(id: ElementId, pos: Pos2, inner: ElementInner) -> Self {
        Self {
            id,
            pos,
            inner,
            selected: false,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.inner.kind()
    }
}

#[derive(SmartDefault, Serialize, Deserialize, derive_more::Debug, Clone, PartialEq)]
pub enum ElementInner {
    #[default]
    Text {
        #[default = "New Text"]
        content: smartstring::alias::String,
        #[default = 16.0]
        font_size: f32,
        #[default(Color32::BLACK)]
        color: Color32,
    },
    Image {
        media: Media,
        width: f32,
        /// Flipped horizontally
        mirrored: bool,
    },
    Audio {
        media: Media,
    },
}

impl ElementInner {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text { .. } => ElementKind::Text,
            Self::Image { .. } => ElementKind::Image,
            Self::Audio { .. } => ElementKind::Audio,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Image,
    Audio,
}

/// An imported or recorded blob. The bytes are opaque to the editor,
/// only the MIME type says what they hold.
#[derive(Serialize, Deserialize, derive_more::Debug, Clone, PartialEq)]
pub struct Media {
    #[debug(ignore)]
    pub data: Arc<[u8]>,
    pub mime: smartstring::alias::String,
}

impl Media {
    pub fn new(data: impl Into<Arc<[u8]>>, mime: &str) -> Self {
        Self {
            data: data.into(),
            mime: mime.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
