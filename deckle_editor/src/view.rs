use deckle_model::{
    color,
    element::{Element, ElementId, ElementInner, ElementKind, ElementRef},
    slide::SlideId,
};
use emath::Pos2;
use serde::Serialize;

use crate::{Editor, InspectorPanel, SelectionState};

/// An immutable snapshot of what the editor shows. Media bytes are
/// left out; only their size is reported.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EditorView {
    pub indicator: String,
    pub active_index: usize,
    pub slide_count: usize,
    pub visible_slide: SlideId,
    /// Elements of the visible slide, in paint order
    pub elements: Vec<ElementView>,
    pub state: SelectionState,
    pub selected: Option<ElementRef>,
    pub panel: InspectorPanel,
    pub recording: bool,
    pub dragging: Option<ElementId>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElementView {
    pub id: ElementId,
    pub kind: ElementKind,
    pub pos: Pos2,
    pub selected: bool,
    pub detail: ElementDetail,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum ElementDetail {
    Text {
        content: String,
        font_size: f32,
        color: String,
    },
    Image {
        mime: String,
        bytes: usize,
        width: f32,
        mirrored: bool,
    },
    Audio {
        mime: String,
        bytes: usize,
    },
}

impl From<&Element> for ElementView {
    fn from(element: &Element) -> Self {
        let detail = match &element.inner {
            ElementInner::Text {
                content,
                font_size,
                color,
            } => ElementDetail::Text {
                content: content.to_string(),
                font_size: *font_size,
                color: color::to_hex(*color),
            },
            ElementInner::Image {
                media,
                width,
                mirrored,
            } => ElementDetail::Image {
                mime: media.mime.to_string(),
                bytes: media.len(),
                width: *width,
                mirrored: *mirrored,
            },
            ElementInner::Audio { media } => ElementDetail::Audio {
                mime: media.mime.to_string(),
                bytes: media.len(),
            },
        };

        Self {
            id: element.id,
            kind: element.kind(),
            pos: element.pos,
            selected: element.selected,
            detail,
        }
    }
}

impl Editor {
    pub fn view(&self) -> EditorView {
        let (_, slide) = self.slides.active_slide();
        let display = self.slides.display();

        EditorView {
            indicator: display.indicator.clone(),
            active_index: self.slides.active_index(),
            slide_count: self.slides.count(),
            visible_slide: display.visible,
            elements: slide.elements.values().map(ElementView::from).collect(),
            state: self.selection_state(),
            selected: self.selection.target(),
            panel: self.selection.panel().clone(),
            recording: self.recording.is_some(),
            dragging: self.drag.session().map(|session| session.target.element),
        }
    }
}
