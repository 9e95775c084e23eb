use deckle_model::{
    color,
    element::{ElementId, ElementInner, ElementRef, Media},
};
use emath::Pos2;
use serde::{Deserialize, Serialize};

use crate::{Editor, Result};

/// What a click landed on
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Element(ElementId),
    /// Empty slide background
    Background,
}

/// A user action, as the front-end reports it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum EditorCommand {
    AddSlide,
    DuplicateSlide,
    NextSlide,
    PreviousSlide,
    GoTo(usize),
    AddText,
    /// Replaces the content of the selected text block
    EditText(smartstring::alias::String),
    /// `None` when the file picker was cancelled
    AddImage(Option<Media>),
    AddAudio(Option<Media>),
    StartRecording { time: f64 },
    StopRecording,
    /// The clock moved to `time` seconds
    Tick { time: f64 },
    SetTextSize(u32),
    /// `#RRGGBB`, straight from a color input
    SetTextColor(String),
    SetImageSize(u32),
    ToggleMirror,
    Click(PointerTarget),
    PointerDown { element: ElementId, pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp,
}

impl Editor {
    /// Applies one command.
    ///
    /// Property edits that don't fit the selected element's kind are
    /// ignored rather than reported, as are cancelled file pickers. An
    /// error means the command changed nothing.
    pub fn dispatch(&mut self, command: EditorCommand) -> Result<()> {
        tracing::trace!(?command, "Dispatching");
        match command {
            EditorCommand::AddSlide => {
                self.slides.add_slide();
            }
            EditorCommand::DuplicateSlide => {
                self.slides.duplicate_slide(&mut self.drag);
            }
            EditorCommand::NextSlide => self.slides.next(),
            EditorCommand::PreviousSlide => self.slides.prev(),
            EditorCommand::GoTo(index) => self.slides.go_to(index),
            EditorCommand::AddText => {
                self.create_text();
            }
            EditorCommand::EditText(new_content) => {
                self.edit_text(|content, _, _| *content = new_content);
            }
            EditorCommand::AddImage(media) => match media {
                Some(media) => {
                    self.create_image(media);
                }
                None => tracing::trace!("No image chosen"),
            },
            EditorCommand::AddAudio(media) => match media {
                Some(media) => {
                    self.create_audio(media);
                }
                None => tracing::trace!("No audio chosen"),
            },
            EditorCommand::StartRecording { time } => self.start_recording(time)?,
            EditorCommand::StopRecording => {
                self.stop_recording()?;
            }
            EditorCommand::Tick { time } => {
                self.tick(time)?;
            }
            EditorCommand::SetTextSize(size) => {
                self.edit_text(|_, font_size, _| *font_size = size as f32);
            }
            EditorCommand::SetTextColor(hex) => match color::parse_hex(&hex) {
                Ok(new_color) => self.edit_text(|_, _, color| *color = new_color),
                Err(error) => tracing::trace!(%error, "Ignoring text color"),
            },
            EditorCommand::SetImageSize(size) => {
                self.edit_image(|width, _| *width = size as f32);
            }
            EditorCommand::ToggleMirror => {
                self.edit_image(|_, mirrored| *mirrored = !*mirrored);
            }
            EditorCommand::Click(PointerTarget::Element(element)) => {
                if let Some(target) = self.locate_visible(element) {
                    self.selection.select(self.slides.deck_mut(), target);
                }
            }
            EditorCommand::Click(PointerTarget::Background) => {
                self.selection.deselect(self.slides.deck_mut());
            }
            EditorCommand::PointerDown { element, pos } => {
                if let Some(target) = self.locate_visible(element) {
                    self.drag.pointer_down(self.slides.deck(), target, pos);
                }
            }
            EditorCommand::PointerMove { pos } => {
                self.drag.pointer_move(self.slides.deck_mut(), pos);
            }
            EditorCommand::PointerUp => {
                self.drag.pointer_up();
            }
        }
        Ok(())
    }

    /// Pointer events can only land on elements of the shown slide
    fn locate_visible(&self, element: ElementId) -> Option<ElementRef> {
        let Some(target) = self.slides.deck().locate(element) else {
            tracing::trace!(?element, "Pointer on a missing element");
            return None;
        };
        if target.slide != self.slides.display().visible {
            tracing::trace!(?target, "Pointer on an element of a hidden slide");
            return None;
        }
        Some(target)
    }

    /// Runs `edit` on the selection if it is a text block
    fn edit_text(
        &mut self,
        edit: impl FnOnce(&mut smartstring::alias::String, &mut f32, &mut ecolor::Color32),
    ) {
        match self.selection.selected_mut(self.slides.deck_mut()) {
            Some(deckle_model::element::Element {
                inner:
                    ElementInner::Text {
                        content,
                        font_size,
                        color,
                    },
                ..
            }) => edit(content, font_size, color),
            _ => {
                tracing::trace!("Selection is not text, ignoring edit");
                return;
            }
        }
        self.selection.refresh_panel(self.slides.deck());
    }

    /// Runs `edit` on the selection if it is an image
    fn edit_image(&mut self, edit: impl FnOnce(&mut f32, &mut bool)) {
        match self.selection.selected_mut(self.slides.deck_mut()) {
            Some(deckle_model::element::Element {
                inner: ElementInner::Image {
                    width, mirrored, ..
                },
                ..
            }) => edit(width, mirrored),
            _ => {
                tracing::trace!("Selection is not an image, ignoring edit");
                return;
            }
        }
        self.selection.refresh_panel(self.slides.deck());
    }
}
