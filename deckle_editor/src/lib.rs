use deckle_model::Deck;

pub use collection::{SlideCollection, SlideDisplay};
pub use command::{EditorCommand, PointerTarget};
pub use config::EditorConfig;
pub use drag::{DragController, DragSession};
pub use error::{DeviceError, EditorError, Result};
pub use factory::RECORDING_MIME;
pub use owner::{EditorHandle, EditorOwner};
pub use recording::{AudioInput, RecordingSession};
pub use selection::{InspectorPanel, Selection, SelectionState};
pub use view::{EditorView, ElementDetail, ElementView};

mod collection;
mod command;
mod config;
mod drag;
mod error;
mod factory;
mod owner;
mod recording;
mod selection;
mod view;

/// All mutable editor state, owned in one place.
///
/// Commands mutate it synchronously, one at a time, through
/// [`Editor::dispatch`] or the component methods. Nothing in here is
/// shared; [`EditorOwner`] is how other threads get at it.
pub struct Editor {
    slides: SlideCollection,
    drag: DragController,
    selection: Selection,
    recording: Option<RecordingSession>,
    audio_input: Option<Box<dyn AudioInput>>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_deck(Deck::with_blank_slide(), config)
    }

    /// Opens an existing deck. Every element in it is made draggable.
    pub fn with_deck(deck: Deck, config: EditorConfig) -> Self {
        let mut drag = DragController::default();
        for slide in deck.slides.values() {
            for element in slide.elements.keys() {
                drag.attach(*element);
            }
        }

        Self {
            slides: SlideCollection::new(deck),
            drag,
            selection: Selection::default(),
            recording: None,
            audio_input: None,
            config,
        }
    }

    /// Gives the editor a microphone. Without one, recording reports
    /// [`EditorError::CapabilityUnavailable`].
    pub fn with_audio_input(mut self, input: impl AudioInput + 'static) -> Self {
        self.audio_input = Some(Box::new(input));
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn slides(&self) -> &SlideCollection {
        &self.slides
    }

    pub fn deck(&self) -> &Deck {
        self.slides.deck()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state(self.slides.deck())
    }

    pub fn recording(&self) -> Option<&RecordingSession> {
        self.recording.as_ref()
    }
}
