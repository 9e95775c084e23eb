use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::{Editor, EditorCommand, EditorError, EditorView};

/// The [`Editor`] is not shared between threads. One thread owns it
/// through this struct, and everyone else sends it [`EditorCommand`]s
/// over a `crossbeam_channel::Sender`.
///
/// After every command the owner publishes a fresh [`EditorView`] into
/// the [`EditorHandle`], so readers never wait on the editor.
pub struct EditorOwner {
    pub editor: Editor,
    pub message_receiver: crossbeam_channel::Receiver<EditorCommand>,
    pub shared_data: EditorHandle,
}

impl EditorOwner {
    pub fn new(
        editor: Editor,
        shared_data: EditorHandle,
    ) -> (Self, crossbeam_channel::Sender<EditorCommand>) {
        let (sender, message_receiver) = crossbeam_channel::unbounded();
        (
            Self {
                editor,
                message_receiver,
                shared_data,
            },
            sender,
        )
    }

    /// Handles commands until every sender is dropped, then gives the
    /// editor back
    pub fn run(mut self) -> Editor {
        self.publish();
        for command in self.message_receiver.iter() {
            match self.editor.dispatch(command) {
                Ok(()) => self.shared_data.notice.store(None),
                Err(error) => {
                    tracing::error!(%error, "Command failed");
                    self.shared_data.notice.store(Some(Arc::new(error)));
                }
            }
            self.publish();
        }
        self.editor
    }

    fn publish(&self) {
        self.shared_data
            .view
            .store(Some(Arc::new(self.editor.view())));
    }
}

#[derive(Clone, Default)]
pub struct EditorHandle {
    pub view: Arc<ArcSwapOption<EditorView>>,
    /// The error of the most recent command, cleared by the next one
    /// that succeeds
    pub notice: Arc<ArcSwapOption<EditorError>>,
}

impl EditorHandle {
    pub fn new() -> Self {
        Self::default()
    }
}
