use std::sync::Arc;

use deckle_model::element::ElementId;

use crate::{DeviceError, Editor, EditorError, Result};

/// A microphone, as far as the editor is concerned.
///
/// `start` is called once per session and may fail when permission is
/// denied or the device is missing. `finish` stops capturing and hands
/// back the whole clip.
pub trait AudioInput: Send {
    fn start(&mut self) -> std::result::Result<(), DeviceError>;
    fn finish(&mut self) -> std::result::Result<Arc<[u8]>, DeviceError>;
}

/// A capture in progress. It ends on an explicit stop, or on the first
/// tick at or past `deadline`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordingSession {
    pub started: f64,
    pub deadline: f64,
}

impl Editor {
    /// Starts capturing at `time` (seconds). Does nothing if a session
    /// is already running.
    pub fn start_recording(&mut self, time: f64) -> Result<()> {
        if self.recording.is_some() {
            tracing::debug!("Already recording");
            return Ok(());
        }
        let input = self
            .audio_input
            .as_mut()
            .ok_or(EditorError::CapabilityUnavailable)?;
        input.start()?;

        let session = RecordingSession {
            started: time,
            deadline: time + self.config.recording_limit,
        };
        tracing::debug!(?session, "Recording started");
        self.recording = Some(session);
        Ok(())
    }

    /// Ends the running session early. Returns the new audio element, or
    /// `None` if nothing was recording.
    pub fn stop_recording(&mut self) -> Result<Option<ElementId>> {
        match self.recording.take() {
            Some(session) => self.finish_recording(session).map(Some),
            None => Ok(None),
        }
    }

    /// Advances the clock to `time`, finishing the session if it ran out
    pub fn tick(&mut self, time: f64) -> Result<Option<ElementId>> {
        match self.recording {
            Some(session) if time >= session.deadline => {
                self.recording = None;
                self.finish_recording(session).map(Some)
            }
            _ => Ok(None),
        }
    }

    fn finish_recording(&mut self, session: RecordingSession) -> Result<ElementId> {
        let input = self
            .audio_input
            .as_mut()
            .ok_or(EditorError::CapabilityUnavailable)?;
        let clip = input.finish()?;
        tracing::info!(started = session.started, bytes = clip.len(), "Recording finished");
        Ok(self.create_audio_from_recording(clip))
    }
}
