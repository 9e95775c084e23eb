use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

/// A microphone refused to start or failed while recording
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DeviceError(pub String);

/// Failures of a single editor command. None of them leave partial
/// state behind: the slides and the selection are as they were before
/// the command ran.
#[derive(Diagnostic, Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Audio recording is not supported on this platform")]
    #[diagnostic(help("Start the editor with an audio input attached"))]
    CapabilityUnavailable,
    #[error("Error accessing microphone")]
    #[diagnostic(help("Check the microphone permissions and settings, then try again"))]
    Device(#[from] DeviceError),
}
