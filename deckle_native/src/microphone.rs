use std::{fs, path::PathBuf, sync::Arc};

use deckle_editor::{AudioInput, DeviceError};

/// Stands in for a microphone: "recording" yields the contents of a
/// file that is read when the recording finishes
pub struct FileMicrophone {
    pub path: PathBuf,
}

impl AudioInput for FileMicrophone {
    fn start(&mut self) -> Result<(), DeviceError> {
        match fs::metadata(&self.path) {
            Ok(metadata) if metadata.is_file() => Ok(()),
            Ok(_) => Err(DeviceError(format!(
                "{} is not a file",
                self.path.display()
            ))),
            Err(error) => Err(DeviceError(format!("{}: {error}", self.path.display()))),
        }
    }

    fn finish(&mut self) -> Result<Arc<[u8]>, DeviceError> {
        fs::read(&self.path)
            .map(Arc::<[u8]>::from)
            .map_err(|error| DeviceError(format!("{}: {error}", self.path.display())))
    }
}
