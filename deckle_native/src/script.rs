use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, Context};
use deckle_editor::{EditorCommand, PointerTarget};
use deckle_model::element::{ElementId, Media};
use emath::Pos2;
use image::ImageFormat;
use serde::Deserialize;

/// One line of a command script. Mirrors [`EditorCommand`], except that
/// media is named by path and read when the step is turned into a
/// command.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum ScriptStep {
    AddSlide,
    DuplicateSlide,
    NextSlide,
    PreviousSlide,
    GoTo(usize),
    AddText,
    EditText(String),
    /// A `null` path is a cancelled file picker
    AddImage {
        path: Option<PathBuf>,
    },
    AddAudio {
        path: Option<PathBuf>,
    },
    StartRecording {
        time: f64,
    },
    StopRecording,
    Tick {
        time: f64,
    },
    SetTextSize(u32),
    SetTextColor(String),
    SetImageSize(u32),
    ToggleMirror,
    /// A `null` element is the slide background
    Click {
        element: Option<u64>,
    },
    PointerDown {
        element: u64,
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
}

/// Parses JSON lines, skipping blank lines and `#` comments
pub fn parse_script(source: &str) -> eyre::Result<Vec<ScriptStep>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(number, line)| {
            serde_json::from_str(line)
                .wrap_err_with(|| format!("Invalid script step on line {}", number + 1))
        })
        .collect()
}

impl ScriptStep {
    /// Relative media paths are resolved against `base`
    pub fn into_command(self, base: &Path) -> eyre::Result<EditorCommand> {
        Ok(match self {
            Self::AddSlide => EditorCommand::AddSlide,
            Self::DuplicateSlide => EditorCommand::DuplicateSlide,
            Self::NextSlide => EditorCommand::NextSlide,
            Self::PreviousSlide => EditorCommand::PreviousSlide,
            Self::GoTo(index) => EditorCommand::GoTo(index),
            Self::AddText => EditorCommand::AddText,
            Self::EditText(content) => EditorCommand::EditText(content.into()),
            Self::AddImage { path } => EditorCommand::AddImage(
                path.map(|path| read_media(&base.join(path), image_mime))
                    .transpose()?,
            ),
            Self::AddAudio { path } => EditorCommand::AddAudio(
                path.map(|path| read_media(&base.join(path), audio_mime))
                    .transpose()?,
            ),
            Self::StartRecording { time } => EditorCommand::StartRecording { time },
            Self::StopRecording => EditorCommand::StopRecording,
            Self::Tick { time } => EditorCommand::Tick { time },
            Self::SetTextSize(size) => EditorCommand::SetTextSize(size),
            Self::SetTextColor(color) => EditorCommand::SetTextColor(color),
            Self::SetImageSize(size) => EditorCommand::SetImageSize(size),
            Self::ToggleMirror => EditorCommand::ToggleMirror,
            Self::Click { element } => EditorCommand::Click(match element {
                Some(id) => PointerTarget::Element(ElementId(id)),
                None => PointerTarget::Background,
            }),
            Self::PointerDown { element, x, y } => EditorCommand::PointerDown {
                element: ElementId(element),
                pos: Pos2::new(x, y),
            },
            Self::PointerMove { x, y } => EditorCommand::PointerMove {
                pos: Pos2::new(x, y),
            },
            Self::PointerUp => EditorCommand::PointerUp,
        })
    }
}

fn read_media(path: &Path, mime: fn(&Path) -> &'static str) -> eyre::Result<Media> {
    let data = fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    Ok(Media::new(data, mime(path)))
}

fn image_mime(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

fn audio_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("ogg" | "oga" | "opus") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("m4a" | "aac") => "audio/mp4",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_lines() {
        let steps = parse_script(
            r#"
            # build a deck
            "AddSlide"
            {"GoTo": 0}
            {"AddImage": {"path": null}}
            {"Click": {"element": 3}}
            {"PointerMove": {"x": 1.0, "y": 2.5}}
            "#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::AddSlide,
                ScriptStep::GoTo(0),
                ScriptStep::AddImage { path: None },
                ScriptStep::Click { element: Some(3) },
                ScriptStep::PointerMove { x: 1.0, y: 2.5 },
            ]
        );
    }

    #[test]
    fn reports_bad_line() {
        let error = parse_script("\"AddSlide\"\n{\"Jump\": 1}").unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn reads_media_relative_to_script() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(directory.path().join("clip.wav"), b"RIFF").unwrap();

        let command = ScriptStep::AddAudio {
            path: Some("clip.wav".into()),
        }
        .into_command(directory.path())
        .unwrap();

        assert_eq!(
            command,
            EditorCommand::AddAudio(Some(Media::new(b"RIFF".to_vec(), "audio/wav")))
        );
    }

    #[test]
    fn missing_media_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let result = ScriptStep::AddImage {
            path: Some("nope.png".into()),
        }
        .into_command(directory.path());
        assert!(result.is_err());
    }

    #[test]
    fn background_click() {
        assert_eq!(
            ScriptStep::Click { element: None }
                .into_command(Path::new("."))
                .unwrap(),
            EditorCommand::Click(PointerTarget::Background)
        );
    }

    #[rstest]
    #[case("a.png", "image/png")]
    #[case("a.JPG", "image/jpeg")]
    #[case("a.txt", "application/octet-stream")]
    fn image_mimes(#[case] path: &str, #[case] mime: &str) {
        assert_eq!(image_mime(Path::new(path)), mime);
    }

    #[rstest]
    #[case("a.wav", "audio/wav")]
    #[case("a.MP3", "audio/mpeg")]
    #[case("a", "application/octet-stream")]
    fn audio_mimes(#[case] path: &str, #[case] mime: &str) {
        assert_eq!(audio_mime(Path::new(path)), mime);
    }
}
