use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    thread,
};

use args::PositionParser;
use clap::Parser;
use color_eyre::{
    config::Theme,
    eyre::{self, eyre, Context},
};
use deckle_editor::{Editor, EditorConfig, EditorHandle, EditorOwner};
use emath::Pos2;
use microphone::FileMicrophone;
use miette::Diagnostic;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod microphone;
mod script;

#[derive(Parser)]
struct Args {
    /// JSON lines of editor steps. Read from stdin when omitted
    script: Option<PathBuf>,
    /// Where new elements are placed
    #[clap(short, long, value_parser = PositionParser, default_value = "50x50")]
    position: Pos2,
    /// Seconds before a recording stops by itself
    #[clap(short, long, default_value_t = 5.0)]
    recording_limit: f64,
    /// File whose contents stand in for recorded audio
    #[clap(short, long)]
    microphone: Option<PathBuf>,
    /// Print the final view as JSON
    #[clap(short, long)]
    json: bool,
}

impl Args {
    fn read_script(&self) -> eyre::Result<(String, PathBuf)> {
        match self.script.as_ref() {
            Some(path) => {
                let source = fs::read_to_string(path).wrap_err("Failed to open script")?;
                let base = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                Ok((source, base))
            }
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .wrap_err("Failed to read script from stdin")?;
                Ok((source, PathBuf::from(".")))
            }
        }
    }

    fn editor(&self) -> Editor {
        let config = EditorConfig {
            default_position: self.position,
            recording_limit: self.recording_limit,
            ..Default::default()
        };
        let editor = Editor::new(config);
        match self.microphone.clone() {
            Some(path) => editor.with_audio_input(FileMicrophone { path }),
            None => editor,
        }
    }
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    let color = supports_color::on(supports_color::Stream::Stderr)
        .map(|c| c.has_basic)
        .unwrap_or_default();
    if !color {
        color_eyre::config::HookBuilder::new()
            .theme(Theme::default())
            .install()?;
    } else {
        color_eyre::install()?;
    }

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            #[cfg(debug_assertions)]
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("info"))
                .wrap_err("Failed to build log filter")?,
            #[cfg(not(debug_assertions))]
            EnvFilter::from_default_env(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(color)
                .with_writer(io::stderr),
        )
        .init();

    let (source, base) = args.read_script()?;
    let steps = script::parse_script(&source)?;
    tracing::info!(steps = steps.len(), "Script loaded");

    let handle = EditorHandle::new();
    let (owner, sender) = EditorOwner::new(args.editor(), handle.clone());
    let owner_thread = thread::spawn(move || owner.run());

    for step in steps {
        let command = step.into_command(&base)?;
        sender
            .send(command)
            .map_err(|_| eyre!("Editor thread stopped unexpectedly"))?;
    }
    drop(sender);
    owner_thread
        .join()
        .map_err(|_| eyre!("Editor thread panicked"))?;

    let view = handle
        .view
        .load_full()
        .ok_or_else(|| eyre!("Editor published no view"))?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&*view).wrap_err("Failed to serialize view")?
        );
    } else {
        println!("{:#?}", view);
    }

    if let Some(notice) = handle.notice.load_full() {
        eprintln!("{notice}");
        if let Some(help) = notice.help() {
            eprintln!("help: {help}");
        }
    }

    Ok(())
}
