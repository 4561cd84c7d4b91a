//! Sound cues for moves, wins and draws.
//!
//! Cue files are read into memory once at startup. A cue whose file is
//! missing or unreadable is logged and skipped; the game never waits on, or
//! fails because of, audio.

use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// A sound effect triggered by a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Cue {
    /// A mark was placed.
    #[display("click")]
    Click,
    /// A move completed a line.
    #[display("win")]
    Win,
    /// A move filled the board without a line.
    #[display("draw")]
    Draw,
}

impl Cue {
    /// Asset file name for this cue.
    pub fn file_name(self) -> &'static str {
        match self {
            Cue::Click => "click.wav",
            Cue::Win => "win.wav",
            Cue::Draw => "draw.wav",
        }
    }
}

/// A cue asset could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Failed to load {cue} sound from {}: {message}", path.display())]
pub struct AudioLoadFailure {
    /// The cue affected.
    pub cue: Cue,
    /// Where the asset was expected.
    pub path: PathBuf,
    /// Underlying reason.
    pub message: String,
}

/// Raw bytes of every cue that loaded successfully.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    sounds: HashMap<Cue, Vec<u8>>,
    failures: Vec<AudioLoadFailure>,
}

impl SoundBank {
    /// Reads every cue file from `dir`.
    ///
    /// Never fails as a whole: each failing cue is recorded, logged and left
    /// out of the bank.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let mut bank = Self::default();
        for cue in Cue::iter() {
            let path = dir.as_ref().join(cue.file_name());
            match read_cue(cue, &path) {
                Ok(bytes) => {
                    debug!(%cue, bytes = bytes.len(), "Cue loaded");
                    bank.sounds.insert(cue, bytes);
                }
                Err(failure) => {
                    warn!(error = %failure, "Cue unavailable, continuing without it");
                    bank.failures.push(failure);
                }
            }
        }
        info!(loaded = bank.sounds.len(), failed = bank.failures.len(), "Sound bank ready");
        bank
    }

    /// Bytes for a cue, if it loaded.
    pub fn get(&self, cue: Cue) -> Option<&[u8]> {
        self.sounds.get(&cue).map(Vec::as_slice)
    }

    /// Cues that failed to load.
    pub fn failures(&self) -> &[AudioLoadFailure] {
        &self.failures
    }

    /// True if no cue loaded.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

fn read_cue(cue: Cue, path: &Path) -> Result<Vec<u8>, AudioLoadFailure> {
    let bytes = std::fs::read(path).map_err(|e| AudioLoadFailure {
        cue,
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // A RIFF/WAVE header is the least a playable cue must have.
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(AudioLoadFailure {
            cue,
            path: path.to_path_buf(),
            message: "not a RIFF/WAVE file".to_string(),
        });
    }
    Ok(bytes)
}

/// Receives cue requests. Playback is fire-and-forget.
pub trait AudioNotifier {
    /// Plays a cue without blocking the caller. Failures are logged, never returned.
    fn play(&self, cue: Cue);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl AudioNotifier for SilentNotifier {
    fn play(&self, cue: Cue) {
        debug!(%cue, "Cue (silent)");
    }
}

/// Picks the best notifier for the configuration and build.
#[instrument(skip(assets_dir), fields(assets_dir = %assets_dir.display()))]
pub fn notifier_for(sound: bool, assets_dir: &Path) -> Box<dyn AudioNotifier> {
    if !sound {
        info!("Sound muted");
        return Box::new(SilentNotifier);
    }
    let bank = SoundBank::load(assets_dir);
    if bank.is_empty() {
        warn!("No cues loaded, playing silently");
        return Box::new(SilentNotifier);
    }
    output_notifier(bank)
}

#[cfg(feature = "sound")]
fn output_notifier(bank: SoundBank) -> Box<dyn AudioNotifier> {
    match rodio_output::RodioNotifier::new(bank) {
        Ok(notifier) => Box::new(notifier),
        Err(e) => {
            warn!(error = %e, "Audio output unavailable, playing silently");
            Box::new(SilentNotifier)
        }
    }
}

#[cfg(not(feature = "sound"))]
fn output_notifier(_bank: SoundBank) -> Box<dyn AudioNotifier> {
    info!("Built without the `sound` feature, playing silently");
    Box::new(SilentNotifier)
}

#[cfg(feature = "sound")]
pub use rodio_output::{AudioOutputError, RodioNotifier};

#[cfg(feature = "sound")]
mod rodio_output {
    use super::{AudioNotifier, Cue, SoundBank};
    use derive_more::{Display, Error};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use std::io::Cursor;
    use tracing::{debug, instrument, warn};

    /// No audio output device could be opened.
    #[derive(Debug, Clone, Display, Error)]
    #[display("Audio output error: {message}")]
    pub struct AudioOutputError {
        /// Underlying reason.
        pub message: String,
    }

    /// Plays cues on the default output device.
    pub struct RodioNotifier {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        bank: SoundBank,
    }

    impl RodioNotifier {
        /// Opens the default output stream.
        #[instrument(skip(bank))]
        pub fn new(bank: SoundBank) -> Result<Self, AudioOutputError> {
            let (stream, handle) = OutputStream::try_default().map_err(|e| AudioOutputError {
                message: e.to_string(),
            })?;
            Ok(Self {
                _stream: stream,
                handle,
                bank,
            })
        }
    }

    impl AudioNotifier for RodioNotifier {
        fn play(&self, cue: Cue) {
            let Some(bytes) = self.bank.get(cue) else {
                debug!(%cue, "Cue not loaded");
                return;
            };
            let sink = match Sink::try_new(&self.handle) {
                Ok(sink) => sink,
                Err(e) => {
                    warn!(%cue, error = %e, "Could not open sink");
                    return;
                }
            };
            let source = match Decoder::new(Cursor::new(bytes.to_vec())) {
                Ok(source) => source,
                Err(e) => {
                    warn!(%cue, error = %e, "Could not decode cue");
                    return;
                }
            };
            sink.append(source);
            // Keeps playing on rodio's mixer thread after the sink is dropped.
            sink.detach();
        }
    }
}
