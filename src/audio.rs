use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::error::{AssetError, SoundBoardResult};

/// An encoded sound kept in memory. Decoding is checked once when the clip
/// is built, and every play decodes a fresh copy so plays can overlap.
#[derive(Clone, Debug)]
pub struct Clip {
    bytes: Arc<[u8]>,
}

impl Clip {
    pub fn from_bytes(bytes: Vec<u8>, origin: &Path) -> SoundBoardResult<Self> {
        let bytes: Arc<[u8]> = bytes.into();
        Decoder::new(Cursor::new(bytes.clone())).map_err(|source| AssetError::Audio {
            path: origin.to_path_buf(),
            source,
        })?;
        Ok(Clip { bytes })
    }

    pub fn load(path: &Path) -> SoundBoardResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| AssetError::io(path, e))?;
        Self::from_bytes(bytes, path)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, rodio::decoder::DecoderError> {
        Decoder::new(Cursor::new(self.bytes.clone()))
    }
}

/// Fire-and-forget playback. Callers never learn when or whether a sound
/// finished.
pub trait Playback {
    fn play(&self, clip: &Clip, volume: f32);
}

/// The default audio device.
pub struct AudioOut {
    // Dropping the stream silences everything, so it lives as long as the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOut {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        tracing::info!("audio output opened");
        Ok(AudioOut {
            _stream: stream,
            handle,
        })
    }
}

impl Playback for AudioOut {
    fn play(&self, clip: &Clip, volume: f32) {
        let source = match clip.decoder() {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(%err, "clip failed to decode");
                return;
            }
        };
        if let Err(err) = self
            .handle
            .play_raw(source.convert_samples::<f32>().amplify(volume))
        {
            tracing::warn!(%err, "playback failed");
        }
    }
}

impl Drop for AudioOut {
    fn drop(&mut self) {
        tracing::debug!("audio output released");
    }
}
