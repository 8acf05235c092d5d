use crate::domain::ports::AudioSink;
use crate::error::{ProofError, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::io::Cursor;

/// Initial volume, matching the original track level.
const AMBIENT_VOLUME: f32 = 0.4;

/// Loops a pre-fetched audio track through the default output device.
///
/// Opening the output device is the step that can be rejected (no device,
/// exclusive access, headless host), which is why construction happens
/// inside `play` rather than up front: the first successful `play` is the
/// moment the environment granted playback.
pub struct RodioSink {
    track: Vec<u8>,
    output: Option<(OutputStream, Sink)>,
}

impl RodioSink {
    pub fn new(track: Vec<u8>) -> Self {
        Self {
            track,
            output: None,
        }
    }

    fn open(&mut self) -> Result<()> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| ProofError::Audio(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| ProofError::Audio(e.to_string()))?;
        let source = Decoder::new(Cursor::new(self.track.clone()))
            .map_err(|e| ProofError::Audio(e.to_string()))?
            .repeat_infinite();
        sink.set_volume(AMBIENT_VOLUME);
        sink.append(source);
        self.output = Some((stream, sink));
        Ok(())
    }
}

impl AudioSink for RodioSink {
    fn play(&mut self) -> Result<()> {
        if self.output.is_none() {
            self.open()?;
        }
        if let Some((_, sink)) = &self.output {
            sink.play();
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some((_, sink)) = &self.output {
            sink.pause();
        }
    }
}
