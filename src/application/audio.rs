use crate::domain::ports::AudioSink;
use tracing::debug;

/// Where the ambient track currently stands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AudioState {
    /// Playback was rejected on startup; the next user interaction retries.
    Listening,
    Playing,
    /// Paused by the user through the manual toggle.
    Paused,
}

/// Autoplay-with-fallback lifecycle for the looping background track.
///
/// `start` attempts playback immediately. If the sink rejects it (the
/// environment's equivalent of a browser autoplay policy), the resource
/// enters `Listening`: every user interaction forwarded via
/// `notice_interaction` becomes a retry trigger. The first successful play
/// leaves `Listening` for good, so later interactions are ignored; leaving
/// the state is the release of the interaction hook. The manual toggle
/// pauses and resumes independently of how playback first started.
pub struct AmbientAudio<S: AudioSink> {
    sink: S,
    state: AudioState,
}

impl<S: AudioSink> AmbientAudio<S> {
    /// Takes ownership of the sink and tries to start playback right away.
    pub fn start(mut sink: S) -> Self {
        let state = match sink.play() {
            Ok(()) => AudioState::Playing,
            Err(e) => {
                debug!(error = %e, "autoplay rejected, waiting for interaction");
                AudioState::Listening
            }
        };
        Self { sink, state }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == AudioState::Playing
    }

    /// Called for every discrete user interaction. Only acts while in
    /// `Listening`; afterwards the hook is effectively detached.
    pub fn notice_interaction(&mut self) {
        if self.state == AudioState::Listening && self.sink.play().is_ok() {
            debug!("playback started on first interaction");
            self.state = AudioState::Playing;
        }
    }

    /// Manual pause/resume. While still `Listening` this acts as an explicit
    /// play request, same as any other interaction.
    pub fn toggle(&mut self) {
        match self.state {
            AudioState::Playing => {
                self.sink.pause();
                self.state = AudioState::Paused;
            }
            AudioState::Paused | AudioState::Listening => {
                if self.sink.play().is_ok() {
                    self.state = AudioState::Playing;
                }
            }
        }
    }
}
