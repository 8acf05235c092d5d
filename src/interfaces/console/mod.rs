//! Line-oriented console rendition of the four wizard steps.
//!
//! The wizard is generic over its input and output streams, so the views run
//! the same over stdin/stdout, an in-memory pipe in tests, or a pty.

pub mod instructions;
pub mod select;
pub mod success;
pub mod upload;

use crate::application::audio::AmbientAudio;
use crate::application::session::PaymentSession;
use crate::config::AppConfig;
use crate::domain::flow::Step;
use crate::domain::ports::{AudioSinkBox, ClipboardBox, ImageSaverBox};
use crate::error::Result;
use std::io::{BufRead, Write};

/// Optional ambient audio; absent when the feature is off or the track could
/// not be fetched.
pub type Audio = Option<AmbientAudio<AudioSinkBox>>;

/// What a step view decided: stay in the wizard loop or leave it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Drives the step views against a `PaymentSession` until the user quits.
pub struct Wizard<'a, R, W> {
    input: R,
    out: W,
    session: PaymentSession,
    config: &'a AppConfig,
    clipboard: ClipboardBox,
    saver: ImageSaverBox,
    audio: Audio,
}

impl<'a, R: BufRead, W: Write> Wizard<'a, R, W> {
    pub fn new(
        input: R,
        out: W,
        session: PaymentSession,
        config: &'a AppConfig,
        clipboard: ClipboardBox,
        saver: ImageSaverBox,
        audio: Audio,
    ) -> Self {
        Self {
            input,
            out,
            session,
            config,
            clipboard,
            saver,
            audio,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "⚡ PAY.ME — payment confirmation")?;
        loop {
            let config = self.config;
            let Wizard {
                input,
                out,
                session,
                clipboard,
                saver,
                audio,
                ..
            } = self;

            let outcome = match session.step() {
                Step::SelectMethod => select::run(input, out, audio, session, config)?,
                Step::Instructions => {
                    instructions::run(input, out, audio, session, config, clipboard, saver).await?
                }
                Step::Upload => upload::run(input, out, audio, session).await?,
                Step::Done => success::run(input, out, audio, session)?,
            };

            if outcome == Outcome::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &PaymentSession {
        &self.session
    }
}

/// Prints a prompt and reads one trimmed line. `None` means the input
/// stream ended. Every answered prompt counts as a user interaction for the
/// ambient audio fallback.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    audio: &mut Audio,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if let Some(audio) = audio {
        audio.notice_interaction();
    }
    Ok(Some(line.trim().to_string()))
}

/// Shared handler for the `m` menu key. Returns whether the key was consumed.
pub(crate) fn handle_music_key<W: Write>(out: &mut W, audio: &mut Audio, key: &str) -> Result<bool> {
    if key != "m" {
        return Ok(false);
    }
    match audio {
        Some(audio) => {
            audio.toggle();
            let state = if audio.is_playing() { "on" } else { "off" };
            writeln!(out, "♪ music {state}")?;
        }
        None => writeln!(out, "♪ no audio available")?,
    }
    Ok(true)
}
