use super::{Audio, Outcome, handle_music_key, prompt};
use crate::application::session::PaymentSession;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Step 3: terminal success screen, with restart as the only way forward.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    audio: &mut Audio,
    session: &mut PaymentSession,
) -> Result<Outcome> {
    writeln!(out)?;
    writeln!(out, "✔ Payment proof sent")?;
    writeln!(out, "Thank you for your transaction!")?;

    loop {
        let Some(choice) = prompt(input, out, audio, "[r=send another proof, q=quit]: ")? else {
            return Ok(Outcome::Quit);
        };

        match choice.as_str() {
            "r" => {
                session.reset();
                return Ok(Outcome::Continue);
            }
            "q" => return Ok(Outcome::Quit),
            other => {
                if !handle_music_key(out, audio, other)? {
                    writeln!(out, "unrecognized choice")?;
                }
            }
        }
    }
}
