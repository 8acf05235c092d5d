use super::{Audio, Outcome, prompt};
use crate::application::session::PaymentSession;
use crate::domain::proof::{ProofFile, SubmissionDraft};
use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Step 2: collect the confirmation fields and submit the proof.
///
/// All text fields are optional free text; only the file is mandatory, and
/// that single rule is enforced here before anything leaves the process.
/// While a submission is in flight no prompt is shown, which is the console
/// equivalent of disabling the submit control.
pub async fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    audio: &mut Audio,
    session: &mut PaymentSession,
) -> Result<Outcome> {
    writeln!(out)?;
    writeln!(out, "Confirm your transfer")?;

    let Some(product_name) = prompt(input, out, audio, "product name (optional): ")? else {
        return Ok(Outcome::Quit);
    };
    let Some(nominal) = prompt(input, out, audio, "nominal transferred, Rp (optional): ")? else {
        return Ok(Outcome::Quit);
    };
    let Some(sender_name) = prompt(input, out, audio, "your name (optional): ")? else {
        return Ok(Outcome::Quit);
    };

    loop {
        let Some(path) = prompt(input, out, audio, "proof file path (b to go back): ")? else {
            return Ok(Outcome::Quit);
        };
        if path == "b" {
            session.back();
            return Ok(Outcome::Continue);
        }

        let file = match load_file(&path) {
            Ok(file) => file,
            Err(message) => {
                writeln!(out, "⚠ {message}")?;
                continue;
            }
        };

        let draft = SubmissionDraft {
            file,
            sender_name: sender_name.clone(),
            product_name: product_name.clone(),
            nominal: nominal.clone(),
        };

        writeln!(out, "sending…")?;
        match session.submit(draft).await {
            Ok(()) => return Ok(Outcome::Continue),
            // Missing file and remote failures surface the same way: an
            // inline message, then the prompt comes back for a retry.
            Err(e) => writeln!(out, "⚠ {e}")?,
        }
    }
}

/// An empty path means no file was chosen; the draft carries `None` and the
/// session rejects it without calling the sender. Unreadable paths surface
/// immediately so the user can fix a typo before a send is attempted.
fn load_file(path: &str) -> std::result::Result<Option<ProofFile>, String> {
    if path.is_empty() {
        return Ok(None);
    }
    ProofFile::from_path(Path::new(path))
        .map(Some)
        .map_err(|e| format!("could not read {path}: {e}"))
}
