use super::{Audio, Outcome, handle_music_key, prompt};
use crate::application::session::PaymentSession;
use crate::config::AppConfig;
use crate::domain::method::PaymentDestination;
use crate::domain::ports::{ClipboardBox, ImageSaverBox};
use crate::error::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

/// How long the "copied" indicator stays up after a copy action.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Transient indicator for the copy-account-number affordance. Flips on when
/// a copy lands and reads as off again once the TTL has passed, with no
/// background task involved.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn mark(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK_TTL)
    }
}

/// Step 1: destination details for the selected method, with the copy and
/// save-image affordances.
pub async fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    audio: &mut Audio,
    session: &mut PaymentSession,
    config: &AppConfig,
    clipboard: &mut ClipboardBox,
    saver: &mut ImageSaverBox,
) -> Result<Outcome> {
    // Steps past 0 always have a method; see FlowState.
    let Some(method) = session.selected_method() else {
        session.reset();
        return Ok(Outcome::Continue);
    };
    let destination = config.destination(method);
    let mut feedback = CopyFeedback::default();

    render(out, &destination)?;

    loop {
        let menu = menu_line(&destination, &feedback);
        let Some(choice) = prompt(input, out, audio, &menu)? else {
            return Ok(Outcome::Quit);
        };

        match (choice.as_str(), &destination) {
            ("k", _) => {
                session.confirm_payment();
                return Ok(Outcome::Continue);
            }
            ("b", _) => {
                session.back();
                return Ok(Outcome::Continue);
            }
            ("c", PaymentDestination::Dana { number, .. }) => {
                match clipboard.write_text(number) {
                    Ok(()) => {
                        feedback.mark();
                        writeln!(out, "✔ account number copied")?;
                    }
                    Err(e) => writeln!(out, "⚠ {e}")?,
                }
            }
            ("s", PaymentDestination::Qris { image_url }) => {
                writeln!(out, "downloading code image…")?;
                match saver.save(image_url, &config.qris_save_dir).await {
                    Ok(path) => writeln!(out, "saved to {}", path.display())?,
                    Err(e) => {
                        // Degrade silently to the external viewer; direct
                        // fetches are commonly blocked cross-origin.
                        warn!(error = %e, "direct image fetch failed, opening viewer");
                        if saver.open_in_viewer(image_url).is_err() {
                            writeln!(out, "open this URL to save the code: {image_url}")?;
                        }
                    }
                }
            }
            (other, _) => {
                if !handle_music_key(out, audio, other)? {
                    writeln!(out, "unrecognized choice")?;
                }
            }
        }
    }
}

fn render<W: Write>(out: &mut W, destination: &PaymentDestination) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Complete your payment")?;
    match destination {
        PaymentDestination::Dana { number, holder } => {
            writeln!(out, "  DANA account : {number}")?;
            writeln!(out, "  account name : {holder}")?;
        }
        PaymentDestination::Qris { image_url } => {
            writeln!(out, "  scan the QRIS code: {image_url}")?;
        }
    }
    Ok(())
}

fn menu_line(destination: &PaymentDestination, feedback: &CopyFeedback) -> String {
    match destination {
        PaymentDestination::Dana { .. } => {
            let copy = if feedback.active() {
                "c=copy (copied ✔)"
            } else {
                "c=copy number"
            };
            format!("[{copy}, k=confirm payment, b=back]: ")
        }
        PaymentDestination::Qris { .. } => {
            "[s=save code image, k=confirm payment, b=back]: ".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_copy_feedback_reverts_after_ttl() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.active());

        feedback.mark();
        assert!(feedback.active());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(feedback.active());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!feedback.active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_feedback_remark_restarts_ttl() {
        let mut feedback = CopyFeedback::default();
        feedback.mark();
        tokio::time::advance(Duration::from_millis(1500)).await;

        feedback.mark();
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(feedback.active());
    }

    #[test]
    fn test_menu_reflects_copied_indicator() {
        let destination = PaymentDestination::Dana {
            number: "08812477457".to_string(),
            holder: "TOLANI".to_string(),
        };
        let mut feedback = CopyFeedback::default();
        assert!(menu_line(&destination, &feedback).contains("c=copy number"));

        feedback.mark();
        assert!(menu_line(&destination, &feedback).contains("copied ✔"));
    }

    #[test]
    fn test_render_qris_shows_image_url() {
        let destination = PaymentDestination::Qris {
            image_url: "https://example.com/qris.jpg".to_string(),
        };
        let mut out = Vec::new();
        render(&mut out, &destination).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("https://example.com/qris.jpg"));
    }
}
