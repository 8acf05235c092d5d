use super::{Audio, Outcome, handle_music_key, prompt};
use crate::application::session::PaymentSession;
use crate::config::AppConfig;
use crate::domain::method::PaymentMethod;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Step 0: developer profile, support tiers and the payment method menu.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    audio: &mut Audio,
    session: &mut PaymentSession,
    config: &AppConfig,
) -> Result<Outcome> {
    render(out, config)?;
    let menu = format!(
        "choose a method [1-{}, q to quit]: ",
        PaymentMethod::ALL.len()
    );

    loop {
        let Some(choice) = prompt(input, out, audio, &menu)? else {
            return Ok(Outcome::Quit);
        };

        match choice.as_str() {
            "q" => return Ok(Outcome::Quit),
            other => {
                if let Some(method) = method_for_choice(other) {
                    session.select_method(method);
                    return Ok(Outcome::Continue);
                }
                if !handle_music_key(out, audio, other)? {
                    writeln!(out, "unrecognized choice")?;
                }
            }
        }
    }
}

/// Maps a 1-based menu entry to its method.
fn method_for_choice(choice: &str) -> Option<PaymentMethod> {
    choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| PaymentMethod::ALL.get(i).copied())
}

fn render<W: Write>(out: &mut W, config: &AppConfig) -> Result<()> {
    let profile = &config.profile;
    writeln!(out)?;
    writeln!(out, "{} — {}", profile.name, profile.role)?;
    writeln!(out, "{}", profile.bio)?;
    writeln!(out, "skills: {}", profile.skills.join(", "))?;

    if !config.tiers.is_empty() {
        writeln!(out)?;
        writeln!(out, "Support tiers:")?;
        for tier in &config.tiers {
            writeln!(
                out,
                "  {} {} — Rp{} — {}",
                tier.emoji, tier.label, tier.price, tier.description
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Choose a payment method:")?;
    for (i, method) in PaymentMethod::ALL.iter().enumerate() {
        writeln!(out, "  [{}] {}", i + 1, method.label())?;
    }
    Ok(())
}
