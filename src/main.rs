use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payproof::application::session::PaymentSession;
use payproof::config::AppConfig;
use payproof::domain::ports::{ClipboardBox, ImageSaverBox, ProofSenderBox};
use payproof::infrastructure::clipboard::{SystemClipboard, UnavailableClipboard};
use payproof::infrastructure::qris::QrisImageSaver;
use payproof::infrastructure::telegram::TelegramNotifier;
use payproof::interfaces::console::{Audio, Wizard};
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON configuration file (optional). Built-in defaults are
    /// used otherwise; the bot credential can come from PAYPROOF_BOT_TOKEN
    /// and PAYPROOF_CHAT_ID.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("payproof=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).into_diagnostic()?;

    let sender: ProofSenderBox = Box::new(TelegramNotifier::new(&config.telegram));
    let session = PaymentSession::new(sender);

    let clipboard: ClipboardBox = match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!(error = %e, "system clipboard unavailable");
            Box::new(UnavailableClipboard)
        }
    };
    let saver: ImageSaverBox = Box::new(QrisImageSaver::new());

    let audio = load_audio(&config).await;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut wizard = Wizard::new(
        stdin.lock(),
        stdout.lock(),
        session,
        &config,
        clipboard,
        saver,
        audio,
    );
    wizard.run().await.into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "audio-rodio")]
async fn load_audio(config: &AppConfig) -> Audio {
    use payproof::application::audio::AmbientAudio;
    use payproof::domain::ports::AudioSinkBox;
    use payproof::infrastructure::rodio_sink::RodioSink;

    let track = async {
        reqwest::get(&config.audio_track_url)
            .await?
            .error_for_status()?
            .bytes()
            .await
    };
    match track.await {
        Ok(bytes) => {
            let sink: AudioSinkBox = Box::new(RodioSink::new(bytes.to_vec()));
            Some(AmbientAudio::start(sink))
        }
        Err(e) => {
            warn!(error = %e, "ambient track unavailable, continuing without audio");
            None
        }
    }
}

#[cfg(not(feature = "audio-rodio"))]
async fn load_audio(_config: &AppConfig) -> Audio {
    None
}
