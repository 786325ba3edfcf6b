use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pagevox::core::{
    localize_document, read_document, resolve_target_language, speakable_text, LocalizeOptions,
    PagevoxError, SPEAKABLE_CONTENT_ID,
};
use pagevox::network::Session;
use pagevox::parsers::html::html_to_dom;
use pagevox::preferences::Preferences;
use pagevox::speech::SpeechController;
use pagevox::translation::GoogleTranslateEndpoint;

#[derive(Parser)]
#[command(
    name = "pagevox",
    version,
    about = "Translate the text of saved web pages and read them aloud"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate the page's text nodes in place
    Translate {
        /// Path or http(s) URL of the HTML page
        input: String,

        /// Where to write the translated page (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target language code (e.g. "fr"); saved as the preferred language.
        /// When omitted, the previously saved preference is used.
        #[arg(long = "to")]
        target: Option<String>,

        /// Character set of the document
        #[arg(long, default_value = "")]
        charset: String,
    },

    /// Read the page's speakable content block aloud
    Speak {
        /// Path or http(s) URL of the HTML page
        input: String,

        /// Id of the element whose text is spoken
        #[arg(long, default_value = SPEAKABLE_CONTENT_ID)]
        content_id: String,

        /// Language tag for the voice; defaults to the saved preference
        #[arg(long)]
        lang: Option<String>,

        /// Character set of the document
        #[arg(long, default_value = "")]
        charset: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let preferences = open_preferences();

    match cli.command {
        Commands::Translate {
            input,
            output,
            target,
            charset,
        } => translate(&input, output, target, charset, preferences.as_ref()).await,
        Commands::Speak {
            input,
            content_id,
            lang,
            charset,
        } => speak(&input, &content_id, lang, charset, preferences.as_ref()).await,
    }
}

/// Opens the per-user preference store; a broken store only disables
/// persistence, it never blocks translation or playback.
fn open_preferences() -> Option<Preferences> {
    let project_dirs = directories::ProjectDirs::from("", "", "pagevox")?;
    let data_dir = project_dirs.data_dir();
    if let Err(err) = std::fs::create_dir_all(data_dir) {
        warn!("Cannot create data directory {:?}: {}", data_dir, err);
        return None;
    }

    match Preferences::open(data_dir.join("preferences.redb")) {
        Ok(preferences) => Some(preferences),
        Err(err) => {
            warn!("Cannot open preference store: {}", err);
            None
        }
    }
}

async fn translate(
    input: &str,
    output: Option<PathBuf>,
    target: Option<String>,
    charset: String,
    preferences: Option<&Preferences>,
) -> Result<(), Box<dyn Error>> {
    // An explicit --to selection is persisted; without it the saved
    // preference is replayed, like the page restoring its language on load.
    let target_language = resolve_target_language(target, preferences)?;
    info!("Target language: {}", target_language);

    let session = Session::new()?;
    let data = read_document(&session, input).await?;

    let provider = GoogleTranslateEndpoint::new(session.client().clone());
    let mut options = LocalizeOptions::new(target_language.as_str());
    options.document_encoding = charset;

    let (result, summary) = localize_document(&provider, &data, &options).await;
    if summary.failed > 0 {
        warn!("{} text nodes could not be translated", summary.failed);
    }

    match output {
        Some(path) => {
            std::fs::write(&path, result).map_err(|source| PagevoxError::Output {
                path: path.display().to_string(),
                source,
            })?;
            info!("Wrote translated page to {:?}", path);
        }
        None => {
            io::stdout().write_all(&result)?;
        }
    }

    Ok(())
}

async fn speak(
    input: &str,
    content_id: &str,
    lang: Option<String>,
    charset: String,
    preferences: Option<&Preferences>,
) -> Result<(), Box<dyn Error>> {
    let session = Session::new()?;
    let data = read_document(&session, input).await?;
    let dom = html_to_dom(&data, charset);

    let Some(text) = speakable_text(&dom, content_id) else {
        info!("No element with id '{}'; nothing to speak", content_id);
        return Ok(());
    };

    let Some(mut controller) = build_controller() else {
        return Ok(());
    };

    let language = lang.or_else(|| preferences.and_then(|p| p.preferred_language().ok().flatten()));
    controller.speak(&text, language.as_deref())?;

    run_playback_prompt(&mut controller)
}

#[cfg(feature = "speech")]
fn build_controller() -> Option<SpeechController> {
    match pagevox::speech::SystemSynthesizer::new() {
        Ok(synthesizer) => Some(SpeechController::new(Box::new(synthesizer))),
        Err(err) => {
            warn!("Speech synthesis is not available: {}", err);
            eprintln!("Speech synthesis is not supported on this system.");
            None
        }
    }
}

#[cfg(not(feature = "speech"))]
fn build_controller() -> Option<SpeechController> {
    warn!("Speech synthesis support is not compiled into this build");
    eprintln!(
        "Speech synthesis is not supported by this build. \
         Reinstall with the 'speech' feature enabled."
    );
    None
}

/// Interactive stand-in for the page's three playback buttons.
fn run_playback_prompt(controller: &mut SpeechController) -> Result<(), Box<dyn Error>> {
    use pagevox::speech::PlaybackState;

    println!("Speaking. Commands: [p] {}, [s] stop, [q] quit.", controller.pause_label());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "p" => {
                if let Err(err) = controller.toggle_pause() {
                    warn!("Cannot toggle playback: {}", err);
                }
                println!("[p] now means: {}", controller.pause_label());
            }
            "s" => {
                controller.stop()?;
                println!("Stopped. [p] now means: {}", controller.pause_label());
                break;
            }
            "q" => break,
            _ => {}
        }

        if controller.state() == PlaybackState::Idle {
            break;
        }
    }

    Ok(())
}
