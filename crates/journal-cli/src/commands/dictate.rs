use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::cli::DictateCommand;
use crate::error::CliError;
use crate::shell::Session;

const TRANSCRIPT_WAIT: Duration = Duration::from_secs(2);

pub async fn run_dictate(
    session: &mut Session,
    command: DictateCommand,
) -> Result<String, CliError> {
    match command {
        DictateCommand::Start => {
            let (speech, updates) = mpsc::unbounded_channel();
            if session.dictation.start(updates) {
                session.speech = Some(speech);
                Ok("Dictation started".to_string())
            } else {
                Ok("Dictation already running".to_string())
            }
        }
        DictateCommand::Stop => {
            let stopped = session.dictation.stop();
            session.speech = None;
            if stopped {
                Ok("Dictation stopped".to_string())
            } else {
                Ok("Dictation is not running".to_string())
            }
        }
        DictateCommand::Say { words } => {
            let partials = partial_transcripts(&words.join(" "));
            let Some(text) = partials.last().cloned() else {
                return Err(CliError::EmptyDictation);
            };
            let Some(speech) = session
                .speech
                .as_ref()
                .filter(|_| session.dictation.is_recording())
            else {
                return Err(CliError::DictationIdle);
            };

            let mut probe = session.dictation.watch();
            for partial in partials {
                speech
                    .send(partial)
                    .map_err(|_| CliError::SpeechSourceClosed)?;
            }

            timeout(TRANSCRIPT_WAIT, async {
                while probe.borrow_and_update().as_str() != text {
                    probe
                        .changed()
                        .await
                        .map_err(|_| CliError::SpeechSourceClosed)?;
                }
                Ok::<(), CliError>(())
            })
            .await
            .map_err(|_| CliError::SpeechSourceClosed)??;

            Ok(format!("Heard: \"{text}\""))
        }
    }
}

/// Growing transcripts a recognizer reports while words arrive.
pub fn partial_transcripts(text: &str) -> Vec<String> {
    let mut heard = String::new();
    text.split_whitespace()
        .map(|word| {
            if !heard.is_empty() {
                heard.push(' ');
            }
            heard.push_str(word);
            heard.clone()
        })
        .collect()
}
