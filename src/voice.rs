//! Voice input: transcript cleanup and the capture guard around an
//! injected speech recognizer.

use log::{debug, info, warn};
use std::collections::VecDeque;
use thiserror::Error;

use crate::ingredients::{IngredientInput, TAG_SEPARATOR};

/// Words shorter than this (in characters) are dropped from transcripts
const MIN_WORD_LEN: usize = 3;

const CONJUNCTIONS: [&str; 2] = ["and", "with"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Speech recognition is not available")]
    Unavailable,

    #[error("Speech recognition failed to start: {0}")]
    StartFailed(String),
}

/// Platform speech-to-text capability.
///
/// Results are not returned from here; the host delivers them to
/// [`VoiceInput::on_result`] when the platform reports an utterance.
pub trait SpeechRecognizer {
    fn is_available(&self) -> bool;

    fn start(&mut self) -> Result<(), VoiceError>;

    fn stop(&mut self);
}

/// Absent capability. Voice input is simply disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecognizer;

impl SpeechRecognizer for NoopRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self) -> Result<(), VoiceError> {
        Err(VoiceError::Unavailable)
    }

    fn stop(&mut self) {}
}

/// Replays a fixed list of utterances, one per capture.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRecognizer {
    utterances: VecDeque<String>,
    active: bool,
    starts: usize,
}

impl ScriptedRecognizer {
    pub fn new<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            utterances: utterances.into_iter().map(Into::into).collect(),
            active: false,
            starts: 0,
        }
    }

    /// The utterance recognized by the current capture, if any
    pub fn take_utterance(&mut self) -> Option<String> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.utterances.pop_front()
    }

    pub fn starts(&self) -> usize {
        self.starts
    }

    pub fn remaining(&self) -> usize {
        self.utterances.len()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self) -> Result<(), VoiceError> {
        self.active = true;
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }
}

/// Single-flight voice capture feeding an [`IngredientInput`]
#[derive(Debug)]
pub struct VoiceInput<R: SpeechRecognizer> {
    recognizer: R,
    listening: bool,
}

impl<R: SpeechRecognizer> VoiceInput<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            listening: false,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_available()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Start a capture. Returns whether a new capture actually began.
    ///
    /// Starting while already listening, or without a recognizer, does nothing.
    pub fn start(&mut self) -> bool {
        if self.listening {
            debug!("Voice capture already active, ignoring start");
            return false;
        }
        if !self.recognizer.is_available() {
            debug!("Speech recognition unavailable, voice input disabled");
            return false;
        }
        match self.recognizer.start() {
            Ok(()) => {
                info!("Listening for ingredients");
                self.listening = true;
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Stop the current capture; no-op when idle
    pub fn stop(&mut self) {
        if !self.listening {
            return;
        }
        self.recognizer.stop();
        self.listening = false;
    }

    /// Recognizer produced an utterance. Appends it to the ingredient text.
    ///
    /// Results arriving while no capture is active (after `stop`) are ignored.
    pub fn on_result(&mut self, input: &mut IngredientInput, transcript: &str) {
        if !self.listening {
            debug!("Ignoring voice transcript outside a capture: {}", transcript);
            return;
        }
        debug!("Voice transcript: {}", transcript);
        input.append_transcript(transcript);
        self.listening = false;
    }

    /// Recognizer ended the capture on its own
    pub fn on_end(&mut self) {
        self.listening = false;
    }

    pub fn on_error(&mut self, message: &str) {
        warn!("Speech recognition error: {}", message);
        self.listening = false;
    }

    pub fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace `word` wherever it stands alone, i.e. not inside a longer word
fn replace_standalone_word(text: &str, word: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            out.push_str(&text[last..start]);
            out.push_str(replacement);
            last = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Turn a spoken utterance into comma separated ingredient words.
///
/// Lower-cases, turns standalone "and"/"with" into commas, then keeps every
/// word longer than two characters. Commas only separate words here, so
/// "red bell pepper" comes out as three ingredients.
pub fn clean_transcript(transcript: &str) -> String {
    let mut text = transcript.to_lowercase();
    for word in CONJUNCTIONS {
        text = replace_standalone_word(&text, word, ",");
    }
    let text = text
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR);

    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
