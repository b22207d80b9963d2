//! Voice command panel state and transcript matching.
//!
//! The platform recognizer lives in the web front end; this module only
//! tracks whether listening is possible/active and turns transcripts into
//! navigation commands.

use super::section::Section;

/// Ordered command table. First entry whose phrase is contained in the
/// transcript wins.
pub const COMMANDS: &[(&str, Section)] = &[
    ("go home", Section::Hero),
    ("show memories", Section::Memories),
    ("play music", Section::Music),
    ("open chat", Section::Chat),
    ("show gallery", Section::Gallery),
    ("show surprises", Section::Surprises),
    ("open settings", Section::Settings),
    ("show timeline", Section::Timeline),
];

#[inline]
pub fn normalize_transcript(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}

/// Match a transcript against [`COMMANDS`] by substring containment.
pub fn match_command(transcript: &str) -> Option<Section> {
    let text = normalize_transcript(transcript);
    COMMANDS
        .iter()
        .find(|(phrase, _)| text.contains(phrase))
        .map(|(_, section)| *section)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceState {
    Unsupported,
    Idle,
    Listening,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// Interim text; display only.
    Interim(String),
    Navigate(Section),
    /// Finalized text that matched no command.
    FreeText(String),
}

#[derive(Clone, Debug)]
pub struct VoicePanel {
    state: VoiceState,
    last_transcript: Option<String>,
}

impl VoicePanel {
    pub fn new(supported: bool) -> Self {
        Self {
            state: if supported {
                VoiceState::Idle
            } else {
                VoiceState::Unsupported
            },
            last_transcript: None,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_supported(&self) -> bool {
        self.state != VoiceState::Unsupported
    }

    pub fn is_listening(&self) -> bool {
        self.state == VoiceState::Listening
    }

    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Returns true when the state changed and the recognizer must start.
    pub fn start(&mut self) -> bool {
        match self.state {
            VoiceState::Idle => {
                self.state = VoiceState::Listening;
                true
            }
            _ => false,
        }
    }

    /// Returns true when the state changed and the recognizer must stop.
    pub fn stop(&mut self) -> bool {
        match self.state {
            VoiceState::Listening => {
                self.state = VoiceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Toggle listening. Returns the new listening flag.
    pub fn toggle(&mut self) -> bool {
        if self.is_listening() {
            self.stop();
        } else {
            self.start();
        }
        self.is_listening()
    }

    /// The recognizer ended on its own (error, silence timeout).
    pub fn on_end(&mut self) {
        if self.state == VoiceState::Listening {
            self.state = VoiceState::Idle;
        }
    }

    pub fn on_result(&mut self, transcript: &str, is_final: bool) -> VoiceOutcome {
        let text = normalize_transcript(transcript);
        self.last_transcript = Some(text.clone());
        if !is_final {
            return VoiceOutcome::Interim(text);
        }
        match match_command(&text) {
            Some(section) => {
                log::info!("[voice] \"{}\" -> {}", text, section);
                VoiceOutcome::Navigate(section)
            }
            None => VoiceOutcome::FreeText(text),
        }
    }
}
