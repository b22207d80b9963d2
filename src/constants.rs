// DOM contract with the host page.

pub const CONFIG_ELEMENT_ID: &str = "fx-config";
pub const VOICE_TOGGLE_ID: &str = "voice-toggle";
pub const VOICE_TRANSCRIPT_ID: &str = "voice-transcript";
pub const THEME_LABEL_ID: &str = "theme-label";

pub const LISTENING_CLASS: &str = "listening";
pub const DISABLED_CLASS: &str = "disabled";

pub const SPEECH_LANG: &str = "en-US";
pub const CANVAS_FONT_FAMILY: &str = "system-ui, sans-serif";
