use super::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SelectTheme(Theme),
    ResumeAutoTheme,
    ToggleEffects,
    ToggleVoice,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "m" | "M" => Some(KeyAction::SelectTheme(Theme::Morning)),
        "e" | "E" => Some(KeyAction::SelectTheme(Theme::Evening)),
        "n" | "N" => Some(KeyAction::SelectTheme(Theme::Night)),
        "a" | "A" => Some(KeyAction::ResumeAutoTheme),
        "t" | "T" => Some(KeyAction::ToggleEffects),
        "v" | "V" => Some(KeyAction::ToggleVoice),
        _ => None,
    }
}
