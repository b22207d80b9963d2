use super::error::FxError;
use std::fmt;
use std::str::FromStr;

/// Page sections the host page can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Memories,
    Music,
    Chat,
    Gallery,
    Surprises,
    Settings,
    Timeline,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Memories,
        Section::Music,
        Section::Chat,
        Section::Gallery,
        Section::Surprises,
        Section::Settings,
        Section::Timeline,
    ];

    /// Identifier passed to the host's navigate callback.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Memories => "memories",
            Section::Music => "music",
            Section::Chat => "chat",
            Section::Gallery => "gallery",
            Section::Surprises => "surprises",
            Section::Settings => "settings",
            Section::Timeline => "timeline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Memories => "Memories",
            Section::Music => "Music",
            Section::Chat => "Chat",
            Section::Gallery => "Gallery",
            Section::Surprises => "Surprises",
            Section::Settings => "Settings",
            Section::Timeline => "Timeline",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|sec| sec.id() == key)
            .ok_or(FxError::UnknownSection(key))
    }
}
