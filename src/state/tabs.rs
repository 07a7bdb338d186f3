//! Active-panel selector for the tab orchestrator.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Feature areas, one mounted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Genre,
    Artist,
    Charts,
    Mood,
    Mix,
    Discover,
    User,
}

impl ActiveTab {
    /// Tab bar order.
    pub const ALL: [Self; 7] = [
        Self::Genre,
        Self::Artist,
        Self::Charts,
        Self::Mood,
        Self::Mix,
        Self::Discover,
        Self::User,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Genre => "Playlists by Genre",
            Self::Artist => "Artist-Based",
            Self::Charts => "Chart Hits & Hidden Gems",
            Self::Mood => "Workout / Happy / Decade",
            Self::Mix => "Mix & Stats",
            Self::Discover => "Search & Similar Artists",
            Self::User => "Users & Saved Playlists",
        }
    }

    /// Stable key used for CSS modifiers.
    pub fn key(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Artist => "artist",
            Self::Charts => "charts",
            Self::Mood => "mood",
            Self::Mix => "mix",
            Self::Discover => "discover",
            Self::User => "user",
        }
    }
}
