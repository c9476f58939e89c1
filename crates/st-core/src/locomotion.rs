//! Player locomotion state shared across the player and noise crates.

/// How the player is currently moving.
///
/// The locomotion state selects both the movement speed and the noise
/// profile: sneaking is silent, walking and running each define their own
/// emission interval and radius.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locomotion {
    /// Slow and silent — never emits noise.
    Sneaking,
    /// Normal pace (default state).
    #[default]
    Walking,
    /// Fast and loud.
    Running,
}

impl Locomotion {
    /// `true` for the one state that suppresses noise emission entirely.
    #[inline]
    pub fn is_silent(self) -> bool {
        matches!(self, Locomotion::Sneaking)
    }

    /// Human-readable label, useful for trace column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Locomotion::Sneaking => "sneaking",
            Locomotion::Walking  => "walking",
            Locomotion::Running  => "running",
        }
    }
}

impl std::fmt::Display for Locomotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
