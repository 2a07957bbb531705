use std::fmt;

/// The only identity in the demo; every like is recorded under it.
pub const DEMO_USER_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

impl fmt::Display for LikeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeOutcome::Liked => f.write_str("liked"),
            LikeOutcome::Unliked => f.write_str("unliked"),
        }
    }
}
