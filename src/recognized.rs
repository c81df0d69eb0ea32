use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that was either successfully recognized as a known variant `T`,
/// or is an unrecognized raw value `Raw`.
///
/// Game updates introduce new villages, resources and rarities faster than
/// this crate ships releases, and the raw name is worth keeping: callers can
/// still display or compare it even when no typed variant exists yet. This
/// is conceptually `Result<T, Raw>`, minus the implication that the unknown
/// case is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recognized<T, Raw = String> {
    Known(T),
    Unknown(Raw),
}

impl<T: Copy, Raw: Copy> Copy for Recognized<T, Raw> {}

impl<T, Raw> Recognized<T, Raw> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Recognized::Known(t) => Some(t),
            Recognized::Unknown(_) => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Recognized::Known(t) => Some(t),
            Recognized::Unknown(_) => None,
        }
    }

    pub fn unknown(&self) -> Option<&Raw> {
        match self {
            Recognized::Known(_) => None,
            Recognized::Unknown(raw) => Some(raw),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Recognized::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Recognized::Unknown(_))
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Recognized::Known(t) => t,
            Recognized::Unknown(_) => default,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Recognized<U, Raw> {
        match self {
            Recognized::Known(t) => Recognized::Known(f(t)),
            Recognized::Unknown(raw) => Recognized::Unknown(raw),
        }
    }

    pub fn as_ref(&self) -> Recognized<&T, &Raw> {
        match self {
            Recognized::Known(t) => Recognized::Known(t),
            Recognized::Unknown(raw) => Recognized::Unknown(raw),
        }
    }
}

impl<T, Raw> From<T> for Recognized<T, Raw> {
    fn from(value: T) -> Self {
        Recognized::Known(value)
    }
}

impl<T: fmt::Display, Raw: fmt::Display> fmt::Display for Recognized<T, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognized::Known(t) => t.fmt(f),
            Recognized::Unknown(raw) => raw.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keeps_the_raw_name() {
        let village: Recognized<crate::game_types::Village> =
            Recognized::Unknown("moonBase".to_string());
        assert!(village.is_unknown());
        assert_eq!(village.unknown().map(String::as_str), Some("moonBase"));
        assert_eq!(village.to_string(), "moonBase");
    }

    #[test]
    fn known_round_trips() {
        let r: Recognized<u32> = Recognized::Known(7);
        assert_eq!(r.known(), Some(&7));
        assert_eq!(r.map(|v| v * 2).into_known(), Some(14));
    }
}
