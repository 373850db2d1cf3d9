//! The canonical emotion enumeration.
//!
//! The original diary application passed emotions around interchangeably as
//! integer ids and Korean label strings. This module unifies those legacy
//! representations into a single closed enum with explicit, total conversion
//! functions for every boundary that still speaks one of the old dialects:
//! the persistence layer (integer id / label string) and the remote sentiment
//! service (numeric 0-5 label).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed emotion categories the classifier can output.
///
/// The declaration order is the classifier's priority order: when a diary
/// text matches keywords from more than one category, the earliest variant
/// listed here wins.
///
/// # Examples
///
/// ```
/// use maum::Emotion;
///
/// assert_eq!(Emotion::Sad.id(), 1);
/// assert_eq!(Emotion::Sad.key(), "sad");
/// assert_eq!(Emotion::Sad.label(), "슬픔");
/// assert_eq!(Emotion::from_id(1), Some(Emotion::Sad));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// 슬픔 — sadness.
    Sad,
    /// 기쁨 — happiness.
    Happy,
    /// 분노 — anger.
    Angry,
    /// 불안 — anxiety.
    Anxious,
    /// 놀람 — surprise.
    Surprised,
}

impl Emotion {
    /// All five emotions, in priority order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Sad,
        Emotion::Happy,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Surprised,
    ];

    /// The stable integer id (1-5) used by the persistence layer.
    pub fn id(self) -> u8 {
        match self {
            Emotion::Sad => 1,
            Emotion::Happy => 2,
            Emotion::Angry => 3,
            Emotion::Anxious => 4,
            Emotion::Surprised => 5,
        }
    }

    /// The stable string tag (`sad`, `happy`, `angry`, `anxious`, `surprised`).
    pub fn key(self) -> &'static str {
        match self {
            Emotion::Sad => "sad",
            Emotion::Happy => "happy",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Surprised => "surprised",
        }
    }

    /// The Korean display label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Sad => "슬픔",
            Emotion::Happy => "기쁨",
            Emotion::Angry => "분노",
            Emotion::Anxious => "불안",
            Emotion::Surprised => "놀람",
        }
    }

    /// Looks up an emotion by its persistence-layer integer id.
    ///
    /// Returns `None` for ids outside 1-5.
    pub fn from_id(id: u8) -> Option<Emotion> {
        match id {
            1 => Some(Emotion::Sad),
            2 => Some(Emotion::Happy),
            3 => Some(Emotion::Angry),
            4 => Some(Emotion::Anxious),
            5 => Some(Emotion::Surprised),
            _ => None,
        }
    }

    /// Looks up an emotion by its string tag.
    pub fn from_key(key: &str) -> Option<Emotion> {
        match key {
            "sad" => Some(Emotion::Sad),
            "happy" => Some(Emotion::Happy),
            "angry" => Some(Emotion::Angry),
            "anxious" => Some(Emotion::Anxious),
            "surprised" => Some(Emotion::Surprised),
            _ => None,
        }
    }

    /// Looks up an emotion by its Korean display label.
    pub fn from_label(label: &str) -> Option<Emotion> {
        match label {
            "슬픔" => Some(Emotion::Sad),
            "기쁨" => Some(Emotion::Happy),
            "분노" => Some(Emotion::Angry),
            "불안" => Some(Emotion::Anxious),
            "놀람" => Some(Emotion::Surprised),
            _ => None,
        }
    }

    /// Maps a numeric label returned by the remote sentiment service (0-5)
    /// onto the category set.
    ///
    /// The service distinguishes six labels while the diary only has five
    /// categories, so labels 2 and 4 both map to anger. Returns `None` for
    /// labels outside 0-5.
    pub fn from_remote_label(label: u8) -> Option<Emotion> {
        match label {
            0 => Some(Emotion::Anxious),
            1 => Some(Emotion::Surprised),
            2 => Some(Emotion::Angry),
            3 => Some(Emotion::Sad),
            4 => Some(Emotion::Angry),
            5 => Some(Emotion::Happy),
            _ => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_id(emotion.id()), Some(emotion));
        }
    }

    #[test]
    fn test_key_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_key(emotion.key()), Some(emotion));
        }
    }

    #[test]
    fn test_label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.label()), Some(emotion));
        }
    }

    #[test]
    fn test_ids_are_unique_and_in_range() {
        let mut seen = std::collections::HashSet::new();
        for emotion in Emotion::ALL {
            assert!((1..=5).contains(&emotion.id()));
            assert!(seen.insert(emotion.id()));
        }
    }

    #[test]
    fn test_from_id_out_of_range() {
        assert_eq!(Emotion::from_id(0), None);
        assert_eq!(Emotion::from_id(6), None);
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Emotion::from_key("melancholy"), None);
        assert_eq!(Emotion::from_key(""), None);
    }

    #[test]
    fn test_remote_label_mapping() {
        assert_eq!(Emotion::from_remote_label(0), Some(Emotion::Anxious));
        assert_eq!(Emotion::from_remote_label(1), Some(Emotion::Surprised));
        assert_eq!(Emotion::from_remote_label(2), Some(Emotion::Angry));
        assert_eq!(Emotion::from_remote_label(3), Some(Emotion::Sad));
        // The service's six labels collapse onto five categories: 4 is also anger.
        assert_eq!(Emotion::from_remote_label(4), Some(Emotion::Angry));
        assert_eq!(Emotion::from_remote_label(5), Some(Emotion::Happy));
        assert_eq!(Emotion::from_remote_label(6), None);
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(format!("{}", Emotion::Anxious), "anxious");
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Emotion::Surprised).unwrap();
        assert_eq!(json, "\"surprised\"");
        let back: Emotion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Emotion::Surprised);
    }
}
