// * Leaderboard payload shapes
// * The API has shipped the entry list bare and under several wrapper keys.
// * The shape is resolved once here so the normalizer only ever sees a slice.

use serde_json::Value;

use crate::config::constants::LEADERBOARD_WRAPPER_KEYS;

/// The known shapes of a raw leaderboard response.
#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardPayload<'a> {
    /// The response body is the entry array itself.
    Bare(&'a [Value]),
    /// The entry array sits under `key` (possibly one object level down).
    Wrapped { key: &'static str, entries: &'a [Value] },
    /// No entry array could be located.
    Unrecognized,
}

impl<'a> LeaderboardPayload<'a> {
    /// Probes `raw` in fixed priority order: bare array, then each wrapper key.
    pub fn resolve(raw: &'a Value) -> Self {
        if let Value::Array(entries) = raw {
            return Self::Bare(entries);
        }

        // * Direct wrapper first, then a single nested level (e.g. data.entries)
        if let Some(found) = Self::find_wrapped(raw) {
            return found;
        }

        if let Some(object) = raw.as_object() {
            for key in LEADERBOARD_WRAPPER_KEYS {
                if let Some(inner) = object.get(*key).filter(|v| v.is_object()) {
                    if let Some(Self::Wrapped { entries, .. }) = Self::find_wrapped(inner) {
                        return Self::Wrapped { key: *key, entries };
                    }
                }
            }
        }

        Self::Unrecognized
    }

    fn find_wrapped(raw: &'a Value) -> Option<Self> {
        let object = raw.as_object()?;
        LEADERBOARD_WRAPPER_KEYS.iter().find_map(|key| match object.get(*key) {
            Some(Value::Array(entries)) => Some(Self::Wrapped { key: *key, entries }),
            _ => None,
        })
    }

    /// The located entries; empty when unrecognized.
    pub fn entries(&self) -> &'a [Value] {
        match self {
            Self::Bare(entries) => *entries,
            Self::Wrapped { entries, .. } => *entries,
            Self::Unrecognized => &[],
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Bare(_) => "bare",
            Self::Wrapped { key, .. } => *key,
            Self::Unrecognized => "unrecognized",
        }
    }
}
