//! Scene — a named automation preset defined in the vendor cloud.
//!
//! Scenes are owned by the cloud and re-fetched on every access; the hub
//! never edits them. Names are meant for people and are **not** unique.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the cloud assigns to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub i64);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A scene as reported by the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
}

impl Scene {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: SceneId(id),
            name: name.into(),
        }
    }
}

/// Outcome of looking a scene up by its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch<'a> {
    /// No scene carries the name.
    Missing,
    /// Exactly one scene carries the name.
    Unique(&'a Scene),
    /// Several scenes carry the name; `first` is the one in earliest list position.
    Ambiguous { first: &'a Scene, count: usize },
}

impl<'a> NameMatch<'a> {
    /// The scene a name lookup settles on: the first one in list order.
    #[must_use]
    pub fn scene(self) -> Option<&'a Scene> {
        match self {
            Self::Missing => None,
            Self::Unique(scene) | Self::Ambiguous { first: scene, .. } => Some(scene),
        }
    }
}

/// Linear scan of `scenes` for `name`.
#[must_use]
pub fn find_by_name<'a>(scenes: &'a [Scene], name: &str) -> NameMatch<'a> {
    let mut matches = scenes.iter().filter(|scene| scene.name == name);
    let Some(first) = matches.next() else {
        return NameMatch::Missing;
    };
    match matches.count() {
        0 => NameMatch::Unique(first),
        extra => NameMatch::Ambiguous {
            first,
            count: extra + 1,
        },
    }
}

/// Display names in list order, duplicates included.
#[must_use]
pub fn names(scenes: &[Scene]) -> Vec<String> {
    scenes.iter().map(|scene| scene.name.clone()).collect()
}
