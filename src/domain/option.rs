//! Selectable options shown in the dropdown.

use super::character::Character;

/// Render-only projection of a [`Character`] for the multi-select list.
///
/// Options are regenerated from every successful lookup and replace the
/// previous list wholesale. `character` is `None` only for malformed options,
/// which the row renderer skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    /// Text shown in the row (the character's name).
    pub label: String,
    /// Identity used for checked state (the character's id).
    pub value: u32,
    /// Back-reference to the full character record.
    pub character: Option<Character>,
}

impl SelectableOption {
    /// Builds the option for a fetched character.
    #[must_use]
    pub fn from_character(character: Character) -> Self {
        Self {
            label: character.name.clone(),
            value: character.id,
            character: Some(character),
        }
    }

    /// Maps a result list into options, preserving order.
    #[must_use]
    pub fn from_results(results: &[Character]) -> Vec<Self> {
        results.iter().cloned().map(Self::from_character).collect()
    }
}
