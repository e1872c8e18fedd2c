//! Character domain model.
//!
//! A [`Character`] is one catalog entry as returned by the remote lookup. The
//! response envelope is modelled by [`CharacterPage`].

use serde::{Deserialize, Serialize};

/// One entry of the public character catalog.
///
/// Only the fields the picker displays are kept; any other fields in the
/// catalog record are ignored during deserialization. Characters are immutable
/// once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Number of episodes the character appears in.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Short label standing in for the character's thumbnail.
    ///
    /// A terminal pane cannot draw the image, so rows show the last path
    /// segment of the image URI instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use charpick::domain::Character;
    ///
    /// let rick = Character {
    ///     id: 1,
    ///     name: "Rick Sanchez".to_string(),
    ///     image: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".to_string(),
    ///     episode: vec![],
    /// };
    /// assert_eq!(rick.thumbnail(), "1.jpeg");
    /// ```
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        self.image
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("")
    }
}

/// Paging metadata returned alongside the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters matching the query across all pages.
    pub count: u32,
    /// Number of pages available.
    pub pages: u32,
}

/// One page of lookup results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// Total matches reported by the catalog, falling back to the page size.
    #[must_use]
    pub fn total(&self) -> usize {
        self.info
            .map_or(self.results.len(), |info| info.count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_record_ignoring_extra_fields() {
        let json = r#"{
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1", "https://rickandmortyapi.com/api/episode/2"],
            "url": "https://rickandmortyapi.com/api/character/2"
        }"#;

        let morty: Character = serde_json::from_str(json).unwrap();
        assert_eq!(morty.id, 2);
        assert_eq!(morty.name, "Morty Smith");
        assert_eq!(morty.episode_count(), 2);
        assert_eq!(morty.thumbnail(), "2.jpeg");
    }

    #[test]
    fn thumbnail_of_empty_image_is_empty() {
        let nobody = Character {
            id: 9,
            name: "Nobody".to_string(),
            image: String::new(),
            episode: vec![],
        };
        assert_eq!(nobody.thumbnail(), "");
    }

    #[test]
    fn page_total_prefers_reported_count() {
        let page = CharacterPage {
            info: Some(PageInfo { count: 107, pages: 6 }),
            results: vec![],
        };
        assert_eq!(page.total(), 107);

        let bare = CharacterPage { info: None, results: vec![] };
        assert_eq!(bare.total(), 0);
    }
}
