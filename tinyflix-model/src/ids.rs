use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for catalog videos
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VideoID(pub Uuid);

impl Default for VideoID {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoID {
    pub fn new() -> Self {
        VideoID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "Video ID cannot be empty".to_string(),
            ));
        }
        id.trim()
            .parse()
            .map(VideoID)
            .map_err(|err| ModelError::InvalidId(format!("{id}: {err}")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for VideoID {
    fn from(id: Uuid) -> Self {
        VideoID(id)
    }
}

impl std::fmt::Display for VideoID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a bookmark, unique across videos.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BookmarkID(pub Uuid);

impl Default for BookmarkID {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkID {
    pub fn new() -> Self {
        BookmarkID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for BookmarkID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommentID(pub Uuid);

impl Default for CommentID {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentID {
    pub fn new() -> Self {
        CommentID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CommentID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReplyID(pub Uuid);

impl Default for ReplyID {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyID {
    pub fn new() -> Self {
        ReplyID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ReplyID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_parses_hyphenated_uuid() {
        let raw = "0190b8a2-6f1e-7c3a-9d4e-2b5f8a1c0d11";
        let id = VideoID::from_string(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn video_id_rejects_blank_and_garbage() {
        assert!(VideoID::from_string("   ").is_err());
        assert!(VideoID::from_string("not-a-uuid").is_err());
    }
}
