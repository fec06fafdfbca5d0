use crate::ids::{CommentID, ReplyID, VideoID};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Top-level comment on a video together with its replies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    pub id: CommentID,
    pub video_id: VideoID,
    pub text: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
    /// Replies in insertion order
    #[cfg_attr(feature = "serde", serde(default))]
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn reply(&self, reply_id: &ReplyID) -> Option<&Reply> {
        self.replies.iter().find(|reply| reply.id == *reply_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reply {
    pub id: ReplyID,
    /// Parent comment (back-reference only)
    pub comment_id: CommentID,
    pub text: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
}
