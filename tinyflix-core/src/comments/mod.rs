//! Comments, replies, and likes for each video.

pub mod text;

pub use text::{CommentText, MAX_TEXT_CHARS, MIN_TEXT_CHARS, TextKind};

use std::collections::HashMap;

use chrono::Utc;
use tinyflix_model::{Comment, CommentID, Reply, ReplyID, VideoID};
use tracing::{debug, info};

use crate::error::{CoreError, Result};

/// Comment collection, scoped by video.
///
/// Comments and replies are stored in creation order. Text is validated
/// before anything is stored, so a rejected submission leaves no trace.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    by_video: HashMap<VideoID, Vec<Comment>>,
    // Comments are never removed, so positions stay valid
    index: HashMap<CommentID, (VideoID, usize)>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_comment(
        &mut self,
        video_id: VideoID,
        text: &str,
    ) -> Result<Comment> {
        let text =
            CommentText::new(TextKind::Comment, text).inspect_err(|err| {
                debug!(%video_id, reason = %err.reason, "comment rejected");
            })?;

        let comment = Comment {
            id: CommentID::new(),
            video_id,
            text: text.into_string(),
            like_count: 0,
            created_at: Utc::now(),
            replies: Vec::new(),
        };

        let comments = self.by_video.entry(video_id).or_default();
        self.index.insert(comment.id, (video_id, comments.len()));
        comments.push(comment.clone());
        info!(%video_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    /// Returns the new like count.
    pub fn like_comment(&mut self, comment_id: CommentID) -> Result<u32> {
        let comment = self.comment_mut(comment_id)?;
        comment.like_count = comment.like_count.saturating_add(1);
        Ok(comment.like_count)
    }

    pub fn add_reply(
        &mut self,
        comment_id: CommentID,
        text: &str,
    ) -> Result<Reply> {
        let text = CommentText::new(TextKind::Reply, text).inspect_err(|err| {
            debug!(%comment_id, reason = %err.reason, "reply rejected");
        })?;
        let comment = self.comment_mut(comment_id)?;

        let reply = Reply {
            id: ReplyID::new(),
            comment_id,
            text: text.into_string(),
            like_count: 0,
            created_at: Utc::now(),
        };
        comment.replies.push(reply.clone());
        info!(%comment_id, reply_id = %reply.id, "reply added");
        Ok(reply)
    }

    /// Like a reply. The parent comment's count is untouched.
    pub fn like_reply(
        &mut self,
        comment_id: CommentID,
        reply_id: ReplyID,
    ) -> Result<u32> {
        let comment = self.comment_mut(comment_id)?;
        let reply = comment
            .replies
            .iter_mut()
            .find(|reply| reply.id == reply_id)
            .ok_or_else(|| CoreError::not_found("Reply", reply_id))?;
        reply.like_count = reply.like_count.saturating_add(1);
        Ok(reply.like_count)
    }

    /// Comments for `video_id` in creation order.
    pub fn list(&self, video_id: VideoID) -> &[Comment] {
        self.by_video
            .get(&video_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Presentation order used by the comment panel.
    pub fn list_newest_first(&self, video_id: VideoID) -> Vec<&Comment> {
        self.list(video_id).iter().rev().collect()
    }

    pub fn get(&self, comment_id: CommentID) -> Option<&Comment> {
        let (video_id, position) = self.index.get(&comment_id)?;
        self.by_video.get(video_id)?.get(*position)
    }

    /// Comments across all videos.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn comment_mut(&mut self, comment_id: CommentID) -> Result<&mut Comment> {
        self.index
            .get(&comment_id)
            .and_then(|(video_id, position)| {
                self.by_video.get_mut(video_id)?.get_mut(*position)
            })
            .ok_or_else(|| CoreError::not_found("Comment", comment_id))
    }
}
