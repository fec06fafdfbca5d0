//! Curated surface for hosts and tools.

pub use crate::accessibility::{
    Announcement, FocusLog, FocusManager, FocusTarget, NoFocus, RangeAria,
};
pub use crate::bookmarks::BookmarkStore;
pub use crate::catalog::{
    CatalogQuery, CatalogSearchEngine, FilterMode, SortField,
};
pub use crate::comments::{CommentText, CommentThread, TextKind};
pub use crate::config::{
    BookmarkConfig, CatalogConfig, CoreConfig, PlayerConfig,
    PopularityThreshold,
};
pub use crate::error::{CoreError, ErrorKind, ErrorPresentation};
pub use crate::format::{format_time, format_view_count};
pub use crate::player::{
    DisplayTime, LoadFailure, LoadOutcome, LoadPlan, LoadReport, LoadTicket,
    MediaLoader, PlaybackState, PlaybackStatus, PlayerController, StepDirection,
};
pub use crate::validation::{ValidationError, ValidationReason};

pub use tinyflix_model::{
    Bookmark, BookmarkID, Comment, CommentID, MediaSource, Reply, ReplyID,
    Video, VideoID,
};
