use tinyflix_model::Video;

/// Lower-cased search needle. `None` means "match everything".
///
/// Only blank queries are special; otherwise surrounding whitespace is part
/// of the needle.
pub(crate) fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Case-insensitive substring match against title, description, or any tag.
pub fn matches(video: &Video, needle: &str) -> bool {
    video.title.to_lowercase().contains(needle)
        || video.description.to_lowercase().contains(needle)
        || video
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Keep catalog order; an empty or whitespace-only query keeps everything.
pub fn search<'a, I>(query: &str, videos: I) -> Vec<&'a Video>
where
    I: IntoIterator<Item = &'a Video>,
{
    match normalize_query(query) {
        None => videos.into_iter().collect(),
        Some(needle) => videos
            .into_iter()
            .filter(|video| matches(video, &needle))
            .collect(),
    }
}
