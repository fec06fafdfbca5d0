use anyhow::{Context, bail};
use serde::Serialize;
use std::{fs, path::Path};
use tinyflix_core::format::{format_time, format_view_count};
use tinyflix_model::Video;
use tracing::debug;

/// Read a JSON array of videos and check each entry.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Video>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read catalog from {}", path.display())
    })?;
    let videos: Vec<Video> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid catalog {}", path.display()))?;

    for video in &videos {
        video.validate().with_context(|| {
            format!("invalid catalog entry in {}", path.display())
        })?;
    }

    let mut ids: Vec<_> = videos.iter().map(|video| video.id).collect();
    ids.sort_unstable();
    if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
        bail!("duplicate video id {} in {}", pair[0], path.display());
    }

    debug!(path = %path.display(), videos = videos.len(), "catalog loaded");
    Ok(videos)
}

/// One row of `catalog` output.
#[derive(Debug, Serialize)]
pub struct CatalogRow<'a> {
    pub id: String,
    pub title: &'a str,
    pub duration: String,
    pub views: String,
    pub rating: f32,
}

impl<'a> CatalogRow<'a> {
    pub fn from_video(video: &'a Video) -> anyhow::Result<Self> {
        Ok(Self {
            id: video.id.to_string(),
            title: &video.title,
            duration: format_time(video.duration_seconds)?,
            views: format_view_count(video.view_count),
            rating: video.rating,
        })
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{} views\t{:.1}",
            self.title, self.duration, self.views, self.rating
        )
    }
}
