use tinyflix_model::Video;

use super::sort::sort_videos;
use super::{FilterMode, SortField};
use crate::config::{CatalogConfig, PopularityThreshold};

/// Narrow a result set by mode.
///
/// `Recent` orders by publication date (newest first) and applies the
/// recent cap. `Popular` keeps videos whose view count clears the
/// configured threshold, most viewed first, and applies the popular cap.
/// Relative thresholds are measured against the whole `catalog`, not
/// against `videos`.
pub fn filter_videos<'a>(
    mode: FilterMode,
    mut videos: Vec<&'a Video>,
    catalog: &[Video],
    config: &CatalogConfig,
) -> Vec<&'a Video> {
    match mode {
        FilterMode::Recent => {
            sort_videos(&mut videos, SortField::Date);
            cap(videos, config.recent_limit)
        }
        FilterMode::Popular => {
            let mut popular: Vec<&Video> = match config.popular_threshold {
                PopularityThreshold::AtLeast(floor) => videos
                    .into_iter()
                    .filter(|video| video.view_count >= floor)
                    .collect(),
                relative => {
                    let threshold = view_threshold(catalog, relative);
                    videos
                        .into_iter()
                        .filter(|video| video.view_count as f64 > threshold)
                        .collect()
                }
            };
            popular.sort_by(|a, b| b.view_count.cmp(&a.view_count));
            cap(popular, config.popular_limit)
        }
    }
}

/// View count a video must exceed to count as popular. Relative
/// thresholds are computed over `catalog`; an empty catalog yields `0.0`.
pub fn view_threshold(
    catalog: &[Video],
    threshold: PopularityThreshold,
) -> f64 {
    match threshold {
        PopularityThreshold::AtLeast(floor) => floor as f64,
        PopularityThreshold::Median => percentile(catalog, 50.0),
        PopularityThreshold::Percentile(p) => percentile(catalog, p),
    }
}

/// Linear-interpolated percentile of the view counts.
fn percentile(catalog: &[Video], p: f64) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let p = if p.is_nan() { 50.0 } else { p.clamp(0.0, 100.0) };

    let mut views: Vec<u64> =
        catalog.iter().map(|video| video.view_count).collect();
    views.sort_unstable();

    let rank = p / 100.0 * (views.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    views[lower] as f64 + (views[upper] as f64 - views[lower] as f64) * weight
}

fn cap(mut videos: Vec<&Video>, limit: Option<usize>) -> Vec<&Video> {
    if let Some(limit) = limit {
        videos.truncate(limit);
    }
    videos
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn views(counts: &[u64]) -> Vec<Video> {
        counts
            .iter()
            .map(|count| Video::new(format!("v{count}")).with_views(*count))
            .collect()
    }

    fn titles(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|video| video.title.clone()).collect()
    }

    #[test]
    fn median_interpolates_even_lengths() {
        let catalog = views(&[10, 20, 30, 40]);
        let median = PopularityThreshold::Median;
        assert_eq!(view_threshold(&catalog, median), 25.0);
        assert_eq!(
            view_threshold(&catalog, PopularityThreshold::Percentile(100.0)),
            40.0
        );
        assert_eq!(
            view_threshold(&catalog, PopularityThreshold::Percentile(0.0)),
            10.0
        );
    }

    #[test]
    fn popular_is_strictly_above_median() {
        let catalog = views(&[5, 100, 50, 1_000_000_000]);
        let result = filter_videos(
            FilterMode::Popular,
            catalog.iter().collect(),
            &catalog,
            &CatalogConfig::default(),
        );
        assert_eq!(titles(&result), vec!["v1000000000", "v100"]);
    }

    #[test]
    fn median_itself_is_not_popular() {
        let catalog = views(&[10, 20, 30]);
        let result = filter_videos(
            FilterMode::Popular,
            catalog.iter().collect(),
            &catalog,
            &CatalogConfig::default(),
        );
        assert_eq!(titles(&result), vec!["v30"]);
    }

    #[test]
    fn uniform_views_have_nothing_popular() {
        let catalog = views(&[7, 7, 7]);
        let result = filter_videos(
            FilterMode::Popular,
            catalog.iter().collect(),
            &catalog,
            &CatalogConfig::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn narrowed_set_is_measured_against_the_catalog() {
        let catalog = views(&[300, 400, 500, 1_000_000_000]);
        let hits = vec![&catalog[3]];
        let result = filter_videos(
            FilterMode::Popular,
            hits,
            &catalog,
            &CatalogConfig::default(),
        );
        assert_eq!(titles(&result), vec!["v1000000000"]);

        // 400 is below the catalog median of 450 even when it is the only hit
        let result = filter_videos(
            FilterMode::Popular,
            vec![&catalog[1]],
            &catalog,
            &CatalogConfig::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn absolute_floor_and_cap() {
        let catalog = views(&[999, 1_000, 5_000, 20_000]);
        let config = CatalogConfig {
            popular_threshold: PopularityThreshold::AtLeast(1_000),
            popular_limit: Some(2),
            ..CatalogConfig::default()
        };
        let result = filter_videos(
            FilterMode::Popular,
            catalog.iter().collect(),
            &catalog,
            &config,
        );
        assert_eq!(titles(&result), vec!["v20000", "v5000"]);
    }

    #[test]
    fn recent_orders_by_date_with_optional_cap() {
        let day = |d| Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap();
        let catalog = vec![
            Video::new("March 1").with_published_at(day(1)),
            Video::new("March 9").with_published_at(day(9)),
            Video::new("March 5").with_published_at(day(5)),
        ];

        let all = filter_videos(
            FilterMode::Recent,
            catalog.iter().collect(),
            &catalog,
            &CatalogConfig::default(),
        );
        assert_eq!(titles(&all), vec!["March 9", "March 5", "March 1"]);

        let config = CatalogConfig {
            recent_limit: Some(1),
            ..CatalogConfig::default()
        };
        let capped = filter_videos(
            FilterMode::Recent,
            catalog.iter().collect(),
            &catalog,
            &config,
        );
        assert_eq!(titles(&capped), vec!["March 9"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        for mode in [FilterMode::Recent, FilterMode::Popular] {
            let result =
                filter_videos(mode, Vec::new(), &[], &CatalogConfig::default());
            assert!(result.is_empty());
        }
    }
}
