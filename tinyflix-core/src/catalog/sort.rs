use std::cmp::Ordering;
use tinyflix_model::Video;

use super::SortField;

/// Compare two videos for the given field.
///
/// - `Title`: case-insensitive ascending, ties by id
/// - `Rating`: descending, ties by id
/// - `Date`: newest first; equal dates keep input order
pub fn compare_videos(a: &Video, b: &Video, field: SortField) -> Ordering {
    match field {
        SortField::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.id.cmp(&b.id)),
        SortField::Rating => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| a.id.cmp(&b.id)),
        SortField::Date => b.published_at.cmp(&a.published_at),
    }
}

/// Stable sort of a borrowed result set.
pub fn sort_videos(videos: &mut [&Video], field: SortField) {
    videos.sort_by(|a, b| compare_videos(a, b, field));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn titles(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|video| video.title.clone()).collect()
    }

    #[test]
    fn rating_descending() {
        let a = Video::new("A").with_rating(4.5);
        let b = Video::new("B").with_rating(4.8);
        let c = Video::new("C").with_rating(3.0);
        let mut videos = vec![&a, &b, &c];
        sort_videos(&mut videos, SortField::Rating);
        assert_eq!(titles(&videos), vec!["B", "A", "C"]);
    }

    #[test]
    fn rating_ties_break_by_id() {
        let first = Video::new("First").with_rating(4.0);
        let second = Video::new("Second").with_rating(4.0);
        let (low, high) = if first.id < second.id {
            (&first, &second)
        } else {
            (&second, &first)
        };
        let mut videos = vec![high, low];
        sort_videos(&mut videos, SortField::Rating);
        assert_eq!(videos[0].id, low.id);
    }

    #[test]
    fn title_ignores_case() {
        let a = Video::new("banana");
        let b = Video::new("Apple");
        let c = Video::new("cherry");
        let mut videos = vec![&a, &b, &c];
        sort_videos(&mut videos, SortField::Title);
        assert_eq!(titles(&videos), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn title_ties_break_by_id() {
        let upper = Video::new("Intro");
        let lower = Video::new("intro");
        let expected = if upper.id < lower.id {
            vec!["Intro", "intro"]
        } else {
            vec!["intro", "Intro"]
        };

        let mut videos = vec![&upper, &lower];
        sort_videos(&mut videos, SortField::Title);
        assert_eq!(titles(&videos), expected);

        let mut videos = vec![&lower, &upper];
        sort_videos(&mut videos, SortField::Title);
        assert_eq!(titles(&videos), expected);
    }

    #[test]
    fn nan_rating_sorts_without_panicking() {
        let rated = Video::new("Rated").with_rating(4.0);
        let broken = Video::new("Broken").with_rating(f32::NAN);
        let low = Video::new("Low").with_rating(1.0);
        let mut videos = vec![&low, &broken, &rated];
        sort_videos(&mut videos, SortField::Rating);
        // total_cmp places positive NaN above every number
        assert_eq!(titles(&videos), vec!["Broken", "Rated", "Low"]);
    }

    #[test]
    fn date_newest_first_and_stable() {
        let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
        let old = Video::new("Old").with_published_at(day(1));
        let new = Video::new("New").with_published_at(day(20));
        let twin_a = Video::new("Twin A").with_published_at(day(10));
        let twin_b = Video::new("Twin B").with_published_at(day(10));
        let mut videos = vec![&old, &twin_b, &new, &twin_a];
        sort_videos(&mut videos, SortField::Date);
        assert_eq!(titles(&videos), vec!["New", "Twin B", "Twin A", "Old"]);
    }
}
