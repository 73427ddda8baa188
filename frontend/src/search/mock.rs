use crate::models::Video;
use rand::Rng;

pub const MOCK_VIDEO_COUNT: usize = 12;

const MOCK_THUMBNAIL: &str = "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg";

/// Placeholder results used in demo mode and whenever a live search fails.
pub fn generate_mock_videos<R: Rng>(query: &str, rng: &mut R) -> Vec<Video> {
    (0..MOCK_VIDEO_COUNT)
        .map(|i| Video {
            id: format!("video-{i}"),
            title: format!("{query} - Tutorial Part {}", i + 1),
            thumbnail: MOCK_THUMBNAIL.to_string(),
            channel: format!("Creator {}", i + 1),
            views: format!("{}K views", rng.gen_range(0..1000)),
            published_at: format!("{} days ago", rng.gen_range(0..30)),
            duration: format!("{}:{:02}", rng.gen_range(5..25), rng.gen_range(0..60)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_always_twelve_with_indexed_titles() {
        let mut rng = StdRng::seed_from_u64(42);
        let videos = generate_mock_videos("cats", &mut rng);

        assert_eq!(videos.len(), MOCK_VIDEO_COUNT);
        for (i, video) in videos.iter().enumerate() {
            assert_eq!(video.title, format!("cats - Tutorial Part {}", i + 1));
            assert_eq!(video.channel, format!("Creator {}", i + 1));
            assert!(!video.id.is_empty());
        }
    }

    #[test]
    fn test_ids_unique_within_result_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let videos = generate_mock_videos("dogs", &mut rng);
        let ids: HashSet<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), videos.len());
    }

    #[test]
    fn test_display_strings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for video in generate_mock_videos("x", &mut rng) {
            let views: u32 = video.views.trim_end_matches("K views").parse().unwrap();
            assert!(views < 1000);

            let days: u32 = video.published_at.trim_end_matches(" days ago").parse().unwrap();
            assert!(days < 30);

            let (minutes, seconds) = video.duration.split_once(':').unwrap();
            let minutes: u32 = minutes.parse().unwrap();
            assert!((5..25).contains(&minutes));
            assert_eq!(seconds.len(), 2);
            assert!(seconds.parse::<u32>().unwrap() < 60);
        }
    }
}
