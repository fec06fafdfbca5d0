use async_trait::async_trait;
use tinyflix_model::MediaSource;
use tracing::debug;

use super::source::{LoadFailure, LoadTicket};

/// Port to whatever actually fetches and probes media (a `<video>` element,
/// a decoder, a test double).
#[async_trait]
pub trait MediaLoader: Send + Sync {
    async fn load(&self, source: &MediaSource) -> Result<(), LoadFailure>;
}

/// Snapshot of what to load for one generation. Taken from the player so
/// the await does not hold a borrow on it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlan {
    pub ticket: LoadTicket,
    pub sources: Vec<MediaSource>,
    /// Index of the first candidate to try
    pub start: usize,
}

/// What a [`LoadPlan`] run produced, to be applied with
/// `PlayerController::apply_load`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub ticket: LoadTicket,
    pub result: Result<usize, LoadAttemptFailure>,
}

/// Final failure of a run: which candidate failed last and why.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadAttemptFailure {
    pub index: Option<usize>,
    pub failure: LoadFailure,
}

impl LoadPlan {
    /// Walk the candidates in order until one loads, a failure that does not
    /// allow fallback occurs, or the list is exhausted.
    pub async fn run<L>(self, loader: &L) -> LoadReport
    where
        L: MediaLoader + ?Sized,
    {
        let mut last = LoadAttemptFailure {
            index: None,
            failure: LoadFailure::UnsupportedFormat,
        };

        let candidates = self.sources.iter().enumerate().skip(self.start);
        for (index, source) in candidates {
            match loader.load(source).await {
                Ok(()) => {
                    debug!(
                        ticket = %self.ticket,
                        index,
                        url = %source.url,
                        "source loaded"
                    );
                    return LoadReport {
                        ticket: self.ticket,
                        result: Ok(index),
                    };
                }
                Err(failure) => {
                    debug!(
                        ticket = %self.ticket,
                        index,
                        url = %source.url,
                        %failure,
                        "source failed"
                    );
                    let fallback = failure.allows_fallback();
                    last = LoadAttemptFailure {
                        index: Some(index),
                        failure,
                    };
                    if !fallback {
                        break;
                    }
                }
            }
        }

        LoadReport {
            ticket: self.ticket,
            result: Err(last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tinyflix_model::VideoID;

    #[derive(Default)]
    struct RecordingLoader {
        accepts: &'static str,
        tried: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MediaLoader for RecordingLoader {
        async fn load(
            &self,
            source: &MediaSource,
        ) -> Result<(), LoadFailure> {
            self.tried.lock().unwrap().push(source.mime_type.clone());
            if source.mime_type == self.accepts {
                Ok(())
            } else if source.mime_type == "network/down" {
                Err(LoadFailure::Network("unreachable".into()))
            } else {
                Err(LoadFailure::UnsupportedFormat)
            }
        }
    }

    fn plan(mimes: &[&str]) -> LoadPlan {
        LoadPlan {
            ticket: LoadTicket {
                generation: 1,
                video_id: VideoID::new(),
            },
            sources: mimes
                .iter()
                .map(|mime| MediaSource::new(format!("/media/{mime}"), *mime))
                .collect(),
            start: 0,
        }
    }

    #[tokio::test]
    async fn falls_through_to_first_supported_source() {
        let loader = RecordingLoader {
            accepts: "video/mp4",
            ..Default::default()
        };
        let report = plan(&["video/webm", "video/mp4", "video/ogg"])
            .run(&loader)
            .await;

        assert_eq!(report.result, Ok(1));
        let tried = loader.tried.lock().unwrap();
        assert_eq!(*tried, vec!["video/webm", "video/mp4"]);
    }

    #[tokio::test]
    async fn network_failure_stops_the_walk() {
        let loader = RecordingLoader {
            accepts: "video/mp4",
            ..Default::default()
        };
        let report = plan(&["network/down", "video/mp4"]).run(&loader).await;

        let failure = report.result.unwrap_err();
        assert_eq!(failure.index, Some(0));
        assert!(matches!(failure.failure, LoadFailure::Network(_)));
        assert_eq!(loader.tried.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_candidate_list_is_unsupported() {
        let loader = RecordingLoader::default();
        let report = plan(&[]).run(&loader).await;
        assert_eq!(
            report.result,
            Err(LoadAttemptFailure {
                index: None,
                failure: LoadFailure::UnsupportedFormat,
            })
        );
    }
}
