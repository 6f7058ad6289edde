use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use crate::{
    api::{
        fetch_all_characters,
        CharacterSource,
    },
    core::models::Character,
};

/// Result of one background walk, tagged with the store generation that
/// started it so stale outcomes can be discarded on apply.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Character>, String>,
}

/// Runs collection walks off the presentation thread and delivers their
/// outcomes through a channel the composition root drains each frame.
pub struct FetchManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<FetchOutcome>,
    sender: mpsc::Sender<FetchOutcome>,
}

impl FetchManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create FetchManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    /// Non-blocking drain of completed fetches; apply each with
    /// `CharacterStore::finish_fetch`.
    pub fn poll_outcomes(&mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();

        while let Ok(outcome) = self.receiver.try_recv() {
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Start a full collection walk for the fetch that `generation` tags
    /// (obtained from `CharacterStore::begin_fetch`). Errors are collapsed
    /// to their display text here; nothing past this boundary sees the
    /// structured error.
    pub fn fetch_characters<S>(&self, source: S, generation: u64)
    where
        S: CharacterSource + Send + Sync + 'static,
    {
        let (sender, runtime) = (self.sender.clone(), self.runtime.clone());

        thread::spawn(move || {
            let result = runtime
                .block_on(async { fetch_all_characters(&source).await })
                .map_err(|e| e.to_string());

            let _ = sender.send(FetchOutcome { generation, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        api::types::{
            ApiCharacter,
            CharacterPage,
            PageInfo,
        },
        core::MortydexError,
        store::CharacterStore,
    };

    struct SinglePage {
        fail: bool,
    }

    #[async_trait]
    impl CharacterSource for SinglePage {
        fn first_page_url(&self) -> String {
            "https://example.test/api/character".to_string()
        }

        async fn fetch_page(&self, url: &str) -> Result<CharacterPage, MortydexError> {
            if self.fail {
                return Err(MortydexError::Custom(format!("Failed to fetch {}", url)));
            }
            Ok(CharacterPage {
                info: PageInfo { count: 1, pages: 1, next: None, prev: None },
                results: vec![ApiCharacter {
                    id: 1,
                    name: "Rick Sanchez".to_string(),
                    image: "https://example.test/avatar/1.jpeg".to_string(),
                    episode: vec!["https://example.test/episode/1".to_string()],
                }],
            })
        }
    }

    fn wait_for_outcomes(manager: &mut FetchManager) -> Vec<FetchOutcome> {
        for _ in 0..200 {
            let outcomes = manager.poll_outcomes();
            if !outcomes.is_empty() {
                return outcomes;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("No fetch outcome arrived");
    }

    #[test]
    fn test_outcome_is_delivered_and_applied() {
        let mut store = CharacterStore::new();
        let mut manager = FetchManager::new();

        let generation = store.begin_fetch();
        manager.fetch_characters(SinglePage { fail: false }, generation);

        for outcome in wait_for_outcomes(&mut manager) {
            store.finish_fetch(outcome.generation, outcome.result);
        }

        assert!(!store.is_loading());
        assert_eq!(store.characters().len(), 1);
        assert_eq!(store.characters()[0].name, "Rick Sanchez");
    }

    #[test]
    fn test_failure_is_collapsed_to_message() {
        let mut store = CharacterStore::new();
        let mut manager = FetchManager::new();

        let generation = store.begin_fetch();
        manager.fetch_characters(SinglePage { fail: true }, generation);

        for outcome in wait_for_outcomes(&mut manager) {
            store.finish_fetch(outcome.generation, outcome.result);
        }

        assert!(!store.is_loading());
        assert!(store.characters().is_empty());
        assert!(store.error().unwrap().contains("Failed to fetch"));
    }
}
