use std::time::Instant;

use async_trait::async_trait;

use crate::core::{
    models::Character,
    MortydexError,
};

pub mod types;

use types::CharacterPage;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// A paginated supplier of character pages. The HTTP client is the real
/// implementation; tests drive the walk with in-memory sources.
#[async_trait]
pub trait CharacterSource {
    fn first_page_url(&self) -> String;

    async fn fetch_page(&self, url: &str) -> Result<CharacterPage, MortydexError>;
}

pub struct CharacterApi {
    client: reqwest::Client,
    base_url: String,
}

impl CharacterApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { client: reqwest::Client::new(), base_url }
    }

    /// Reuse an existing client (connection pooling across api instances).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Character>, MortydexError> {
        fetch_all_characters(self).await
    }
}

impl Default for CharacterApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterSource for CharacterApi {
    fn first_page_url(&self) -> String {
        format!("{}/character", self.base_url)
    }

    async fn fetch_page(&self, url: &str) -> Result<CharacterPage, MortydexError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MortydexError::HttpStatus { status, url: url.to_string() });
        }

        // Decode from text so shape mismatches surface as JSON errors
        let body = response.text().await?;
        let page: CharacterPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}

/// Walk the collection to exhaustion by following `info.next`, in order.
/// Any page failing aborts the whole walk; the accumulator is discarded and
/// the caller sees total success or total failure, never a partial list.
pub async fn fetch_all_characters<S>(source: &S) -> Result<Vec<Character>, MortydexError>
where
    S: CharacterSource + ?Sized,
{
    let start = Instant::now();

    let mut characters: Vec<Character> = Vec::new();
    let mut next_page = Some(source.first_page_url());
    let mut pages: usize = 0;

    while let Some(url) = next_page {
        let page = source.fetch_page(&url).await?;
        pages += 1;
        tracing::debug!(page = pages, results = page.results.len(), "Fetched character page");

        characters.extend(page.results.into_iter().map(Character::from));
        next_page = page.info.next;
    }

    tracing::info!(
        count = characters.len(),
        pages,
        elapsed_s = start.elapsed().as_secs_f32(),
        "Character walk complete"
    );

    Ok(characters)
}
