use std::time::Duration;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ContentApi;
use crate::content::{Cursor, PostDocument, PostKey, PostPage, PostSummary, Section, TextBlock};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("content api request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("post not found")]
    NotFound,
    #[error("malformed content api response: {0}")]
    Malformed(String),
}

/// The two operation shapes the rest of the server depends on. The upstream
/// query language, auth and transport stay behind this trait.
pub trait ContentSource {
    async fn query_posts_page(&self, page_size: u32) -> Result<PostPage, SourceError>;
    async fn fetch_page_at(&self, cursor: &Cursor) -> Result<PostPage, SourceError>;
    async fn fetch_post_by_key(&self, key: &PostKey) -> Result<PostDocument, SourceError>;
}

// Begin: Wire format region --------
// Payload shapes of the headless API. Required fields are not optional here,
// so a payload missing them fails decoding and becomes Malformed.

#[derive(Deserialize)]
struct PageDto {
    results: Vec<SummaryDto>,
    next_page: Option<String>,
}

#[derive(Deserialize)]
struct SummaryDto {
    uid: String,
    first_publication_date: Option<String>,
    data: SummaryDataDto,
}

#[derive(Deserialize)]
struct SummaryDataDto {
    title: String,
    subtitle: String,
    author: String,
}

#[derive(Deserialize)]
struct DocumentDto {
    first_publication_date: Option<String>,
    data: DocumentDataDto,
}

#[derive(Deserialize)]
struct DocumentDataDto {
    title: String,
    banner: BannerDto,
    author: String,
    content: Vec<SectionDto>,
}

#[derive(Deserialize)]
struct BannerDto {
    url: String,
}

#[derive(Deserialize)]
struct SectionDto {
    heading: String,
    body: Vec<BlockDto>,
}

#[derive(Deserialize)]
struct BlockDto {
    text: String,
}
// End: Wire format region --------

fn parse_publication_date(raw: Option<&str>) -> Result<Option<NaiveDateTime>, SourceError> {
    match raw {
        None => Ok(None),
        Some(buf) => match DateTime::parse_from_rfc3339(buf) {
            Ok(date_time) => Ok(Some(date_time.naive_utc())),
            Err(e) => Err(SourceError::Malformed(format!("bad publication date {}: {}", buf, e))),
        },
    }
}

fn decode_page(body: &str) -> Result<PostPage, SourceError> {
    let dto: PageDto = serde_json::from_str(body)
        .map_err(|e| SourceError::Malformed(e.to_string()))?;

    let mut items = Vec::with_capacity(dto.results.len());
    for result in dto.results {
        let publication_date = parse_publication_date(result.first_publication_date.as_deref())?;
        items.push(PostSummary {
            key: PostKey(result.uid),
            publication_date,
            title: result.data.title,
            subtitle: result.data.subtitle,
            author: result.data.author,
        });
    }

    Ok(PostPage {
        items,
        next_cursor: dto.next_page.map(Cursor),
    })
}

fn decode_document(body: &str) -> Result<PostDocument, SourceError> {
    let dto: DocumentDto = serde_json::from_str(body)
        .map_err(|e| SourceError::Malformed(e.to_string()))?;

    let publication_date = parse_publication_date(dto.first_publication_date.as_deref())?;
    let sections = dto.data.content.into_iter().map(|section| Section {
        heading: section.heading,
        body: section.body.into_iter().map(|block| TextBlock(block.text)).collect(),
    }).collect();

    Ok(PostDocument {
        publication_date,
        title: dto.data.title,
        banner_url: dto.data.banner.url,
        author: dto.data.author,
        sections,
    })
}

pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpContentSource {
    pub fn new(api: &ContentApi) -> Result<HttpContentSource, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(HttpContentSource {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            access_token: api.access_token.clone(),
        })
    }

    async fn get_body(&self, url: &str, query: &[(&str, String)]) -> Result<String, SourceError> {
        let mut request = self.client.get(url);
        for (name, value) in query {
            request = request.query(&[(name, value)]);
        }
        if let Some(ref token) = self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl ContentSource for HttpContentSource {
    async fn query_posts_page(&self, page_size: u32) -> Result<PostPage, SourceError> {
        let url = format!("{}/posts", self.base_url);
        let body = self.get_body(&url, &[("page_size", page_size.to_string())]).await?;
        decode_page(&body)
    }

    async fn fetch_page_at(&self, cursor: &Cursor) -> Result<PostPage, SourceError> {
        // The cursor is a complete URL minted by the upstream; follow it as-is.
        let body = self.get_body(&cursor.0, &[]).await?;
        decode_page(&body)
    }

    async fn fetch_post_by_key(&self, key: &PostKey) -> Result<PostDocument, SourceError> {
        let url = format!("{}/posts/{}", self.base_url, key.0);
        let mut request = self.client.get(&url);
        if let Some(ref token) = self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        let body = response.error_for_status()?.text().await?;
        decode_document(&body)
    }
}
