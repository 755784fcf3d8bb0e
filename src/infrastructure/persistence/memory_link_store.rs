//! In-memory implementation of the link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, ShortCodeData, TagActivity, timestamp_now};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

#[derive(Default)]
struct State {
    links: HashMap<String, Link>,
    tags: HashMap<String, Vec<TagActivity>>,
}

/// Process-local link store.
///
/// All reads and writes go through a single [`RwLock`]: readers share it,
/// writers hold it exclusively. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryLinkStore {
    state: RwLock<State>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        let mut state = self.state.write().await;

        match state.links.entry(link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(link.code)),
            Entry::Vacant(slot) => Ok(slot.insert(link).clone()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.state.read().await.links.get(code).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let state = self.state.read().await;

        let mut links: Vec<Link> = state.links.values().cloned().collect();
        links.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.code.cmp(&b.code))
        });
        Ok(links)
    }

    async fn update(&self, code: &str, link: Link) -> Result<Link, AppError> {
        let mut state = self.state.write().await;

        if link.code != code && state.links.contains_key(&link.code) {
            return Err(AppError::conflict(link.code));
        }

        // Counters and creation data stay as stored; `link` may be a stale read.
        let Some(mut stored) = state.links.remove(code) else {
            return Err(AppError::not_found(code));
        };
        stored.code = link.code;
        stored.custom_code = link.custom_code;
        stored.short_url = link.short_url;
        stored.original_url = link.original_url;
        stored.updated_at = link.updated_at;

        state.links.insert(stored.code.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, code: &str) -> Result<u64, AppError> {
        let removed = self.state.write().await.links.remove(code);
        Ok(u64::from(removed.is_some()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<u64, AppError> {
        let mut state = self.state.write().await;

        match state.links.get_mut(code) {
            Some(link) => {
                link.total_clicks += 1;
                link.updated_at = timestamp_now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn add_tag_activity(&self, data: &ShortCodeData) -> Result<u64, AppError> {
        let Some(tag) = &data.tag else {
            return Ok(0);
        };

        self.state
            .write()
            .await
            .tags
            .entry(tag.clone())
            .or_default()
            .push(TagActivity::new(data.code.clone(), timestamp_now()));
        Ok(1)
    }

    async fn find_tag_activity(&self, tag: &str) -> Result<Vec<TagActivity>, AppError> {
        Ok(self
            .state
            .read()
            .await
            .tags
            .get(tag)
            .cloned()
            .unwrap_or_default())
    }

    async fn code_in_use(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.state.read().await.links.contains_key(code))
    }
}
