use anyhow::{Result, anyhow, bail};
use futures::Stream;
use mongodb::bson::{Document, to_document};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashSet;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use tokio::sync::RwLock;

use super::models::message::Message;
use crate::configs::DATABASE;

const UNAVAILABLE: &str = "Server selection timeout: No available servers";

#[derive(Clone)]
pub struct MockCollection<T> {
    data: Arc<RwLock<Vec<T>>>,
    unavailable: Arc<AtomicBool>,
}

impl<T> Default for MockCollection<T> {
    fn default() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl<T> MockCollection<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, state: bool) {
        self.unavailable.store(state, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(anyhow!(UNAVAILABLE));
        }
        Ok(())
    }

    pub async fn insert_one(&self, doc: T) -> Result<()> {
        self.check_available()?;
        self.data.write().await.push(doc);
        Ok(())
    }

    pub async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        self.check_available()?;
        let data = self.data.read().await;
        for item in data.iter() {
            let doc = to_document(item)?;
            if matches(&doc, &filter) {
                return Ok(Some(item.clone()));
            }
        }
        Ok(None)
    }

    pub async fn find(&self, filter: Document) -> Result<MockCursor<T>> {
        self.check_available()?;
        let data = self.data.read().await;
        let mut vec = Vec::new();
        for item in data.iter() {
            let doc = to_document(item)?;
            if matches(&doc, &filter) {
                vec.push(item.clone());
            }
        }
        Ok(MockCursor { data: vec, index: 0 })
    }

    pub async fn count_documents(&self, filter: Document) -> Result<u64> {
        self.check_available()?;
        let data = self.data.read().await;
        let mut count = 0;
        for item in data.iter() {
            if matches(&to_document(item)?, &filter) {
                count += 1;
            }
        }
        Ok(count)
    }
}

pub struct MockCursor<T> {
    data: Vec<T>,
    index: usize,
}

impl<T> Stream for MockCursor<T>
where
    T: Clone + Unpin,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.index >= self.data.len() {
            return Poll::Ready(None);
        }
        let item = self.data[self.index].clone();
        self.index += 1;
        Poll::Ready(Some(Ok(item)))
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(k, v)| doc.get(k) == Some(v))
}

/// In-memory stand-in for the driver-backed database handle.
///
/// Collection creation mirrors the server: a second `create` for the same
/// name fails with `NamespaceExists`.
#[derive(Clone)]
pub struct MongoDB {
    collections: Arc<RwLock<HashSet<String>>>,
    unavailable: Arc<AtomicBool>,
    pub messages: MockCollection<Message>,
}

impl MongoDB {
    pub async fn init() -> Result<Self> {
        Ok(Self {
            collections: Arc::new(RwLock::new(HashSet::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            messages: MockCollection::new(),
        })
    }

    pub async fn create_collection(&self, name: &str) -> Result<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            bail!(UNAVAILABLE);
        }
        let mut collections = self.collections.write().await;
        if !collections.insert(name.to_string()) {
            bail!(
                "Command failed with error 48 (NamespaceExists): 'Collection {DATABASE}.{name} already exists.'"
            );
        }
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        DATABASE
    }

    pub async fn has_collection(&self, name: &str) -> bool {
        self.collections.read().await.contains(name)
    }

    /// Simulates losing the server for every subsequent operation.
    pub fn set_unavailable(&self, state: bool) {
        self.unavailable.store(state, Ordering::Relaxed);
        self.messages.set_unavailable(state);
    }
}
