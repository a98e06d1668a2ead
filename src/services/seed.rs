use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;

use crate::{
    configs::MESSAGES_COLLECTION,
    dbs::mongo::{MongoDB, models::message::Message},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStage {
    Start,
    DatabaseSelected,
    CollectionCreated,
    DocumentInserted,
}

impl SeedStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedStage::Start => "start",
            SeedStage::DatabaseSelected => "database-selected",
            SeedStage::CollectionCreated => "collection-created",
            SeedStage::DocumentInserted => "document-inserted",
        }
    }
}

impl fmt::Display for SeedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SeedReport {
    pub database: String,
    pub collection: &'static str,
    pub message: Message,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct SeedService;

impl SeedService {
    /// Creates the `messages` collection and inserts the welcome document.
    ///
    /// `db` is already bound to the target database. Errors from the driver
    /// are returned as-is and nothing is retried, so a run that fails after
    /// creating the collection leaves it in place.
    pub async fn run(db: &MongoDB) -> anyhow::Result<SeedReport> {
        // Matches the millisecond precision of the stored timestamp.
        let started_at = Utc::now().trunc_subsecs(3);
        let database = db.database_name().to_string();
        tracing::info!(stage = %SeedStage::Start, database = %database, "seeding");
        tracing::info!(stage = %SeedStage::DatabaseSelected, database = %database, "database selected");

        db.create_collection(MESSAGES_COLLECTION).await?;
        tracing::info!(
            stage = %SeedStage::CollectionCreated,
            database = %database,
            collection = MESSAGES_COLLECTION,
            "collection created"
        );

        let message = Message::welcome(Utc::now());
        db.messages.insert_one(message.clone()).await?;
        tracing::info!(
            stage = %SeedStage::DocumentInserted,
            database = %database,
            collection = MESSAGES_COLLECTION,
            sender = %message.sender,
            "seed document inserted"
        );

        Ok(SeedReport {
            database,
            collection: MESSAGES_COLLECTION,
            message,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
