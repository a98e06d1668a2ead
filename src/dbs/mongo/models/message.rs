use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

pub const WELCOME_CONTENT: &str = "Welcome to BackendChat!";
pub const SYSTEM_SENDER: &str = "System";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub content: String,
    pub sender: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Seed document for a fresh `messages` collection.
    ///
    /// BSON datetimes keep milliseconds only, so `now` is truncated up front
    /// to keep the in-process value equal to the stored one.
    pub fn welcome(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            content: WELCOME_CONTENT.to_string(),
            sender: SYSTEM_SENDER.to_string(),
            timestamp: now.trunc_subsecs(3),
        }
    }
}
