use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::SessionState,
};

/// Key-value store for paused quizzes. Only the session service talks to it.
///
/// `save` replaces the whole document and is only used when a session is
/// created. Later changes go through the targeted updates, which leave the
/// other answers as stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStateStore: Send + Sync {
    async fn load(&self, session_key: &str) -> AppResult<Option<SessionState>>;
    async fn save(&self, state: &SessionState) -> AppResult<()>;

    /// Sets one answer and moves the cursor up to `current_index` if it is
    /// behind. Returns the stored session, or `None` if it is gone.
    async fn record_answer(
        &self,
        session_key: &str,
        question_id: &str,
        answer: &str,
        current_index: u32,
    ) -> AppResult<Option<SessionState>>;

    /// Overwrites the cursor and timer, leaving answers alone.
    async fn save_progress(
        &self,
        session_key: &str,
        current_index: Option<u32>,
        remaining_seconds: Option<u32>,
    ) -> AppResult<Option<SessionState>>;

    async fn clear(&self, session_key: &str) -> AppResult<()>;
}

/// `updated_at` in the same representation serde gives the whole document.
fn now_bson() -> AppResult<Bson> {
    to_bson(&Utc::now()).map_err(|e| AppError::DatabaseError(e.to_string()))
}

pub struct MongoSessionStateStore {
    collection: Collection<SessionState>,
}

impl MongoSessionStateStore {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for session_states collection");

        let key_index = IndexModel::builder()
            .keys(doc! { "session_key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("session_key_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(key_index).await?;

        log::info!("Successfully created indexes for session_states collection");
        Ok(())
    }
}

#[async_trait]
impl SessionStateStore for MongoSessionStateStore {
    async fn load(&self, session_key: &str) -> AppResult<Option<SessionState>> {
        let state = self
            .collection
            .find_one(doc! { "session_key": session_key })
            .await?;
        Ok(state)
    }

    async fn save(&self, state: &SessionState) -> AppResult<()> {
        self.collection
            .replace_one(doc! { "session_key": state.session_key.as_str() }, state)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn record_answer(
        &self,
        session_key: &str,
        question_id: &str,
        answer: &str,
        current_index: u32,
    ) -> AppResult<Option<SessionState>> {
        // Pipeline form: question ids and answers are taken as literals, never
        // as field paths or operators.
        let update = vec![doc! {
            "$set": {
                "answers": {
                    "$setField": {
                        "field": { "$literal": question_id },
                        "input": { "$ifNull": ["$answers", {}] },
                        "value": { "$literal": answer },
                    }
                },
                "current_index": { "$max": ["$current_index", i64::from(current_index)] },
                "updated_at": now_bson()?,
            }
        }];

        let state = self
            .collection
            .find_one_and_update(doc! { "session_key": session_key }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(state)
    }

    async fn save_progress(
        &self,
        session_key: &str,
        current_index: Option<u32>,
        remaining_seconds: Option<u32>,
    ) -> AppResult<Option<SessionState>> {
        let mut fields = doc! { "updated_at": now_bson()? };
        if let Some(index) = current_index {
            fields.insert("current_index", i64::from(index));
        }
        if let Some(seconds) = remaining_seconds {
            fields.insert("remaining_seconds", i64::from(seconds));
        }

        let state = self
            .collection
            .find_one_and_update(doc! { "session_key": session_key }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(state)
    }

    async fn clear(&self, session_key: &str) -> AppResult<()> {
        self.collection
            .delete_one(doc! { "session_key": session_key })
            .await?;
        Ok(())
    }
}
