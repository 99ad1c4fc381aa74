use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Category, QuestionRecord},
};

/// What to fetch from the content store for one quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionQuery {
    pub category: Category,
    pub exam_type: Option<String>,
    pub test_types: Option<Vec<String>>,
    pub test_number: Option<u32>,
}

impl QuestionQuery {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            exam_type: None,
            test_types: None,
            test_number: None,
        }
    }

    pub fn to_filter(&self) -> Document {
        let mut filter = doc! { "category": self.category.as_str() };

        if let Some(exam_type) = &self.exam_type {
            filter.insert("exam_type", exam_type.as_str());
        }
        if let Some(test_types) = self.test_types.as_ref().filter(|t| !t.is_empty()) {
            filter.insert("test_type", doc! { "$in": test_types.clone() });
        }
        if let Some(number) = self.test_number {
            filter.insert("test_number", i64::from(number));
        }

        filter
    }
}

/// Read side of the content store. Records come back in the store's native
/// (creation) order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn fetch_questions(&self, query: &QuestionQuery) -> AppResult<Vec<QuestionRecord>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<QuestionRecord>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let selection_index = IndexModel::builder()
            .keys(doc! { "category": 1, "exam_type": 1, "test_number": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_exam_test".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(selection_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn fetch_questions(&self, query: &QuestionQuery) -> AppResult<Vec<QuestionRecord>> {
        let records: Vec<QuestionRecord> = self
            .collection
            .find(query.to_filter())
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        log::debug!(
            "Fetched {} questions for category={} exam_type={:?} test_number={:?}",
            records.len(),
            query.category,
            query.exam_type,
            query.test_number
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_only_contains_requested_fields() {
        let filter = QuestionQuery::for_category(Category::Logique).to_filter();
        assert_eq!(filter, doc! { "category": "logique" });
    }

    #[test]
    fn filter_includes_exam_type_test_types_and_number() {
        let query = QuestionQuery {
            category: Category::Francais,
            exam_type: Some("ena".to_string()),
            test_types: Some(vec!["practice".to_string(), "exam".to_string()]),
            test_number: Some(3),
        };

        let filter = query.to_filter();

        assert_eq!(filter.get_str("category").expect("category"), "francais");
        assert_eq!(filter.get_str("exam_type").expect("exam_type"), "ena");
        assert_eq!(filter.get_i64("test_number").expect("test_number"), 3);
        let in_clause = filter.get_document("test_type").expect("test_type");
        assert_eq!(in_clause.get_array("$in").expect("$in").len(), 2);
    }

    #[test]
    fn empty_test_type_list_is_ignored() {
        let mut query = QuestionQuery::for_category(Category::Anglais);
        query.test_types = Some(vec![]);
        assert!(!query.to_filter().contains_key("test_type"));
    }
}
