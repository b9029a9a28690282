use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::Error as MongoError,
    options::ReturnDocument,
    Collection,
};

use crate::server::{
    data::document::FlightDocument,
    model::flight::{Flight, FlightParams},
};

/// Persistence operations for flight documents.
///
/// Handlers reach the store only through this trait, so the process entry point
/// decides which implementation backs the API.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Inserts a new flight and returns it with its generated identifier.
    async fn insert(&self, params: FlightParams) -> Result<Flight, MongoError>;

    /// Returns every flight in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Flight>, MongoError>;

    /// Gets a flight by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Flight>, MongoError>;

    /// Overwrites flight code and passengers, keeping the identifier.
    ///
    /// Returns the flight as stored after the write, or `None` when nothing matched.
    async fn replace(&self, id: ObjectId, params: FlightParams)
        -> Result<Option<Flight>, MongoError>;

    /// Deletes a flight, returning whether a document was removed.
    async fn delete(&self, id: ObjectId) -> Result<bool, MongoError>;
}

/// MongoDB-backed flight store over a single collection.
#[derive(Clone)]
pub struct FlightRepository {
    collection: Collection<FlightDocument>,
}

impl FlightRepository {
    pub fn new(collection: Collection<FlightDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl FlightStore for FlightRepository {
    async fn insert(&self, params: FlightParams) -> Result<Flight, MongoError> {
        // The driver would assign the same kind of id client-side if `_id` were
        // omitted; assigning it here avoids reading the document back.
        let document = params.into_document(ObjectId::new());

        self.collection.insert_one(&document).await?;

        Ok(Flight::from_document(document))
    }

    async fn find_all(&self) -> Result<Vec<Flight>, MongoError> {
        let documents: Vec<FlightDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(Flight::from_document).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Flight>, MongoError> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(document.map(Flight::from_document))
    }

    async fn replace(
        &self,
        id: ObjectId,
        params: FlightParams,
    ) -> Result<Option<Flight>, MongoError> {
        let replacement = params.into_document(id);

        let document = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &replacement)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(document.map(Flight::from_document))
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, MongoError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count > 0)
    }
}
