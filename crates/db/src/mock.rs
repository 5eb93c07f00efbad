use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    models::{DbBusiness, DbService},
    store::BookingStore,
};

// Mock store for testing
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn create_business(
            &self,
            name: String,
            timezone: String,
            hours: Option<serde_json::Value>,
        ) -> eyre::Result<DbBusiness>;

        async fn get_business(&self, id: Uuid) -> eyre::Result<Option<DbBusiness>>;

        async fn update_business_hours(
            &self,
            id: Uuid,
            hours: serde_json::Value,
        ) -> eyre::Result<Option<DbBusiness>>;

        async fn create_service(
            &self,
            business_id: Uuid,
            name: String,
            duration_minutes: i32,
        ) -> eyre::Result<DbService>;

        async fn get_service(&self, id: Uuid) -> eyre::Result<Option<DbService>>;

        async fn list_services(&self, business_id: Uuid) -> eyre::Result<Vec<DbService>>;
    }
}
