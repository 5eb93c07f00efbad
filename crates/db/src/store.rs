//! Persistence seam used by the API.
//!
//! [`PgStore`] delegates to the free functions in [`crate::repositories`];
//! tests substitute [`crate::mock::MockBookingStore`].

use async_trait::async_trait;
use eyre::Result;
use uuid::Uuid;

use crate::{
    models::{DbBusiness, DbService},
    repositories::{business, service},
    DbPool,
};

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create_business(
        &self,
        name: String,
        timezone: String,
        hours: Option<serde_json::Value>,
    ) -> Result<DbBusiness>;

    async fn get_business(&self, id: Uuid) -> Result<Option<DbBusiness>>;

    async fn update_business_hours(
        &self,
        id: Uuid,
        hours: serde_json::Value,
    ) -> Result<Option<DbBusiness>>;

    async fn create_service(
        &self,
        business_id: Uuid,
        name: String,
        duration_minutes: i32,
    ) -> Result<DbService>;

    async fn get_service(&self, id: Uuid) -> Result<Option<DbService>>;

    async fn list_services(&self, business_id: Uuid) -> Result<Vec<DbService>>;
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn create_business(
        &self,
        name: String,
        timezone: String,
        hours: Option<serde_json::Value>,
    ) -> Result<DbBusiness> {
        business::create_business(&self.pool, &name, &timezone, hours).await
    }

    async fn get_business(&self, id: Uuid) -> Result<Option<DbBusiness>> {
        business::get_business_by_id(&self.pool, id).await
    }

    async fn update_business_hours(
        &self,
        id: Uuid,
        hours: serde_json::Value,
    ) -> Result<Option<DbBusiness>> {
        business::update_business_hours(&self.pool, id, hours).await
    }

    async fn create_service(
        &self,
        business_id: Uuid,
        name: String,
        duration_minutes: i32,
    ) -> Result<DbService> {
        service::create_service(&self.pool, business_id, &name, duration_minutes).await
    }

    async fn get_service(&self, id: Uuid) -> Result<Option<DbService>> {
        service::get_service_by_id(&self.pool, id).await
    }

    async fn list_services(&self, business_id: Uuid) -> Result<Vec<DbService>> {
        service::get_services_by_business_id(&self.pool, business_id).await
    }
}
