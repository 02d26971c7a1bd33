//! Client for interacting with the Product actor.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::instrument;

/// Client for the Product catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        name: impl Into<String> + std::fmt::Debug,
        price: Decimal,
    ) -> Result<ProductId, ProductError> {
        self.inner
            .create(ProductCreate {
                name: name.into(),
                price,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_price(&self, id: ProductId, price: Decimal) -> Result<Product, ProductError> {
        self.update_product(
            id,
            ProductUpdate {
                name: None,
                price: Some(price),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self.find(()).await?;
        products.sort_by_key(|product| product.id);
        Ok(products)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(domain) => *domain,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(msg) => ProductError::NotFound(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
