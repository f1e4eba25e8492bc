use crate::{
    api::{ApiClient, ApiError},
    state::products::{self, CreateState, DeleteState, ListState},
};
use leptos::RwSignal;
use std::rc::Rc;

/// Runs the product requests for this screen, settling the matching store slice.
#[derive(Clone)]
pub struct ProductListRepository {
    client: Rc<ApiClient>,
}

impl Default for ProductListRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self, list: RwSignal<ListState>) -> Result<(), ApiError> {
        products::fetch_product_list(&self.client, list).await
    }

    pub async fn create(&self, create: RwSignal<CreateState>) -> Result<(), ApiError> {
        products::create_product(&self.client, create).await
    }

    pub async fn delete(
        &self,
        product_id: String,
        delete: RwSignal<DeleteState>,
    ) -> Result<(), ApiError> {
        products::delete_product(&self.client, product_id, delete).await
    }
}
