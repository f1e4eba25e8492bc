use crate::api::{ApiClient, ApiError, Product};
use leptos::*;

/// Products shown in the table.
///
/// While a fetch is in flight the previous `items` stay in place; they are
/// only replaced once the request succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<Product>,
}

impl ListState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn settle(&mut self, result: Result<Vec<Product>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.error),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl DeleteState {
    pub fn begin(&mut self) {
        *self = Self {
            loading: true,
            ..Self::default()
        };
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) {
        *self = match result {
            Ok(()) => Self {
                success: true,
                ..Self::default()
            },
            Err(err) => Self {
                error: Some(err.error),
                ..Self::default()
            },
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    pub created: Option<Product>,
}

impl CreateState {
    pub fn begin(&mut self) {
        *self = Self {
            loading: true,
            ..Self::default()
        };
    }

    pub fn settle(&mut self, result: Result<Product, ApiError>) {
        *self = match result {
            Ok(product) => Self {
                success: true,
                created: Some(product),
                ..Self::default()
            },
            Err(err) => Self {
                error: Some(err.error),
                ..Self::default()
            },
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The draft product to open in the editor, once creation succeeded.
    pub fn created_product(&self) -> Option<&Product> {
        if self.success {
            self.created.as_ref()
        } else {
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProductStore {
    pub list: RwSignal<ListState>,
    pub delete: RwSignal<DeleteState>,
    pub create: RwSignal<CreateState>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            list: create_rw_signal(ListState::default()),
            delete: create_rw_signal(DeleteState::default()),
            create: create_rw_signal(CreateState::default()),
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ProductStoreProvider(children: Children) -> impl IntoView {
    provide_context(ProductStore::new());
    view! { <>{children()}</> }
}

pub fn use_product_store() -> ProductStore {
    match use_context::<ProductStore>() {
        Some(store) => store,
        None => {
            let store = ProductStore::new();
            provide_context(store);
            store
        }
    }
}

pub async fn fetch_product_list(
    api: &ApiClient,
    list: RwSignal<ListState>,
) -> Result<(), ApiError> {
    log::debug!("fetching product list");
    list.update(ListState::begin);
    let result = api.list_products().await;
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    if let Err(err) = &outcome {
        log::warn!("product list request failed: {}", err);
    }
    list.update(|state| state.settle(result));
    outcome
}

pub async fn delete_product(
    api: &ApiClient,
    product_id: String,
    delete: RwSignal<DeleteState>,
) -> Result<(), ApiError> {
    log::debug!("deleting product {}", product_id);
    delete.update(DeleteState::begin);
    let result = api.delete_product(&product_id).await;
    if let Err(err) = &result {
        log::warn!("deleting product {} failed: {}", product_id, err);
    }
    delete.update(|state| state.settle(result.clone()));
    result
}

pub async fn create_product(
    api: &ApiClient,
    create: RwSignal<CreateState>,
) -> Result<(), ApiError> {
    log::debug!("creating draft product");
    create.update(CreateState::begin);
    let result = api.create_product().await;
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    if let Err(err) = &outcome {
        log::warn!("product creation failed: {}", err);
    }
    create.update(|state| state.settle(result));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::product;

    #[test]
    fn list_begin_keeps_stale_items_and_clears_error() {
        let mut state = ListState {
            loading: false,
            error: Some("Network Error".into()),
            items: vec![product("1", "Pen", 10.0)],
        };
        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);

        state.settle(Ok(vec![]));
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn list_failure_keeps_previous_items() {
        let mut state = ListState {
            items: vec![product("1", "Pen", 10.0)],
            ..ListState::default()
        };
        state.begin();
        state.settle(Err(ApiError::network()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network Error"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn delete_slice_has_single_active_flag() {
        let mut state = DeleteState::default();
        state.settle(Err(ApiError::unknown("Not authorized")));
        state.begin();
        assert_eq!(
            state,
            DeleteState {
                loading: true,
                error: None,
                success: false
            }
        );
        state.settle(Ok(()));
        assert!(state.success && !state.loading && state.error.is_none());
        state.settle(Err(ApiError::unknown("Not authorized")));
        assert!(!state.success && !state.loading);
        assert_eq!(state.error.as_deref(), Some("Not authorized"));
    }

    #[test]
    fn create_slice_exposes_created_product_only_on_success() {
        let mut state = CreateState::default();
        state.begin();
        assert!(state.created_product().is_none());
        state.settle(Ok(product("p9", "Sample name", 0.0)));
        assert_eq!(state.created_product().map(|p| p.id.as_str()), Some("p9"));
        state.reset();
        assert_eq!(state, CreateState::default());

        state.settle(Err(ApiError::unknown("Not authorized as an admin")));
        assert!(state.created_product().is_none());
        assert_eq!(state.error.as_deref(), Some("Not authorized as an admin"));
    }
}
