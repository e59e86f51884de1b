use crate::platzi::{Platzi, ProductDraft, ProductPatch};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fixed user-facing reasons recorded in state when a list fetch fails.
/// These are displayed verbatim.
pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products.";
pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories.";
pub const LOAD_USERS_FAILED: &str = "Failed to load users.";

// Mutation failures are logged with these reasons but stay out of shared
// state; the error field is reserved for list fetches.
const ADD_PRODUCT_FAILED: &str = "Failed to add product.";
const UPDATE_PRODUCT_FAILED: &str = "Failed to update product.";
const DELETE_PRODUCT_FAILED: &str = "Failed to delete product.";

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    FetchProducts,
    FetchCategories,
    FetchUsers,
    /// Re-issue all list fetches.
    Refresh,
    CreateProduct {
        draft: ProductDraft,
    },
    UpdateProduct {
        id: i64,
        patch: ProductPatch,
    },
    DeleteProduct {
        id: i64,
    },
}

/// Specify struct for managing state with network events.
///
/// Events are handled one at a time off a single channel; each settled
/// request applies its state transition before the next event is processed.
/// Nothing sequences separately dispatched fetches against each other, so
/// whichever settles last wins.
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    platzi: &'a Platzi,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, platzi: &'a Platzi) -> Self {
        Handler { state, platzi }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchProducts => self.fetch_products().await,
            Event::FetchCategories => self.fetch_categories().await,
            Event::FetchUsers => self.fetch_users().await,
            Event::Refresh => self.refresh().await,
            Event::CreateProduct { draft } => self.create_product(draft).await,
            Event::UpdateProduct { id, patch } => self.update_product(id, patch).await,
            Event::DeleteProduct { id } => self.delete_product(id).await,
        }
    }

    /// Update state with the product collection.
    ///
    async fn fetch_products(&mut self) -> Result<()> {
        info!("Fetching products...");
        self.state.lock().await.list_fetch_started();
        match self.platzi.products().await {
            Ok(products) => {
                info!("Received {} products.", products.len());
                self.state.lock().await.set_products(products);
            }
            Err(e) => {
                error!("{} {}", LOAD_PRODUCTS_FAILED, e);
                self.state.lock().await.list_fetch_failed(LOAD_PRODUCTS_FAILED);
            }
        }
        Ok(())
    }

    /// Update state with the category collection.
    ///
    async fn fetch_categories(&mut self) -> Result<()> {
        info!("Fetching categories...");
        self.state.lock().await.list_fetch_started();
        match self.platzi.categories().await {
            Ok(categories) => {
                info!("Received {} categories.", categories.len());
                self.state.lock().await.set_categories(categories);
            }
            Err(e) => {
                error!("{} {}", LOAD_CATEGORIES_FAILED, e);
                self.state
                    .lock()
                    .await
                    .list_fetch_failed(LOAD_CATEGORIES_FAILED);
            }
        }
        Ok(())
    }

    /// Update state with the user count.
    ///
    async fn fetch_users(&mut self) -> Result<()> {
        info!("Fetching users...");
        self.state.lock().await.list_fetch_started();
        match self.platzi.users().await {
            Ok(users) => {
                info!("Received {} users.", users.len());
                self.state.lock().await.set_user_count(users.len());
            }
            Err(e) => {
                error!("{} {}", LOAD_USERS_FAILED, e);
                self.state.lock().await.list_fetch_failed(LOAD_USERS_FAILED);
            }
        }
        Ok(())
    }

    /// Re-issue all list fetches.
    ///
    async fn refresh(&mut self) -> Result<()> {
        self.fetch_products().await?;
        self.fetch_categories().await?;
        self.fetch_users().await
    }

    /// Create a product and append it to state on success.
    ///
    async fn create_product(&mut self, draft: ProductDraft) -> Result<()> {
        info!("Creating product '{}'...", draft.title);
        match self.platzi.create_product(&draft).await {
            Ok(product) => {
                info!("Created product {} ('{}').", product.id, product.title);
                self.state.lock().await.push_product(product);
            }
            Err(e) => error!("{} {}", ADD_PRODUCT_FAILED, e),
        }
        Ok(())
    }

    /// Update a product and reconcile it into state on success.
    ///
    async fn update_product(&mut self, id: i64, patch: ProductPatch) -> Result<()> {
        info!("Updating product {}...", id);
        match self.platzi.update_product(id, &patch).await {
            Ok(product) => {
                info!("Updated product {}.", product.id);
                self.state.lock().await.replace_product(product);
            }
            Err(e) => error!("{} {}", UPDATE_PRODUCT_FAILED, e),
        }
        Ok(())
    }

    /// Delete a product and drop it from state on success.
    ///
    async fn delete_product(&mut self, id: i64) -> Result<()> {
        info!("Deleting product {}...", id);
        match self.platzi.delete_product(id).await {
            Ok(id) => {
                info!("Deleted product {}.", id);
                self.state.lock().await.remove_product(id);
            }
            Err(e) => error!("{} {}", DELETE_PRODUCT_FAILED, e),
        }
        Ok(())
    }
}
