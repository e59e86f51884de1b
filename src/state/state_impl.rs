use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::platzi::{Category, Product};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use rand::Rng;
use ratatui::widgets::ListState;

use super::form::ProductForm;
use super::navigation::View;

/// Houses data representative of application state.
///
/// The fetched collections are mutated only through the transition methods
/// below, driven by settled network requests. A list fetch follows the
/// pending/fulfilled/rejected lifecycle observable through `loading` and
/// `error`; mutations (create/update/delete) only react to success.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    products: Vec<Product>,
    categories: Vec<Category>,
    user_count: usize,
    loading: bool,
    error: Option<String>,
    spinner_index: usize,
    view_stack: Vec<View>,
    products_list_state: ListState,
    form: ProductForm,
    form_error: Option<String>,
    editing_product_id: Option<i64>,
    delete_confirmation: Option<i64>, // id of product pending deletion confirmation
    debug_mode: bool,
    monthly_purchases: Vec<u64>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            products: vec![],
            categories: vec![],
            user_count: 0,
            loading: false,
            error: None,
            spinner_index: 0,
            view_stack: vec![View::Dashboard],
            products_list_state: ListState::default(),
            form: ProductForm::default(),
            form_error: None,
            editing_product_id: None,
            delete_confirmation: None,
            debug_mode: false,
            monthly_purchases: synthesize_monthly_purchases(),
        }
    }
}

/// Fabricate a 12-month purchase series for the line chart, with seasonal
/// peaks in July and December. The series is generated once per run so the
/// chart is stable across frames.
///
fn synthesize_monthly_purchases() -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..12)
        .map(|month| {
            let base: u64 = if month == 6 || month == 11 { 300 } else { 200 };
            base + rng.gen_range(0..100)
        })
        .collect()
}

impl State {
    pub fn new(net_sender: NetworkEventSender) -> Self {
        State {
            net_sender: Some(net_sender),
            ..State::default()
        }
    }

    /// Send a network event for asynchronous processing.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(err) = sender.send(event) {
                error!("Failed to dispatch network event: {}", err);
            }
        }
    }

    /// Mark a list fetch as in flight. Any previous fetch error is cleared.
    ///
    pub fn list_fetch_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed list fetch with its user-facing reason.
    ///
    pub fn list_fetch_failed(&mut self, reason: &str) {
        self.loading = false;
        self.error = Some(reason.to_string());
    }

    /// Replace the product collection with a settled fetch payload.
    ///
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.clamp_product_selection();
    }

    /// Replace the category collection with a settled fetch payload.
    ///
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.loading = false;
    }

    /// Record the user count from a settled fetch payload.
    ///
    pub fn set_user_count(&mut self, count: usize) {
        self.user_count = count;
        self.loading = false;
    }

    /// Append a newly created product to the end of the collection.
    ///
    pub fn push_product(&mut self, product: Product) {
        self.products.push(product);
        self.clamp_product_selection();
    }

    /// Replace the first product whose id matches the payload. Unknown ids
    /// leave the collection unchanged.
    ///
    pub fn replace_product(&mut self, product: Product) {
        if let Some(index) = self.products.iter().position(|p| p.id == product.id) {
            self.products[index] = product;
        }
    }

    /// Remove the first product with the given id. Unknown ids leave the
    /// collection unchanged.
    ///
    pub fn remove_product(&mut self, id: i64) {
        if let Some(index) = self.products.iter().position(|p| p.id == id) {
            self.products.remove(index);
            self.clamp_product_selection();
        }
    }

    fn clamp_product_selection(&mut self) {
        match self.products_list_state.selected() {
            _ if self.products.is_empty() => self.products_list_state.select(None),
            None => self.products_list_state.select(Some(0)),
            Some(selected) if selected >= self.products.len() => self
                .products_list_state
                .select(Some(self.products.len() - 1)),
            Some(_) => {}
        }
    }

    pub fn get_products(&self) -> &Vec<Product> {
        &self.products
    }

    pub fn get_categories(&self) -> &Vec<Category> {
        &self.categories
    }

    pub fn user_count(&self) -> usize {
        self.user_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get_monthly_purchases(&self) -> &[u64] {
        &self.monthly_purchases
    }

    pub fn get_products_list_state(&mut self) -> &mut ListState {
        &mut self.products_list_state
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products_list_state
            .selected()
            .and_then(|index| self.products.get(index))
    }

    /// Move product selection down, wrapping at the end.
    ///
    pub fn next_product(&mut self) {
        if self.products.is_empty() {
            return;
        }
        let next = match self.products_list_state.selected() {
            Some(index) => (index + 1) % self.products.len(),
            None => 0,
        };
        self.products_list_state.select(Some(next));
    }

    /// Move product selection up, wrapping at the start.
    ///
    pub fn previous_product(&mut self) {
        if self.products.is_empty() {
            return;
        }
        let previous = match self.products_list_state.selected() {
            Some(0) | None => self.products.len() - 1,
            Some(index) => index - 1,
        };
        self.products_list_state.select(Some(previous));
    }

    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Dashboard)
    }

    pub fn navigate_to(&mut self, view: View) {
        self.view_stack.push(view);
    }

    /// Pop the current view, keeping at least the dashboard on the stack.
    ///
    pub fn navigate_back(&mut self) {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        self.form_error = None;
        &mut self.form
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn set_form_error(&mut self, message: String) {
        self.form_error = Some(message);
    }

    pub fn editing_product_id(&self) -> Option<i64> {
        self.editing_product_id
    }

    /// Open an empty form for creating a product.
    ///
    pub fn open_create_form(&mut self) {
        self.form = ProductForm::default();
        self.form_error = None;
        self.editing_product_id = None;
        self.navigate_to(View::CreateProduct);
    }

    /// Open a form prefilled from the selected product. Does nothing when no
    /// product is selected.
    ///
    pub fn open_edit_form(&mut self) {
        let Some(product) = self.selected_product().cloned() else {
            return;
        };
        self.form = ProductForm::from_product(&product);
        self.form_error = None;
        self.editing_product_id = Some(product.id);
        self.navigate_to(View::EditProduct);
    }

    pub fn close_form(&mut self) {
        self.form_error = None;
        self.editing_product_id = None;
        self.navigate_back();
    }

    pub fn delete_confirmation(&self) -> Option<i64> {
        self.delete_confirmation
    }

    /// Ask for confirmation before deleting the selected product.
    ///
    pub fn request_delete_confirmation(&mut self) {
        self.delete_confirmation = self.selected_product().map(|p| p.id);
    }

    /// Confirm the pending deletion and dispatch the request.
    ///
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.delete_confirmation.take() {
            self.dispatch(NetworkEvent::DeleteProduct { id });
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = None;
    }

    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }
}
