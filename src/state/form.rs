//! Form editing state types.
//!
//! This module contains the product form model used by the create and edit
//! views, including field navigation and validation into request bodies.

use super::error::StateError;
use crate::platzi::{Product, ProductDraft, ProductPatch};
use tui_textarea::TextArea;

/// Specifying which form field currently has input focus.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Title,
    Price,
    CategoryId,
    ImageUrl,
    Description,
}

impl FormField {
    /// Return the next field in tab order, wrapping at the end.
    ///
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Price,
            FormField::Price => FormField::CategoryId,
            FormField::CategoryId => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    /// Return the previous field in tab order, wrapping at the start.
    ///
    pub fn previous(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Price => FormField::Title,
            FormField::CategoryId => FormField::Price,
            FormField::ImageUrl => FormField::CategoryId,
            FormField::Description => FormField::ImageUrl,
        }
    }
}

/// Houses the input values of the product create/edit form. Numeric fields
/// are kept as raw strings while typing and validated on submit.
///
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub category_id: String,
    pub image_url: String,
    pub description: TextArea<'static>,
    pub active_field: FormField,
}

impl Default for ProductForm {
    fn default() -> ProductForm {
        ProductForm {
            title: String::new(),
            price: String::new(),
            category_id: String::new(),
            image_url: String::new(),
            description: TextArea::default(),
            active_field: FormField::Title,
        }
    }
}

impl ProductForm {
    /// Return a form prefilled from an existing product for editing.
    ///
    pub fn from_product(product: &Product) -> ProductForm {
        let mut description = TextArea::default();
        description.insert_str(&product.description);
        ProductForm {
            title: product.title.clone(),
            price: product.price.to_string(),
            category_id: product.category.id.to_string(),
            image_url: product.images.first().cloned().unwrap_or_default(),
            description,
            active_field: FormField::Title,
        }
    }

    /// Move input focus to the next field.
    ///
    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Move input focus to the previous field.
    ///
    pub fn previous_field(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Append a character to the active single-line field. The description
    /// textarea receives key input directly in the terminal event handler.
    ///
    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::Title => self.title.push(c),
            FormField::Price => self.price.push(c),
            FormField::CategoryId => self.category_id.push(c),
            FormField::ImageUrl => self.image_url.push(c),
            FormField::Description => {}
        }
    }

    /// Remove the last character from the active single-line field.
    ///
    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Price => {
                self.price.pop();
            }
            FormField::CategoryId => {
                self.category_id.pop();
            }
            FormField::ImageUrl => {
                self.image_url.pop();
            }
            FormField::Description => {}
        }
    }

    fn parsed_price(&self) -> Result<f64, StateError> {
        self.price
            .trim()
            .parse::<f64>()
            .map_err(|_| StateError::InvalidPrice(self.price.clone()))
    }

    fn parsed_category_id(&self) -> Result<i64, StateError> {
        self.category_id
            .trim()
            .parse::<i64>()
            .map_err(|_| StateError::InvalidCategory(self.category_id.clone()))
    }

    fn description_text(&self) -> String {
        self.description.lines().join("\n")
    }

    /// Validate the form into a creation request body.
    ///
    pub fn to_draft(&self) -> Result<ProductDraft, StateError> {
        if self.title.trim().is_empty() {
            return Err(StateError::TitleRequired);
        }
        let images = if self.image_url.trim().is_empty() {
            vec![]
        } else {
            vec![self.image_url.trim().to_string()]
        };
        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            price: self.parsed_price()?,
            description: self.description_text(),
            category_id: self.parsed_category_id()?,
            images,
        })
    }

    /// Validate the form into an update request body. The full field set is
    /// sent; the server treats the body as partial either way.
    ///
    pub fn to_patch(&self) -> Result<ProductPatch, StateError> {
        let draft = self.to_draft()?;
        Ok(ProductPatch {
            title: Some(draft.title),
            price: Some(draft.price),
            description: Some(draft.description),
            category_id: Some(draft.category_id),
            images: Some(draft.images),
        })
    }
}
