//! Navigation types for moving between application views.

/// Specify the different application views.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Summary cards and charts
    Dashboard,
    /// Product table with CRUD shortcuts
    Products,
    /// Form for creating a new product
    CreateProduct,
    /// Form for editing the selected product
    EditProduct,
}
