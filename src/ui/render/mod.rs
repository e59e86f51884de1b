mod all;
mod charts;
mod dashboard;
mod footer;
mod log;
mod main;
mod product_form;
mod products;

use super::*;

pub use all::all as render;
