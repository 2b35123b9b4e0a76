#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod program;
mod program_store;
mod progression;
mod selector;
mod tier;
mod training_session;
mod validator;
mod workout;

pub use catalog::{
    CATALOG_VERSION, Catalog, CatalogError, Category, CategoryError, EMERGENCY_TEMPLATE,
    SessionTemplate, TemplateID,
};
pub use program::*;
pub use program_store::*;
pub use progression::*;
pub use selector::*;
pub use tier::*;
pub use training_session::*;
pub use validator::*;
pub use workout::*;
