//! Domain model for the product catalog editor: product records, drafts,
//! field-level validation, and the seed data the UI starts from.

pub mod domain;
pub mod error;
pub mod seed;
pub mod validation;

pub use domain::{parse_hex_rgb, Category, Product, ProductDraft, ProductId};
pub use error::{ColorParseError, PriceError};
pub use validation::{parse_price, validate_draft, Field, FieldErrors};
