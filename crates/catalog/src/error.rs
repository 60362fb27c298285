use thiserror::Error;

/// Why a price string failed to parse. The validator flattens this into a
/// per-field message; the UI uses it when formatting committed prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is required")]
    Empty,
    #[error("price is not a number: {raw}")]
    NotANumber { raw: String },
    #[error("price must not be negative: {raw}")]
    Negative { raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color tag {tag} is missing the leading '#'")]
    MissingHash { tag: String },
    #[error("color tag {tag} must be exactly #RRGGBB")]
    BadLength { tag: String },
    #[error("color tag {tag} contains a non-hex digit")]
    BadDigit { tag: String },
}
