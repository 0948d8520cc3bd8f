//! Schema enums.
//!
//! Unrecognized wire values map to the designated `Unknown` variant
//! instead of failing; enums are more forward-compatible than object
//! types, so a server that starts returning a new value must not break
//! existing clients.

/// Currency of a shop or money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    /// A value this client version does not recognize.
    Unknown,
}

impl CurrencyCode {
    /// Map a raw wire value, falling back to [`CurrencyCode::Unknown`].
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            "CAD" => Self::Cad,
            "AUD" => Self::Aud,
            "JPY" => Self::Jpy,
            _ => Self::Unknown,
        }
    }

    /// The wire identifier; the empty string for [`CurrencyCode::Unknown`].
    pub fn as_raw(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Jpy => "JPY",
            Self::Unknown => "",
        }
    }
}

/// Sort keys for product listings, rendered as raw argument identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSortKeys {
    Title,
    Price,
    BestSelling,
    CreatedAt,
    UpdatedAt,
    Id,
    Relevance,
    /// A value this client version does not recognize.
    Unknown,
}

impl ProductSortKeys {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "TITLE" => Self::Title,
            "PRICE" => Self::Price,
            "BEST_SELLING" => Self::BestSelling,
            "CREATED_AT" => Self::CreatedAt,
            "UPDATED_AT" => Self::UpdatedAt,
            "ID" => Self::Id,
            "RELEVANCE" => Self::Relevance,
            _ => Self::Unknown,
        }
    }

    pub fn as_raw(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Price => "PRICE",
            Self::BestSelling => "BEST_SELLING",
            Self::CreatedAt => "CREATED_AT",
            Self::UpdatedAt => "UPDATED_AT",
            Self::Id => "ID",
            Self::Relevance => "RELEVANCE",
            Self::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_maps_known_values() {
        assert_eq!(CurrencyCode::from_raw("USD"), CurrencyCode::Usd);
        assert_eq!(CurrencyCode::from_raw("JPY"), CurrencyCode::Jpy);
    }

    #[test]
    fn currency_code_unknown_value_is_not_an_error() {
        assert_eq!(CurrencyCode::from_raw("XTS"), CurrencyCode::Unknown);
        assert_eq!(CurrencyCode::from_raw(""), CurrencyCode::Unknown);
    }

    #[test]
    fn currency_code_raw_round_trips_known_variants() {
        for code in [
            CurrencyCode::Usd,
            CurrencyCode::Eur,
            CurrencyCode::Gbp,
            CurrencyCode::Cad,
            CurrencyCode::Aud,
            CurrencyCode::Jpy,
        ] {
            assert_eq!(CurrencyCode::from_raw(code.as_raw()), code);
        }
    }

    #[test]
    fn product_sort_keys_maps_known_and_unknown() {
        assert_eq!(ProductSortKeys::from_raw("TITLE"), ProductSortKeys::Title);
        assert_eq!(
            ProductSortKeys::from_raw("BEST_SELLING"),
            ProductSortKeys::BestSelling
        );
        assert_eq!(
            ProductSortKeys::from_raw("POPULARITY"),
            ProductSortKeys::Unknown
        );
    }
}
