//! The platform boundary: raw response records as the storefront service
//! reports them, and the trait the rest of the crate calls through.
//!
//! Timestamps here are kept in the platform's native representation —
//! 100-nanosecond intervals since 1601-01-01T00:00:00Z — and durations in the
//! same 100 ns ticks. Normalization happens in [`crate::service`].

use async_trait::async_trait;

/// Raw app license as reported by the platform.
#[derive(Debug, Clone, Default)]
pub struct PlatformLicense {
    pub is_active: bool,
    pub is_trial: bool,
    pub sku_store_id: String,
    pub trial_unique_id: String,
    /// Remaining trial time in 100 ns ticks.
    pub trial_time_remaining_ticks: i64,
    /// 100 ns ticks since the platform epoch.
    pub expiration_date_ticks: i64,
    /// Valid durable add-on licenses, in platform iteration order.
    pub add_ons: Vec<PlatformAddOn>,
}

/// Raw add-on license entry.
#[derive(Debug, Clone, Default)]
pub struct PlatformAddOn {
    pub in_app_offer_token: String,
    pub sku_store_id: String,
    pub expiration_date_ticks: i64,
}

/// Raw product entry from a catalog or collection query.
#[derive(Debug, Clone, Default)]
pub struct PlatformProduct {
    pub store_id: String,
    pub description: String,
    pub title: String,
    pub in_app_offer_token: String,
    /// Product-kind name as a platform string (e.g. `"Durable"`).
    pub product_kind: String,
    pub price: PlatformPrice,
    /// SKU detail in platform order; empty when the query did not return it.
    pub skus: Vec<PlatformSku>,
}

/// Raw price record.
#[derive(Debug, Clone, Default)]
pub struct PlatformPrice {
    pub currency_code: String,
    pub is_on_sale: bool,
    pub sale_end_date_ticks: i64,
    pub formatted_base_price: String,
    pub formatted_price: String,
    pub formatted_recurrence_price: String,
}

/// Raw SKU record.
#[derive(Debug, Clone, Default)]
pub struct PlatformSku {
    pub store_id: String,
    pub title: String,
    pub is_trial: bool,
    pub is_subscription: bool,
    pub price: PlatformPrice,
    pub subscription: Option<PlatformSubscription>,
    pub collection_data: Option<PlatformCollectionData>,
}

/// Raw subscription terms. Units are the platform's numeric duration units.
#[derive(Debug, Clone, Default)]
pub struct PlatformSubscription {
    pub billing_period: u32,
    pub billing_period_unit: i32,
    pub has_trial_period: bool,
    pub trial_period: u32,
    pub trial_period_unit: i32,
}

/// Raw collection (ownership) record for a SKU.
#[derive(Debug, Clone, Default)]
pub struct PlatformCollectionData {
    pub acquired_date_ticks: i64,
    pub start_date_ticks: i64,
    pub end_date_ticks: i64,
    pub is_trial: bool,
    pub campaign_id: String,
    pub developer_offer_id: String,
}

/// Result of a product query. The platform can complete the call and still
/// report a failure through `extended_error`; `0` means success.
#[derive(Debug, Clone, Default)]
pub struct ProductQueryResult {
    pub extended_error: i32,
    pub products: Vec<PlatformProduct>,
}

/// A failure raised by the platform call itself (as opposed to an extended
/// error inside a completed response). `code` is the platform's numeric
/// error code (an HRESULT, negative on failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub code: i32,
    pub message: String,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "platform error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for PlatformError {}

/// One storefront backend.
///
/// Every method issues an independent platform request against a fresh
/// storefront context; implementations hold no per-call state. Each returned
/// future completes exactly once and cannot be cancelled mid-request.
#[async_trait]
pub trait Storefront: Send + Sync {
    /// Queries the current app's license.
    async fn app_license(&self) -> Result<PlatformLicense, PlatformError>;

    /// Queries catalog products of one kind associated with the current app.
    /// `kind_name` is the platform product-kind string.
    async fn associated_products(&self, kind_name: &str)
        -> Result<ProductQueryResult, PlatformError>;

    /// Queries products of one kind that the current user owns.
    async fn user_collection(&self, kind_name: &str)
        -> Result<ProductQueryResult, PlatformError>;
}
