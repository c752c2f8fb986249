//! Normalized records returned to callers, plus the name tables that map
//! between them and the platform's string/integer identifiers.
//!
//! Field names follow the platform schema; wire names are camelCase so the
//! records serialize the way the consuming framework expects them.

use serde::{Deserialize, Serialize};

/// Kinds of store product that can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Application,
    Game,
    Consumable,
    UnmanagedConsumable,
    Durable,
}

impl ProductKind {
    /// The product-kind name the platform's catalog query expects.
    pub fn platform_name(&self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Game => "Game",
            Self::Consumable => "Consumable",
            Self::UnmanagedConsumable => "UnmanagedConsumable",
            Self::Durable => "Durable",
        }
    }

    /// Parses a platform-reported product-kind name.
    ///
    /// Unrecognized names coerce to [`ProductKind::Durable`]; the platform
    /// only documents the five known kinds, so anything else is treated as
    /// the most generic one rather than as an error.
    pub fn from_platform_name(name: &str) -> Self {
        match name {
            "Application" => Self::Application,
            "Game" => Self::Game,
            "Consumable" => Self::Consumable,
            "UnmanagedConsumable" => Self::UnmanagedConsumable,
            _ => Self::Durable,
        }
    }
}

/// Unit of a subscription billing or trial period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriodUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl BillingPeriodUnit {
    /// Converts the platform's numeric duration unit.
    ///
    /// Unknown values coerce to [`BillingPeriodUnit::Month`] with a warning.
    pub fn from_platform_unit(unit: i32) -> Self {
        match unit {
            0 => Self::Minute,
            1 => Self::Hour,
            2 => Self::Day,
            3 => Self::Week,
            4 => Self::Month,
            5 => Self::Year,
            other => {
                log::warn!("Unknown store duration unit {other}, treating as Month");
                Self::Month
            }
        }
    }

    /// The platform's numeric value for this unit.
    pub fn platform_unit(&self) -> i32 {
        match self {
            Self::Minute => 0,
            Self::Hour => 1,
            Self::Day => 2,
            Self::Week => 3,
            Self::Month => 4,
            Self::Year => 5,
        }
    }
}

/// The current app's license, with its valid durable add-on licenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLicense {
    pub is_active: bool,
    pub is_trial: bool,
    pub sku_id: String,
    pub trial_unique_id: String,
    /// Whole seconds of trial time left; fractional seconds are discarded.
    pub trial_time_remaining_seconds: i64,
    /// ISO-8601 UTC timestamp, second precision (`YYYY-MM-DDTHH:MM:SSZ`).
    pub expiration_date: String,
    /// In the order the platform reported them.
    pub add_on_licenses: Vec<AddOnLicense>,
}

/// License for a durable add-on associated with the current app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnLicense {
    pub offer_token: String,
    pub sku_id: String,
    pub expiration_date: String,
}

/// A store product as listed in the catalog or the user's collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProduct {
    pub sku_id: String,
    pub description: String,
    pub title: String,
    pub offer_token: String,
    pub kind: ProductKind,
    pub price: StorePrice,
    /// Per-SKU detail in platform order; `None` when the platform reported
    /// no SKU detail for this product.
    pub skus: Option<Vec<ProductSku>>,
}

/// Pricing for a product or SKU. Formatted strings are already localized
/// by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePrice {
    pub currency_code: String,
    pub is_on_sale: bool,
    pub sale_end_date: String,
    pub formatted_base_price: String,
    pub formatted_price: String,
    pub formatted_recurrence_price: String,
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSku {
    pub sku_id: String,
    pub title: String,
    pub is_trial: bool,
    pub is_subscription: bool,
    pub price: StorePrice,
    /// Present only for subscription SKUs.
    pub subscription_info: Option<SubscriptionInfo>,
    /// Present only when the user owns this SKU.
    pub collection_data: Option<CollectionData>,
}

/// Billing terms of a subscription SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    pub billing_period: u32,
    pub billing_period_unit: BillingPeriodUnit,
    pub has_trial_period: bool,
    pub trial_period: u32,
    pub trial_period_unit: BillingPeriodUnit,
}

/// Ownership detail for a SKU in the user's collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionData {
    pub acquired_date: String,
    pub start_date: String,
    pub end_date: String,
    pub is_trial: bool,
    pub campaign_id: String,
    pub developer_offer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ProductKind; 5] = [
        ProductKind::Application,
        ProductKind::Game,
        ProductKind::Consumable,
        ProductKind::UnmanagedConsumable,
        ProductKind::Durable,
    ];

    #[test]
    fn test_product_kind_name_round_trip() {
        for kind in ALL_KINDS {
            assert_eq!(ProductKind::from_platform_name(kind.platform_name()), kind);
        }
    }

    #[test]
    fn test_unknown_product_kind_falls_back_to_durable() {
        assert_eq!(ProductKind::from_platform_name("Subscription"), ProductKind::Durable);
        assert_eq!(ProductKind::from_platform_name(""), ProductKind::Durable);
        // Name matching is exact, not case-insensitive.
        assert_eq!(ProductKind::from_platform_name("game"), ProductKind::Durable);
    }

    #[test]
    fn test_billing_period_unit_round_trip() {
        for unit in [
            BillingPeriodUnit::Minute,
            BillingPeriodUnit::Hour,
            BillingPeriodUnit::Day,
            BillingPeriodUnit::Week,
            BillingPeriodUnit::Month,
            BillingPeriodUnit::Year,
        ] {
            assert_eq!(BillingPeriodUnit::from_platform_unit(unit.platform_unit()), unit);
        }
    }

    #[test]
    fn test_unknown_billing_period_unit_falls_back_to_month() {
        assert_eq!(BillingPeriodUnit::from_platform_unit(6), BillingPeriodUnit::Month);
        assert_eq!(BillingPeriodUnit::from_platform_unit(-1), BillingPeriodUnit::Month);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let product = StoreProduct {
            sku_id: "9WZDNCRFJ3TJ".to_string(),
            description: String::new(),
            title: "App".to_string(),
            offer_token: "token".to_string(),
            kind: ProductKind::Durable,
            price: StorePrice {
                currency_code: "USD".to_string(),
                is_on_sale: false,
                sale_end_date: "1601-01-01T00:00:00Z".to_string(),
                formatted_base_price: "$1.00".to_string(),
                formatted_price: "$1.00".to_string(),
                formatted_recurrence_price: String::new(),
            },
            skus: None,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["skuId"], "9WZDNCRFJ3TJ");
        assert_eq!(json["offerToken"], "token");
        assert_eq!(json["kind"], "durable");
        assert_eq!(json["price"]["isOnSale"], false);
        assert_eq!(json["price"]["formattedBasePrice"], "$1.00");
        assert!(json["skus"].is_null());
    }
}
