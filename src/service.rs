//! [`StoreService`]: the query surface, and normalization of raw platform
//! records into the caller-facing types.

use crate::error::StoreError;
use crate::storefront::{
    PlatformCollectionData, PlatformPrice, PlatformProduct, PlatformSku, PlatformSubscription,
    Storefront,
};
use crate::timestamp::{ticks_to_iso8601, trial_ticks_to_seconds};
use crate::types::{
    AddOnLicense, AppLicense, BillingPeriodUnit, CollectionData, ProductKind, ProductSku,
    StorePrice, StoreProduct, SubscriptionInfo,
};

/// Typed access to the platform's licensing and catalog queries.
///
/// Owns its storefront backend explicitly; there is no process-wide instance.
/// The service keeps no state between calls — every query is an independent
/// platform request, completes exactly once, and cannot be cancelled.
#[derive(Debug)]
pub struct StoreService<S: Storefront> {
    storefront: S,
}

impl<S: Storefront> StoreService<S> {
    pub fn new(storefront: S) -> Self {
        Self { storefront }
    }

    /// Queries the current app's license and its add-on licenses.
    pub async fn get_app_license(&self) -> Result<AppLicense, StoreError> {
        log::debug!("Requesting app license");
        let license = self.storefront.app_license().await.map_err(|err| {
            log::error!("App license query failed: {err}");
            StoreError::from(err)
        })?;

        let add_on_licenses = license
            .add_ons
            .into_iter()
            .map(|add_on| AddOnLicense {
                offer_token: add_on.in_app_offer_token,
                sku_id: add_on.sku_store_id,
                expiration_date: ticks_to_iso8601(add_on.expiration_date_ticks),
            })
            .collect::<Vec<_>>();
        log::info!(
            "Retrieved app license (active: {}, add-ons: {})",
            license.is_active,
            add_on_licenses.len()
        );

        Ok(AppLicense {
            is_active: license.is_active,
            is_trial: license.is_trial,
            sku_id: license.sku_store_id,
            trial_unique_id: license.trial_unique_id,
            trial_time_remaining_seconds: trial_ticks_to_seconds(
                license.trial_time_remaining_ticks,
            ),
            expiration_date: ticks_to_iso8601(license.expiration_date_ticks),
            add_on_licenses,
        })
    }

    /// Queries catalog products of `kind` associated with the current app.
    pub async fn get_associated_store_products(
        &self,
        kind: ProductKind,
    ) -> Result<Vec<StoreProduct>, StoreError> {
        self.store_products(kind, false).await
    }

    /// Queries products of `kind` that the current user owns.
    pub async fn get_user_collection(
        &self,
        kind: ProductKind,
    ) -> Result<Vec<StoreProduct>, StoreError> {
        self.store_products(kind, true).await
    }

    async fn store_products(
        &self,
        kind: ProductKind,
        user_collection: bool,
    ) -> Result<Vec<StoreProduct>, StoreError> {
        let kind_name = kind.platform_name();
        log::debug!("Requesting store products (kind: {kind_name}, user collection: {user_collection})");

        let query = if user_collection {
            self.storefront.user_collection(kind_name).await
        } else {
            self.storefront.associated_products(kind_name).await
        };
        let result = query.map_err(|err| {
            log::error!("Store product query failed: {err}");
            StoreError::from(err)
        })?;

        // The platform can complete the call and still report a failure.
        if result.extended_error != 0 {
            log::error!(
                "Store product query reported extended error {}",
                result.extended_error
            );
            return Err(StoreError::from_extended_error(result.extended_error));
        }

        log::info!("Retrieved {} store products (kind: {kind_name})", result.products.len());
        Ok(result.products.into_iter().map(normalize_product).collect())
    }
}

fn normalize_product(product: PlatformProduct) -> StoreProduct {
    let skus = if product.skus.is_empty() {
        None
    } else {
        Some(product.skus.into_iter().map(normalize_sku).collect())
    };
    StoreProduct {
        sku_id: product.store_id,
        description: product.description,
        title: product.title,
        offer_token: product.in_app_offer_token,
        kind: ProductKind::from_platform_name(&product.product_kind),
        price: normalize_price(product.price),
        skus,
    }
}

fn normalize_sku(sku: PlatformSku) -> ProductSku {
    ProductSku {
        sku_id: sku.store_id,
        title: sku.title,
        is_trial: sku.is_trial,
        is_subscription: sku.is_subscription,
        price: normalize_price(sku.price),
        subscription_info: sku.subscription.map(normalize_subscription),
        collection_data: sku.collection_data.map(normalize_collection_data),
    }
}

fn normalize_price(price: PlatformPrice) -> StorePrice {
    StorePrice {
        currency_code: price.currency_code,
        is_on_sale: price.is_on_sale,
        sale_end_date: ticks_to_iso8601(price.sale_end_date_ticks),
        formatted_base_price: price.formatted_base_price,
        formatted_price: price.formatted_price,
        formatted_recurrence_price: price.formatted_recurrence_price,
    }
}

fn normalize_subscription(info: PlatformSubscription) -> SubscriptionInfo {
    SubscriptionInfo {
        billing_period: info.billing_period,
        billing_period_unit: BillingPeriodUnit::from_platform_unit(info.billing_period_unit),
        has_trial_period: info.has_trial_period,
        trial_period: info.trial_period,
        trial_period_unit: BillingPeriodUnit::from_platform_unit(info.trial_period_unit),
    }
}

fn normalize_collection_data(data: PlatformCollectionData) -> CollectionData {
    CollectionData {
        acquired_date: ticks_to_iso8601(data.acquired_date_ticks),
        start_date: ticks_to_iso8601(data.start_date_ticks),
        end_date: ticks_to_iso8601(data.end_date_ticks),
        is_trial: data.is_trial,
        campaign_id: data.campaign_id,
        developer_offer_id: data.developer_offer_id,
    }
}
