//! Storefront backend bound to the real `Windows.Services.Store` service.
//!
//! WinRT's async operations are driven here with a blocking `get()` on the
//! tokio blocking pool, so each query is one background unit of work that
//! completes exactly once.

use async_trait::async_trait;
use windows::core::{Error as WindowsError, HSTRING};
use windows::Foundation::Collections::IIterable;
use windows::Services::Store::{
    StoreAppLicense, StoreCollectionData, StoreContext, StoreProduct, StoreProductQueryResult,
    StoreSku, StoreSubscriptionInfo,
};

use crate::storefront::{
    PlatformAddOn, PlatformCollectionData, PlatformError, PlatformLicense, PlatformPrice,
    PlatformProduct, PlatformSku, PlatformSubscription, ProductQueryResult, Storefront,
};

const E_FAIL: i32 = 0x8000_4005_u32 as i32;

/// Queries the Windows Store on behalf of the current app.
///
/// Holds no state; every call obtains a fresh [`StoreContext`] for the
/// default user.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsStorefront;

impl WindowsStorefront {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storefront for WindowsStorefront {
    async fn app_license(&self) -> Result<PlatformLicense, PlatformError> {
        run_store_call(|| {
            let context = StoreContext::GetDefault()?;
            let license = context.GetAppLicenseAsync()?.get()?;
            convert_license(&license)
        })
        .await
    }

    async fn associated_products(
        &self,
        kind_name: &str,
    ) -> Result<ProductQueryResult, PlatformError> {
        let kind = HSTRING::from(kind_name);
        run_store_call(move || {
            let context = StoreContext::GetDefault()?;
            let kinds: IIterable<HSTRING> = vec![kind].try_into()?;
            let result = context.GetAssociatedStoreProductsAsync(&kinds)?.get()?;
            convert_query_result(&result)
        })
        .await
    }

    async fn user_collection(
        &self,
        kind_name: &str,
    ) -> Result<ProductQueryResult, PlatformError> {
        let kind = HSTRING::from(kind_name);
        run_store_call(move || {
            let context = StoreContext::GetDefault()?;
            let kinds: IIterable<HSTRING> = vec![kind].try_into()?;
            let result = context.GetUserCollectionAsync(&kinds)?.get()?;
            convert_query_result(&result)
        })
        .await
    }
}

/// Runs one blocking WinRT call off the async thread and converts its error.
async fn run_store_call<T, F>(call: F) -> Result<T, PlatformError>
where
    T: Send + 'static,
    F: FnOnce() -> windows::core::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result.map_err(platform_error),
        Err(join_err) => Err(PlatformError {
            code: E_FAIL,
            message: format!("store call did not complete: {join_err}"),
        }),
    }
}

fn platform_error(err: WindowsError) -> PlatformError {
    PlatformError {
        code: err.code().0,
        message: err.message().to_string(),
    }
}

fn convert_license(license: &StoreAppLicense) -> windows::core::Result<PlatformLicense> {
    let mut add_ons = Vec::new();
    for pair in license.AddOnLicenses()? {
        let add_on = pair.Value()?;
        add_ons.push(PlatformAddOn {
            in_app_offer_token: add_on.InAppOfferToken()?.to_string(),
            sku_store_id: add_on.SkuStoreId()?.to_string(),
            expiration_date_ticks: add_on.ExpirationDate()?.UniversalTime,
        });
    }
    Ok(PlatformLicense {
        is_active: license.IsActive()?,
        is_trial: license.IsTrial()?,
        sku_store_id: license.SkuStoreId()?.to_string(),
        trial_unique_id: license.TrialUniqueId()?.to_string(),
        trial_time_remaining_ticks: license.TrialTimeRemaining()?.Duration,
        expiration_date_ticks: license.ExpirationDate()?.UniversalTime,
        add_ons,
    })
}

fn convert_query_result(
    result: &StoreProductQueryResult,
) -> windows::core::Result<ProductQueryResult> {
    let extended_error = result.ExtendedError()?.0;
    if extended_error != 0 {
        return Ok(ProductQueryResult {
            extended_error,
            products: Vec::new(),
        });
    }

    let mut products = Vec::new();
    for pair in result.Products()? {
        products.push(convert_product(&pair.Value()?)?);
    }
    Ok(ProductQueryResult {
        extended_error,
        products,
    })
}

fn convert_product(product: &StoreProduct) -> windows::core::Result<PlatformProduct> {
    let mut skus = Vec::new();
    for sku in product.Skus()? {
        skus.push(convert_sku(&sku)?);
    }
    Ok(PlatformProduct {
        store_id: product.StoreId()?.to_string(),
        description: product.Description()?.to_string(),
        title: product.Title()?.to_string(),
        in_app_offer_token: product.InAppOfferToken()?.to_string(),
        product_kind: product.ProductKind()?.to_string(),
        price: convert_price(&product.Price()?)?,
        skus,
    })
}

fn convert_sku(sku: &StoreSku) -> windows::core::Result<PlatformSku> {
    let is_subscription = sku.IsSubscription()?;
    // SubscriptionInfo and CollectionData are null unless the SKU is a
    // subscription / owned by the user, so a failed getter means "absent".
    let subscription = if is_subscription {
        sku.SubscriptionInfo()
            .ok()
            .map(|info| convert_subscription(&info))
            .transpose()?
    } else {
        None
    };
    let collection_data = if sku.IsInUserCollection()? {
        sku.CollectionData()
            .ok()
            .map(|data| convert_collection_data(&data))
            .transpose()?
    } else {
        None
    };
    Ok(PlatformSku {
        store_id: sku.StoreId()?.to_string(),
        title: sku.Title()?.to_string(),
        is_trial: sku.IsTrial()?,
        is_subscription,
        price: convert_price(&sku.Price()?)?,
        subscription,
        collection_data,
    })
}

fn convert_price(
    price: &windows::Services::Store::StorePrice,
) -> windows::core::Result<PlatformPrice> {
    Ok(PlatformPrice {
        currency_code: price.CurrencyCode()?.to_string(),
        is_on_sale: price.IsOnSale()?,
        sale_end_date_ticks: price.SaleEndDate()?.UniversalTime,
        formatted_base_price: price.FormattedBasePrice()?.to_string(),
        formatted_price: price.FormattedPrice()?.to_string(),
        formatted_recurrence_price: price.FormattedRecurrencePrice()?.to_string(),
    })
}

fn convert_subscription(
    info: &StoreSubscriptionInfo,
) -> windows::core::Result<PlatformSubscription> {
    Ok(PlatformSubscription {
        billing_period: info.BillingPeriod()?,
        billing_period_unit: info.BillingPeriodUnit()?.0,
        has_trial_period: info.HasTrialPeriod()?,
        trial_period: info.TrialPeriod()?,
        trial_period_unit: info.TrialPeriodUnit()?.0,
    })
}

fn convert_collection_data(
    data: &StoreCollectionData,
) -> windows::core::Result<PlatformCollectionData> {
    Ok(PlatformCollectionData {
        acquired_date_ticks: data.AcquiredDate()?.UniversalTime,
        start_date_ticks: data.StartDate()?.UniversalTime,
        end_date_ticks: data.EndDate()?.UniversalTime,
        is_trial: data.IsTrial()?,
        campaign_id: data.CampaignId()?.to_string(),
        developer_offer_id: data.DeveloperOfferId()?.to_string(),
    })
}
