//! Typed async bindings for the Windows Store licensing and product catalog
//! API (`Windows.Services.Store`).
//!
//! [`StoreService`] exposes three queries — the current app's license, the
//! catalog products associated with the app, and the products the signed-in
//! user owns — and returns normalized, serializable records instead of raw
//! WinRT objects. Platform failures come back as a typed [`StoreError`]
//! carrying the platform's numeric error code; nothing is thrown across the
//! async boundary.
//!
//! The platform itself sits behind the [`Storefront`] trait. On Windows,
//! `WindowsStorefront` binds it to the real store service; on other
//! targets (and in tests) any implementation can stand in, which keeps the
//! translation layer testable everywhere.
//!
//! Every query is stateless and independent: a fresh storefront context per
//! call, one-shot completion, no caching, no retry, no cancellation.

mod error;
#[cfg(windows)]
mod platform;
mod service;
mod storefront;
mod timestamp;
mod types;

pub use error::StoreError;
#[cfg(windows)]
pub use platform::WindowsStorefront;
pub use service::StoreService;
pub use storefront::{
    PlatformAddOn, PlatformCollectionData, PlatformError, PlatformLicense, PlatformPrice,
    PlatformProduct, PlatformSku, PlatformSubscription, ProductQueryResult, Storefront,
};
pub use timestamp::{ticks_to_iso8601, trial_ticks_to_seconds};
pub use types::{
    AddOnLicense, AppLicense, BillingPeriodUnit, CollectionData, ProductKind, ProductSku,
    StorePrice, StoreProduct, SubscriptionInfo,
};
