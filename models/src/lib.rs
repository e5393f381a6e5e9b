//! Domain models for the storefront client.
//!
//! This crate contains plain data structures representing the concepts the
//! client exchanges with the API and shows to the user. Apart from input
//! validation on drafts, models carry no behavior.
//!
//! ## Architecture
//!
//! - **common**: Error locations, status codes, redacted credentials
//! - **models** (this crate): Pure data structures
//! - **client-core**: Classifier, store, API client and feature logic
//! - **storefront-cli**: Binary wiring everything together

pub mod cart;
pub mod delivery_address;
pub mod error;
pub mod notification;
pub mod notification_event;

pub use cart::{Cart, Coupon};
pub use common::ErrorLocation;
pub use delivery_address::builder::DeliveryAddressDraftBuilder;
pub use delivery_address::states::{STATES, UsState, find_state};
pub use delivery_address::{
    DeliveryAddress, DeliveryAddressDraft, DeliveryAddressPatch, FormattedDeliveryAddress,
    PlaceDetails, format_delivery_address,
};
pub use error::model_error::ModelError;
pub use notification::{AppNotification, NotificationStatus};
pub use notification_event::{ErrorFormat, NotificationEvent, NotificationKind};

#[cfg(test)]
mod tests;
