//! Delivery address book: list, create, edit, delete, default flag.

pub mod errors;
pub mod screen;
pub mod service;
pub mod state;

pub use errors::{ApiErrorReport, handle_api_error};
pub use screen::{AddressModal, AddressRow, DeliveryAddressesScreen, ScreenView};
pub use state::{DeliveryAddressesAction, DeliveryAddressesState, Mutation};

pub const DELIVERY_ADDRESSES_ENDPOINT: &str = "user/delivery-addresses";

/// Validation statuses the form handles itself, so they reject with the body
/// instead of resolving as a global server error.
pub const VALIDATION_STATUSES: [u16; 2] = [400, 422];
