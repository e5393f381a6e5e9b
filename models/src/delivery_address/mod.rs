pub mod builder;
pub mod states;

use serde::{Deserialize, Serialize};

/// Saved delivery address as returned by the user API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub id: u64,
    pub street_name: String,
    #[serde(default)]
    pub ap_suite: String,
    pub house_number: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    #[serde(default)]
    pub default: bool,
}

/// Validated payload for creating or fully replacing an address.
///
/// Only constructed through [`builder::DeliveryAddressDraftBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddressDraft {
    pub street_name: String,
    pub ap_suite: String,
    pub house_number: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub default: bool,
}

impl From<&DeliveryAddress> for DeliveryAddressDraft {
    fn from(address: &DeliveryAddress) -> Self {
        Self {
            street_name: address.street_name.clone(),
            ap_suite: address.ap_suite.clone(),
            house_number: address.house_number.clone(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone(),
            state: address.state.clone(),
            default: address.default,
        }
    }
}

/// Partial update. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryAddressPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ap_suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

impl DeliveryAddressPatch {
    pub fn make_default(default: bool) -> Self {
        Self {
            default: Some(default),
            ..Self::default()
        }
    }
}

impl From<DeliveryAddressDraft> for DeliveryAddressPatch {
    fn from(draft: DeliveryAddressDraft) -> Self {
        Self {
            street_name: Some(draft.street_name),
            ap_suite: Some(draft.ap_suite),
            house_number: Some(draft.house_number),
            city: Some(draft.city),
            postal_code: Some(draft.postal_code),
            state: Some(draft.state),
            default: Some(draft.default),
        }
    }
}

/// Result of a place lookup used to prefill the address form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub street_name: String,
    pub house_number: String,
    pub city: String,
    pub postcode: String,
    pub state: String,
}

/// Two display lines for an address list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDeliveryAddress {
    pub street: String,
    pub city: String,
}

pub fn format_delivery_address(address: &DeliveryAddress) -> FormattedDeliveryAddress {
    let mut street = format!("{} {}", address.house_number.trim(), address.street_name.trim())
        .trim()
        .to_string();

    let suite = address.ap_suite.trim();
    if !suite.is_empty() {
        street.push_str(", ");
        street.push_str(suite);
    }

    let city = format!(
        "{}, {} {}",
        address.city.trim(),
        address.state.trim(),
        address.postal_code.trim()
    );

    FormattedDeliveryAddress { street, city }
}
