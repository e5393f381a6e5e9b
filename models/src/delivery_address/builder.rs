use crate::delivery_address::states::find_state;
use crate::error::model_error::ModelError;
use crate::{DeliveryAddress, DeliveryAddressDraft, ErrorLocation, PlaceDetails};

use std::panic::Location;
use std::sync::OnceLock;

use regex::Regex;

// ZIP or ZIP+4, the +4 with or without a hyphen
const POSTAL_CODE_PATTERN: &str = r"^\d{5}(-?\d{4})?$";
const REQUIRED_MESSAGE: &str = "This field is required";

static POSTAL_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn postal_code_regex() -> &'static Regex {
    POSTAL_CODE_REGEX.get_or_init(|| Regex::new(POSTAL_CODE_PATTERN).expect("valid regex pattern"))
}

/// Form state for a delivery address, validated into a [`DeliveryAddressDraft`].
///
/// Mirrors the address form: every setter takes the raw field text, and
/// validation happens once in [`Self::build`] or [`Self::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryAddressDraftBuilder {
    street_name: String,
    ap_suite: String,
    house_number: String,
    city: String,
    postal_code: String,
    state: String,
    default: bool,
}

impl DeliveryAddressDraftBuilder {
    /// Start from an existing address (edit modal).
    pub fn from_address(address: &DeliveryAddress) -> Self {
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

    pub fn with_street_name(mut self, value: impl Into<String>) -> Self {
        self.street_name = value.into();
        self
    }

    pub fn with_ap_suite(mut self, value: impl Into<String>) -> Self {
        self.ap_suite = value.into();
        self
    }

    pub fn with_house_number(mut self, value: impl Into<String>) -> Self {
        self.house_number = value.into();
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = value.into();
        self
    }

    pub fn with_postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = value.into();
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = value.into();
        self
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Prefill from a place lookup.
    ///
    /// The state is only taken over when it is a known code; otherwise the
    /// current selection stays.
    pub fn apply_place_details(mut self, details: &PlaceDetails) -> Self {
        self.street_name = details.street_name.clone();
        self.house_number = details.house_number.clone();
        self.city = details.city.clone();
        self.postal_code = details.postcode.clone();

        if let Some(state) = find_state(&details.state) {
            self.state = state.value.to_string();
        }

        self
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Every field failure, in form order.
    #[track_caller]
    pub fn validate(&self) -> Vec<ModelError> {
        let location = ErrorLocation::from(Location::caller());
        let mut errors = Vec::new();

        let mut required = |field: &'static str, value: &str| {
            if value.trim().is_empty() {
                errors.push(ModelError::Validation {
                    field,
                    message: String::from(REQUIRED_MESSAGE),
                    location,
                });
            }
        };

        required("street_name", &self.street_name);
        required("house_number", &self.house_number);
        required("city", &self.city);

        let postal_code = self.postal_code.trim();
        if postal_code.is_empty() {
            errors.push(ModelError::Validation {
                field: "postal_code",
                message: String::from(REQUIRED_MESSAGE),
                location,
            });
        } else if !postal_code_regex().is_match(postal_code) {
            errors.push(ModelError::Validation {
                field: "postal_code",
                message: format!("Invalid postal code: {postal_code}"),
                location,
            });
        }

        if self.state.trim().is_empty() {
            errors.push(ModelError::Validation {
                field: "state",
                message: String::from(REQUIRED_MESSAGE),
                location,
            });
        } else if find_state(self.state.trim()).is_none() {
            errors.push(ModelError::Validation {
                field: "state",
                message: format!("Unknown state: {}", self.state.trim()),
                location,
            });
        }

        errors
    }

    /// Build the draft, failing on the first invalid field.
    #[track_caller]
    pub fn build(self) -> Result<DeliveryAddressDraft, ModelError> {
        if let Some(error) = self.validate().into_iter().next() {
            return Err(error);
        }

        Ok(DeliveryAddressDraft {
            street_name: self.street_name.trim().to_string(),
            ap_suite: self.ap_suite.trim().to_string(),
            house_number: self.house_number.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            state: self.state.trim().to_string(),
            default: self.default,
        })
    }
}
