use crate::api_client::ApiClient;
use crate::capabilities::Dispatcher;
use crate::coupon::{add_to_cart, fetch_cart};
use crate::error::ApiClientError;

use models::{Cart, Coupon};

use log::info;

pub const DISCOUNT_APPLIED_BADGE: &str = "5% Discount Applied";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// View model of the coupon box shown next to a brief's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponForm {
    brief_id: String,
    code: String,
}

impl CouponForm {
    pub fn new(brief_id: impl Into<String>) -> Self {
        Self {
            brief_id: brief_id.into(),
            code: String::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Text typed into the input.
    pub fn input(&mut self, text: impl Into<String>) {
        self.code = text.into();
    }

    /// Option picked from the dropdown.
    pub fn select(&mut self, option: &SelectOption) {
        self.code = option.value.clone();
    }

    pub fn options(coupons: &[Coupon]) -> Vec<SelectOption> {
        coupons
            .iter()
            .map(|coupon| SelectOption {
                label: coupon.coupon_code.clone(),
                value: coupon.coupon_code.clone(),
            })
            .collect()
    }

    pub fn show_select(cart: &Cart, options: &[SelectOption]) -> bool {
        cart.applied_coupon().is_none() && !options.is_empty()
    }

    pub fn can_add(&self) -> bool {
        !self.code.is_empty()
    }

    /// An applied coupon replaces whatever was typed and locks the input.
    pub fn input_value<'a>(&'a self, cart: &'a Cart) -> &'a str {
        cart.applied_coupon().unwrap_or(&self.code)
    }

    pub fn badge(cart: &Cart) -> Option<&'static str> {
        cart.applied_coupon().map(|_| DISCOUNT_APPLIED_BADGE)
    }

    /// Attach the typed code to the cart, then reload the cart.
    ///
    /// Does nothing while the code is empty.
    pub async fn apply(
        &self,
        client: &ApiClient,
        dispatcher: &dyn Dispatcher,
        cart: &Cart,
    ) -> Result<Option<Cart>, ApiClientError> {
        if !self.can_add() {
            return Ok(None);
        }

        let cart_data = Cart {
            brief_id: Some(self.brief_id.clone()),
            additional: cart.additional.clone(),
            coupon_code: Some(self.code.clone()),
        };

        add_to_cart(client, dispatcher, &cart_data).await?;
        let refreshed = fetch_cart(client, dispatcher, &self.brief_id).await?;

        info!("Coupon applied to brief {}", self.brief_id);
        Ok(Some(refreshed))
    }
}
