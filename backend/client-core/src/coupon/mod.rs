//! Coupon entry for a brief's cart.

pub mod form;
pub mod operations;
pub mod state;

pub use form::{CouponForm, DISCOUNT_APPLIED_BADGE, SelectOption};
pub use operations::{add_to_cart, fetch_cart, fetch_coupons};
pub use state::{BriefAction, BriefState, ReferralAction, ReferralState};

pub const COUPONS_ENDPOINT: &str = "referral/coupons";
pub const CART_ENDPOINT: &str = "briefs/cart";
