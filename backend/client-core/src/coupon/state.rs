use models::{Cart, Coupon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferralAction {
    FetchCouponsRequest,
    FetchCouponsSuccess(Vec<Coupon>),
    FetchCouponsFailure(String),
}

impl ReferralAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ReferralAction::FetchCouponsRequest => "referral/fetchCouponsRequest",
            ReferralAction::FetchCouponsSuccess(_) => "referral/fetchCouponsSuccess",
            ReferralAction::FetchCouponsFailure(_) => "referral/fetchCouponsFailure",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralState {
    pub coupons: Vec<Coupon>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ReferralState {
    pub fn apply(&mut self, action: ReferralAction) {
        match action {
            ReferralAction::FetchCouponsRequest => {
                self.is_loading = true;
            }
            ReferralAction::FetchCouponsSuccess(coupons) => {
                self.coupons = coupons;
                self.is_loading = false;
                self.error = None;
            }
            ReferralAction::FetchCouponsFailure(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BriefAction {
    FetchCartRequest,
    FetchCartSuccess(Cart),
    FetchCartFailure(String),
    AddToCartRequest,
    AddToCartSuccess,
    AddToCartFailure(String),
}

impl BriefAction {
    pub fn kind(&self) -> &'static str {
        match self {
            BriefAction::FetchCartRequest => "brief/fetchCartRequest",
            BriefAction::FetchCartSuccess(_) => "brief/fetchCartSuccess",
            BriefAction::FetchCartFailure(_) => "brief/fetchCartFailure",
            BriefAction::AddToCartRequest => "brief/addToCartRequest",
            BriefAction::AddToCartSuccess => "brief/addToCartSuccess",
            BriefAction::AddToCartFailure(_) => "brief/addToCartFailure",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BriefState {
    pub cart: Cart,
    pub is_cart_loading: bool,
    pub cart_error: Option<String>,
}

impl BriefState {
    pub fn apply(&mut self, action: BriefAction) {
        match action {
            BriefAction::FetchCartRequest | BriefAction::AddToCartRequest => {
                self.is_cart_loading = true;
            }
            BriefAction::FetchCartSuccess(cart) => {
                self.cart = cart;
                self.is_cart_loading = false;
                self.cart_error = None;
            }
            BriefAction::AddToCartSuccess => {
                self.is_cart_loading = false;
                self.cart_error = None;
            }
            BriefAction::FetchCartFailure(error) | BriefAction::AddToCartFailure(error) => {
                self.is_cart_loading = false;
                self.cart_error = Some(error);
            }
        }
    }
}
