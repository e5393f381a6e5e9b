use crate::coupon::{
    BriefAction, BriefState, CouponForm, DISCOUNT_APPLIED_BADGE, ReferralAction, ReferralState,
    SelectOption,
};

use models::{Cart, Coupon};

use serde_json::json;

fn cart_with(code: Option<&str>) -> Cart {
    Cart {
        brief_id: Some("b-1".to_string()),
        additional: json!({"rush": true}),
        coupon_code: code.map(String::from),
    }
}

fn coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            coupon_code: "WELCOME5".to_string(),
        },
        Coupon {
            coupon_code: "FRIEND5".to_string(),
        },
    ]
}

#[test]
fn given_coupons_when_building_options_then_label_and_value_are_the_code() {
    let options = CouponForm::options(&coupons());

    assert_eq!(
        options,
        vec![
            SelectOption {
                label: "WELCOME5".to_string(),
                value: "WELCOME5".to_string(),
            },
            SelectOption {
                label: "FRIEND5".to_string(),
                value: "FRIEND5".to_string(),
            },
        ]
    );
}

/// **VALUE**: Once a coupon is applied the select disappears and the badge shows.
///
/// **BUG THIS CATCHES**: Would catch an empty `couponCode` from the API being treated as
/// an applied coupon, which would lock the input with a blank value.
#[test]
fn given_applied_coupon_when_rendering_then_select_hidden_and_badge_shown() {
    let options = CouponForm::options(&coupons());
    let mut form = CouponForm::new("b-1");
    form.input("TYPED");

    let applied = cart_with(Some("WELCOME5"));
    assert!(!CouponForm::show_select(&applied, &options));
    assert_eq!(CouponForm::badge(&applied), Some(DISCOUNT_APPLIED_BADGE));
    assert_eq!(form.input_value(&applied), "WELCOME5");

    let blank = cart_with(Some(""));
    assert!(CouponForm::show_select(&blank, &options));
    assert_eq!(CouponForm::badge(&blank), None);
    assert_eq!(form.input_value(&blank), "TYPED");
}

#[test]
fn given_no_coupons_when_rendering_then_select_hidden() {
    assert!(!CouponForm::show_select(&cart_with(None), &[]));
}

#[test]
fn given_form_when_typing_or_selecting_then_add_enabled_only_with_code() {
    let mut form = CouponForm::new("b-1");
    assert!(!form.can_add());

    form.select(&SelectOption {
        label: "FRIEND5".to_string(),
        value: "FRIEND5".to_string(),
    });
    assert_eq!(form.code(), "FRIEND5");
    assert!(form.can_add());

    form.input("");
    assert!(!form.can_add());
}

#[test]
fn given_cart_actions_when_applied_then_loading_and_errors_tracked() {
    let mut state = BriefState::default();

    state.apply(BriefAction::AddToCartRequest);
    assert!(state.is_cart_loading);

    state.apply(BriefAction::AddToCartFailure("Invalid coupon".to_string()));
    assert!(!state.is_cart_loading);
    assert_eq!(state.cart_error.as_deref(), Some("Invalid coupon"));

    state.apply(BriefAction::FetchCartRequest);
    state.apply(BriefAction::FetchCartSuccess(cart_with(Some("FRIEND5"))));
    assert_eq!(state.cart.applied_coupon(), Some("FRIEND5"));
    assert_eq!(state.cart_error, None);
}

#[test]
fn given_coupon_fetch_when_applied_then_list_replaced() {
    let mut state = ReferralState::default();

    state.apply(ReferralAction::FetchCouponsRequest);
    state.apply(ReferralAction::FetchCouponsSuccess(coupons()));

    assert!(!state.is_loading);
    assert_eq!(state.coupons.len(), 2);
}
