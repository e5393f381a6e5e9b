use crate::coupon::{BriefAction, ReferralAction};
use crate::delivery_addresses::DeliveryAddressesAction;
use crate::notifications::NotificationsAction;
use crate::store::CoreAction;

/// Every state transition the store understands, grouped by slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Core(CoreAction),
    Notifications(NotificationsAction),
    Referral(ReferralAction),
    Brief(BriefAction),
    DeliveryAddresses(DeliveryAddressesAction),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Core(action) => action.kind(),
            Action::Notifications(action) => action.kind(),
            Action::Referral(action) => action.kind(),
            Action::Brief(action) => action.kind(),
            Action::DeliveryAddresses(action) => action.kind(),
        }
    }
}

impl From<CoreAction> for Action {
    fn from(action: CoreAction) -> Self {
        Action::Core(action)
    }
}

impl From<NotificationsAction> for Action {
    fn from(action: NotificationsAction) -> Self {
        Action::Notifications(action)
    }
}

impl From<ReferralAction> for Action {
    fn from(action: ReferralAction) -> Self {
        Action::Referral(action)
    }
}

impl From<BriefAction> for Action {
    fn from(action: BriefAction) -> Self {
        Action::Brief(action)
    }
}

impl From<DeliveryAddressesAction> for Action {
    fn from(action: DeliveryAddressesAction) -> Self {
        Action::DeliveryAddresses(action)
    }
}
