use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Referral coupon available to the current client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub coupon_code: String,
}

/// Cart attached to a brief. `additional` is passed back untouched when the
/// cart is resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub brief_id: Option<String>,
    #[serde(default)]
    pub additional: Value,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

impl Cart {
    /// Applied coupon, ignoring empty codes the API sometimes returns.
    pub fn applied_coupon(&self) -> Option<&str> {
        self.coupon_code.as_deref().filter(|code| !code.is_empty())
    }
}
