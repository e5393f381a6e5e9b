pub mod api_client;
pub mod capabilities;
pub mod config;
pub mod coupon;
pub mod delivery_addresses;
pub mod error;
pub mod interceptor;
pub mod notifications;
pub mod store;

#[cfg(test)]
mod tests;

pub const STOREFRONT_API_HOSTNAME: &str = "api.storefront.local";
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("https://", STOREFRONT_API_HOSTNAME, "/api/v1/");

/// Persisted storage key holding the session access token.
pub const ACCESS_TOKEN_STORAGE_KEY: &str = "access_token";

/// Route the user lands on once the session is gone.
pub const SIGN_IN_ROUTE: &str = "/auth/sign-in";
