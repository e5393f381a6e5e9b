mod api_client;
mod coupon;
mod delivery_addresses;
mod helpers;
mod notifications;
