mod coupon;
mod delivery_addresses;
mod message;
mod notifications;
mod storage;
mod support;
