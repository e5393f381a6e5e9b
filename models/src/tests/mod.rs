mod delivery_address;
mod notification;
