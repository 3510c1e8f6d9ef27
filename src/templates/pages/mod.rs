pub mod home;
pub mod listing;
pub mod login;
pub mod message;
pub mod my_listing;
pub mod my_listings;
pub mod search;
