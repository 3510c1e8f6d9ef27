mod auth_tests;
mod editor_tests;
mod home_tests;
mod search_tests;
