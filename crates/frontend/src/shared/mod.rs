pub mod api_utils;
pub mod interactions;
pub mod loading;
pub mod notify;
