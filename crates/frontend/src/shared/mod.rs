pub mod api_utils;
pub mod components;
pub mod dynamic_form;
pub mod dynamic_table;
pub mod fetcher;
