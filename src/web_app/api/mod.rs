// web_app/api/mod.rs - API module for server-side logic
//
// This module holds the catalog service read by the server functions.

pub mod catalog;
