//! Integration tests for the LinkHub HTTP API.

mod helpers;

mod access_test;
mod analytics_test;
mod link_test;
