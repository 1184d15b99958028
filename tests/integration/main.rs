//! Integration tests driving the HTTP router over a temporary JSON dataset

mod api_tests;
mod common;
mod scenarios;
