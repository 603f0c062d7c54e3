//! End-to-end tests that drive the full router over the in-memory store.

mod helpers;

mod auth_test;
mod catalog_test;
mod review_test;
mod social_test;
mod user_test;
