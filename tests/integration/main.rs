//! Integration tests for sitemap generation
//!
//! These tests build small sites in temporary directories and run the
//! whole pipeline end-to-end, reading the written XML back.

mod sitemap_tests;
