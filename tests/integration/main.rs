//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a fake catalog and drive the full
//! harvest, assembly and export cycle over HTTP.

mod common;
mod export_tests;
mod harvest_tests;
