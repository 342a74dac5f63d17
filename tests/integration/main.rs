//! Integration tests for termtype

mod helpers;

mod animator_test;
mod cli_test;
mod export_test;
