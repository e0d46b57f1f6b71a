// Library root
// -----------
// This crate exposes the library surface behind the `growl` binary.
// `main.rs` builds an API client from the environment and hands the
// parsed command line to `cli::run`.
//
// Module responsibilities:
// - `config`: base URL and bearer token, read from the environment.
// - `api`: authenticated HTTP requests against the doggo.ninja API.
// - `models`: records decoded from (and encoded to) the API's JSON.
// - `service`: the user-facing operations (list, upload, delete...).
// - `humanize` / `mime`: byte-count formatting and upload MIME handling.
// - `ui`: console output, spinner and confirmation prompt.
// - `cli`: argument definitions and the command dispatcher.
pub mod api;
pub mod cli;
pub mod config;
pub mod humanize;
pub mod mime;
pub mod models;
pub mod service;
pub mod ui;
