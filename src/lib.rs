//! Store launch wizard: a terminal wizard that collects a store
//! configuration over six steps, then validates, deploys and monitors it
//! against the wizard backend.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod launch;
pub mod logging;
pub mod notifications;
pub mod rest;
pub mod types;
pub mod ui;
pub mod wizard;
