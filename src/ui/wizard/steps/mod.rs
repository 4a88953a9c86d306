//! Step rendering for the wizard screen

mod business;
mod chrome;
mod content;
mod design;
mod integrations;
mod launch;
mod products;
