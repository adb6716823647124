//! HTTP API: server wiring, routing, and request/response mapping for the
//! stock service.

pub mod app;
