//! Stock entry core for the stockroom inventory dashboard.
//!
//! Owns the add-stock form state: field validation, the currency
//! picker, and the submission flow against the stock service. The
//! hosting UI injects a [`session::TokenProvider`] and a
//! [`stock::Interface`] and drives the form through
//! [`form::StockEntryForm`].

/// Environment configuration for the stock service endpoint.
pub mod config;

/// Currency reference set and live search filter.
pub mod currency;

/// Stock entry form: draft state, validation, and the submit protocol.
pub mod form;

pub mod logger;

pub mod prelude;

/// Product search bar state.
pub mod search;

/// Session context and access token seam.
pub mod session;

/// Stock submission service: wire types, error taxonomy, HTTP client.
pub mod stock;
