#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

//! Account and invoice display components for a subscription dashboard.
//!
//! Two independent components are provided:
//!
//! - [`AccountDetailViewer`] fetches one account record through a
//!   [`Client`] (or any [`AccountSource`]), maps it into the [`Account`]
//!   display model, and renders an overview or users view.
//! - [`invoice::render`] turns a fully populated [`Invoice`](invoice::Invoice)
//!   into a printable HTML document.

use displaydoc::Display;
use thiserror::Error as ThisError;
use url::Url;

mod util;

pub mod account;
pub mod format;
pub mod invoice;
pub mod response;
pub mod viewer;

mod client;

pub use account::Account;
pub use client::Client;
pub use viewer::{AccountDetailViewer, AccountSource, FetchTicket, Tab, ViewerState};

/// Type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interacting with the dashboard API.
#[derive(Debug, Display, ThisError)]
pub enum Error {
    /// Failed to send request.
    Request(#[from] reqwest::Error),
    /// Failed to parse URL.
    ParseUrl(#[from] url::ParseError),
    /// Error returned from the server.
    Response(#[from] response::Error),
}

/// Struct for specifying the URL of the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urls {
    pub base: Url,
}

impl Urls {
    /// Creates a new [`Urls`] type with the given base URL.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Creates a new [`Urls`] type pointing at a local development server
    /// (`http://localhost:3000`).
    pub fn local() -> Self {
        Self {
            base: Url::parse("http://localhost:3000").unwrap(),
        }
    }
}
