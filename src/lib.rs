pub mod cli;
pub mod errors;
pub mod models;

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod pipeline;
#[doc(hidden)]
pub mod scrapers;
#[doc(hidden)]
pub mod services;
#[doc(hidden)]
pub mod util;

pub use errors::{OseError, Result};
pub use models::quote::{DateRange, FilterPolicy, Instrument, PriceRecord};
pub use services::quote_service::QuoteService;
