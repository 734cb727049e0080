//! Basic utility functionality supporting revocation information evaluation

pub mod error;
pub mod time_of_interest;

pub use crate::util::{error::*, time_of_interest::*};
