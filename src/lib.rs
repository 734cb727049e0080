#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod policy;
pub mod revocation;
pub mod util;

extern crate alloc;

pub use crate::{policy::*, revocation::*, util::*};
