//! Value model for the shellbridge renderer bridge.
//!
//! This crate provides:
//! - [`ScriptValue`]: the scripting engine's dynamic value as an explicit
//!   tagged sum type
//! - [`ListValue`] / [`ListEntry`]: the ordered, typed, process-portable
//!   argument container used inside outbound and inbound messages
//! - the bidirectional converter between the two ([`to_list`], [`set_slot`],
//!   [`to_script`])
//!
//! # Conversion policy
//!
//! Conversion is depth-recursive and size-preserving, and deliberately
//! permissive: a script value with no portable representation (a function, or
//! an engine type this crate does not know) leaves its slot unset rather than
//! failing, so forward-compatible page script never sees a conversion error.
//! In the other direction an absent or unrecognized slot reads as null.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod convert;
mod list;
mod script;

pub use convert::{set_slot, to_list, to_script};
pub use list::{ListEntry, ListValue};
pub use script::{ScriptFunction, ScriptValue};
