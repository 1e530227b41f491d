//! Courier — adapter-pattern notification delivery demo.
//!
//! One uniform sender contract ([`adapters::MessageSender`]), two typed
//! adapters reconciling incompatible legacy delivery routines, a dynamic
//! adapter binding a named legacy handler at construction, and a
//! notification service that depends only on the contract.
//!
//! All delivery is simulated through structured logging. There is no real
//! transport, persistence, retry, or concurrency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adapters;
pub mod config;
pub mod legacy;
pub mod logging;
pub mod notify;
