//! lizzycalc - calculator client
//!
//! Collects two operands and an operator, submits them to the lizzyCalc
//! calculation service, and shows the result, the error, or the recorded
//! history.
//!
//! - [`api`]: REST client for `/api/v1/calculate` and `/api/v1/history`
//! - [`form`]: the calculator form controller and its state
//! - [`cli`]: command-line front end

pub mod api;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
