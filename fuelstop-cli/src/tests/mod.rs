//! Shared test harness modules for the fuelstop CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod commands_unit;
mod helpers;
