//! Shared test harness modules for the giftmatch CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod interests_unit;
mod rank_unit;
