//! Test fixtures shared by service and store tests.

mod helpers;

pub(crate) use helpers::*;
