//! Interactive console session

mod controller;
mod prompt;

pub(crate) use controller::{Session, SessionOptions};
