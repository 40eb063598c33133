use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// A new request went out. Results of earlier attempts become stale.
    Start,
    Succeeded { attempt: u32, items: Vec<String> },
    Failed { attempt: u32, message: String },
}

impl Intent for FetchIntent {}
