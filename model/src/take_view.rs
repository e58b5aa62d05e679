use near_sdk::{json_types::U128, near};

use crate::TokenAmount;

/// The `TakeView` struct represents the result of a take operation.
#[near(serializers = [json])]
#[derive(Debug, Eq, PartialEq)]
pub struct TakeView {
    /// The amount of tokens that has been transferred to the taker's account.
    /// Zero when the transfer failed and the jar was refunded.
    pub taken_amount: U128,
}

impl TakeView {
    pub fn new(amount: TokenAmount) -> Self {
        Self {
            taken_amount: U128(amount),
        }
    }
}
