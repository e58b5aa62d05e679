use near_sdk::{json_types::U128, near, AccountId};

use crate::TokenAmount;

/// Record of a single accepted donation.
/// `by`      – the account that donated.
/// `amount`  – donated amount in the smallest native unit.
/// `message` – the message the donor left in the jar.
#[near(serializers = [json])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationEvent {
    pub by: AccountId,
    pub amount: U128,
    pub message: String,
}

impl DonationEvent {
    pub fn new(by: AccountId, amount: TokenAmount, message: String) -> Self {
        Self {
            by,
            amount: amount.into(),
            message,
        }
    }
}

/// Record of a single completed withdrawal.
/// `by`     – the account the tokens were transferred to.
/// `amount` – withdrawn amount in the smallest native unit.
#[near(serializers = [json])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalEvent {
    pub by: AccountId,
    pub amount: U128,
}

impl WithdrawalEvent {
    pub fn new(by: AccountId, amount: TokenAmount) -> Self {
        Self {
            by,
            amount: amount.into(),
        }
    }
}
