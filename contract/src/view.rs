use near_sdk::{json_types::U128, near};
use penny_jar_model::api::JarApi;

use crate::{Contract, ContractExt};

#[near]
impl JarApi for Contract {
    fn get_message(&self) -> String {
        self.ledger.message().to_string()
    }

    fn get_balance(&self) -> U128 {
        U128(self.ledger.balance())
    }
}
