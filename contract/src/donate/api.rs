use near_sdk::{env, near};
use penny_jar_model::api::DonateApi;

use crate::{
    event::{emit, EventKind},
    Contract, ContractExt,
};

#[near]
impl DonateApi for Contract {
    #[payable]
    fn donate(&mut self, message: String) {
        let donor = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();

        // A rejection panics and reverts the call, returning the deposit.
        let event = self
            .ledger
            .donate(donor, amount, message)
            .unwrap_or_else(|err| env::panic_str(&err.to_string()));

        emit(EventKind::Donation(event));
    }
}
