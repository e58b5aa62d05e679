use near_sdk::near;
use penny_jar_model::api::InfoApi;

use crate::{Contract, ContractExt, PACKAGE_NAME, VERSION};

#[near]
impl InfoApi for Contract {
    fn contract_version(&self) -> String {
        format!("{PACKAGE_NAME}-{VERSION}")
    }
}

#[cfg(test)]
mod test {
    use penny_jar_model::api::InfoApi;

    use crate::common::testing::Context;

    #[test]
    fn test_contract_version() {
        let context = Context::new("test");
        assert_eq!(context.contract().contract_version(), "penny_jar-1.0.0");
    }
}
