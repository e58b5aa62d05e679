use near_sdk::{env, log, near, serde::Serialize, serde_json};
use penny_jar_model::{DonationEvent, WithdrawalEvent};

#[cfg(test)]
use crate::common::test_data;
use crate::{PACKAGE_NAME, VERSION};

#[derive(Debug, Clone, PartialEq)]
#[near(serializers = [json])]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum EventKind {
    Donation(DonationEvent),
    Withdrawal(WithdrawalEvent),
}

#[derive(Serialize, Debug)]
#[serde(crate = "near_sdk::serde")]
struct PennyJarEvent {
    standard: &'static str,
    version: &'static str,
    #[serde(flatten)]
    event_kind: EventKind,
}

impl From<EventKind> for PennyJarEvent {
    fn from(event_kind: EventKind) -> Self {
        Self {
            standard: PACKAGE_NAME,
            version: VERSION,
            event_kind,
        }
    }
}

#[mutants::skip]
#[cfg(not(test))]
pub(crate) fn emit(event: EventKind) {
    log!("{}", PennyJarEvent::from(event).to_json_event_string());
}

#[mutants::skip]
#[cfg(test)]
pub(crate) fn emit(event: EventKind) {
    test_data::store_event(&event);

    log!("{}", PennyJarEvent::from(event).to_json_event_string());
}

impl PennyJarEvent {
    fn to_json_string(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|err| env::panic_str(&format!("Failed to serialize PennyJarEvent: {err}")))
    }

    fn to_json_event_string(&self) -> String {
        format!("EVENT_JSON:{}", self.to_json_string())
    }
}

#[cfg(test)]
mod test {
    use near_sdk::AccountId;
    use penny_jar_model::{DonationEvent, WithdrawalEvent};
    use rstest::rstest;

    use crate::{
        common::testing::accounts::{alice, bob},
        event::{EventKind, PennyJarEvent},
    };

    #[rstest]
    fn donation_event_to_string(alice: AccountId) {
        let event = PennyJarEvent::from(EventKind::Donation(DonationEvent::new(
            alice,
            100,
            "have a penny".to_string(),
        )))
        .to_json_event_string();

        assert_eq!(
            event,
            r#"EVENT_JSON:{"standard":"penny_jar","version":"1.0.0","event":"donation","data":{"by":"alice.near","amount":"100","message":"have a penny"}}"#
        );
    }

    #[rstest]
    fn withdrawal_event_to_string(bob: AccountId) {
        let event =
            PennyJarEvent::from(EventKind::Withdrawal(WithdrawalEvent::new(bob, 50))).to_json_event_string();

        assert_eq!(
            event,
            r#"EVENT_JSON:{"standard":"penny_jar","version":"1.0.0","event":"withdrawal","data":{"by":"bob.near","amount":"50"}}"#
        );
    }
}
