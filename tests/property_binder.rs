use azstore_config::{ConfigBinder, Settings, Violation};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const ACCOUNT_NAME_PROP: &str = "azure.storage.account-name";
const ACCOUNT_KEY_PROP: &str = "azure.storage.account-key";
const CONTAINER_NAME_PROP: &str = "azure.storage.container-name";
const USE_EMULATOR_PROP: &str = "azure.storage.use-emulator";
const EMULATOR_BLOB_HOST_PROP: &str = "azure.storage.emulator-blob-host";

const KNOWN_KEYS: [&str; 5] = [
    ACCOUNT_NAME_PROP,
    ACCOUNT_KEY_PROP,
    CONTAINER_NAME_PROP,
    USE_EMULATOR_PROP,
    EMULATOR_BLOB_HOST_PROP,
];

fn value() -> impl Strategy<Value = String> {
    "\\PC{1,40}"
}

fn unknown_key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(\\.[a-z-]{1,12}){0,3}"
        .prop_filter("must not be a recognised key", |k| !KNOWN_KEYS.contains(&k.as_str()))
}

fn credentials(name: &str, key: &str, container: &str) -> Settings {
    [
        (ACCOUNT_NAME_PROP, name),
        (ACCOUNT_KEY_PROP, key),
        (CONTAINER_NAME_PROP, container),
    ]
    .into_iter()
    .collect()
}

proptest! {
    /// Property: bound fields equal the input strings exactly
    #[test]
    fn prop_credentials_round_trip(
        name in value(),
        key in value(),
        container in value(),
    ) {
        let config = ConfigBinder::bind(&credentials(&name, &key, &container))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(config.account_name(), name.as_str());
        prop_assert_eq!(config.account_key(), key.as_str());
        prop_assert_eq!(config.container_name(), Some(container.as_str()));
        prop_assert!(!config.use_emulator());
    }

    /// Property: emulator flag and host are carried through
    #[test]
    fn prop_emulator_round_trip(
        name in value(),
        key in value(),
        host in value(),
    ) {
        let mut settings = credentials(&name, &key, "container");
        settings.insert(USE_EMULATOR_PROP, "true");
        settings.insert(EMULATOR_BLOB_HOST_PROP, host.clone());

        let config = ConfigBinder::bind(&settings)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert!(config.use_emulator());
        prop_assert_eq!(config.emulator_blob_host(), Some(host.as_str()));
    }

    /// Property: binding the same snapshot twice gives equal configs
    #[test]
    fn prop_bind_is_idempotent(
        name in value(),
        key in value(),
        container in value(),
    ) {
        let settings = credentials(&name, &key, &container);
        let first = ConfigBinder::bind(&settings);
        let second = ConfigBinder::bind(&settings);
        prop_assert_eq!(first, second);
    }

    /// Property: unknown keys never fail a bind and never change the result
    #[test]
    fn prop_unknown_keys_ignored(
        extra in proptest::collection::vec((unknown_key(), "\\PC{0,20}"), 0..8),
    ) {
        let base = credentials("fakeStorageAccountName", "ZmFrZUFjY291bnRLZXk=", "box");
        let mut noisy = base.clone();
        noisy.extend(extra);

        let expected = ConfigBinder::bind(&base)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let actual = ConfigBinder::bind(&noisy)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(actual, expected);
    }

    /// Property: anything other than true/false is rejected with the raw text
    #[test]
    fn prop_bad_boolean_rejected(raw in "[a-z0-9 ]{1,10}") {
        prop_assume!(!raw.eq_ignore_ascii_case("true") && !raw.eq_ignore_ascii_case("false"));

        let mut settings = credentials("acct", "a2V5", "box");
        settings.insert(USE_EMULATOR_PROP, raw.clone());

        let err = ConfigBinder::bind(&settings).expect_err("bad boolean must fail");
        let expected = Violation::InvalidBooleanFormat {
            field: "use-emulator",
            value: raw,
        };
        prop_assert!(err.contains(&expected));
    }
}

#[test]
fn test_documented_example() {
    let config = ConfigBinder::bind(&credentials(
        "fakeStorageAccountName",
        "ZmFrZUFjY291bnRLZXk=",
        "fakestoragecontainername",
    ))
    .unwrap();

    assert_eq!(config.account_name(), "fakeStorageAccountName");
    assert_eq!(config.account_key(), "ZmFrZUFjY291bnRLZXk=");
    assert_eq!(config.container_name(), Some("fakestoragecontainername"));
    assert!(!config.use_emulator());
    assert_eq!(config.emulator_blob_host(), None);
}

#[test]
fn test_both_empty_credentials_reported() {
    let settings = Settings::from_pairs([
        "azure.storage.account-name=",
        "azure.storage.account-key=",
    ])
    .unwrap();

    let err = ConfigBinder::bind(&settings).unwrap_err();

    assert!(err.contains(&Violation::EmptyValueNotAllowed { field: "account-name" }));
    assert!(err.contains(&Violation::EmptyValueNotAllowed { field: "account-key" }));
}
