//! Tests for the user and address records.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn sandy() -> User {
    let id = UserId::new(2);
    User::try_new(
        id,
        "sandy",
        Some("Sandy Cheeks".to_owned()),
        vec![
            Address::new(AddressId::new(2), "sandy@sqlalchemy.org", id),
            Address::new(AddressId::new(3), "sandy@squirrelpower.org", id),
        ],
    )
    .expect("addresses belong to sandy")
}

#[rstest]
fn user_dict_nests_addresses_under_legacy_key(sandy: User) {
    let dict = sandy.as_dict();

    assert_eq!(
        Value::Object(dict),
        json!({
            "id": 2,
            "name": "sandy",
            "fullname": "Sandy Cheeks",
            "adresses": [
                { "id": 2, "email_address": "sandy@sqlalchemy.org" },
                { "id": 3, "email_address": "sandy@squirrelpower.org" },
            ],
        })
    );
}

#[rstest]
fn user_dict_has_no_addresses_key_spelled_correctly(sandy: User) {
    assert!(sandy.as_dict().get("addresses").is_none());
}

#[rstest]
fn user_without_addresses_serialises_empty_list() {
    let patrick = User::try_new(UserId::new(3), "patrick", None, Vec::new())
        .expect("no addresses to check");
    let dict = patrick.as_dict();

    assert_eq!(dict.get("fullname"), Some(&Value::Null));
    assert_eq!(dict.get(USER_ADDRESSES_KEY), Some(&json!([])));
}

#[rstest]
fn address_dict_hides_owner_column(sandy: User) {
    for address in sandy.addresses() {
        let columns: Vec<_> = address.columns().into_iter().map(|(name, _)| name).collect();
        assert!(columns.contains(&"user_id"));

        let dict = address.as_dict();
        assert!(dict.get("user_id").is_none());
        assert!(dict.keys().all(|key| !key.contains("_id")));
    }
}

#[rstest]
fn try_new_rejects_foreign_addresses() {
    let stray = Address::new(AddressId::new(9), "stray@example.org", UserId::new(5));

    let err = User::try_new(UserId::new(1), "spongebob", None, vec![stray])
        .expect_err("address owned by another user");

    assert_eq!(
        err,
        AddressOwnershipError {
            address_id: AddressId::new(9),
            owner: UserId::new(5),
            user_id: UserId::new(1),
        }
    );
}

#[rstest]
fn display_matches_repr_format(sandy: User) {
    assert_eq!(
        sandy.to_string(),
        r#"User(id=2, name="sandy", fullname=Some("Sandy Cheeks"))"#
    );
    let first = sandy.addresses().first().expect("sandy has addresses");
    assert_eq!(
        first.to_string(),
        r#"Address(id=2, email_address="sandy@sqlalchemy.org")"#
    );
}

#[rstest]
fn new_user_builder_keeps_address_order() {
    let user = NewUser::new("sandy")
        .with_fullname("Sandy Cheeks")
        .with_address(NewAddress::new("a@example.org"))
        .with_address(NewAddress::new("b@example.org"));

    let emails: Vec<_> = user.addresses().iter().map(NewAddress::email_address).collect();
    assert_eq!(emails, ["a@example.org", "b@example.org"]);
    assert_eq!(user.fullname(), Some("Sandy Cheeks"));
}

#[rstest]
fn user_dict_keys_follow_column_order(sandy: User) {
    let dict = sandy.as_dict();
    let keys: Vec<&str> = dict.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["id", "name", "fullname", USER_ADDRESSES_KEY]);
    let address = dict[USER_ADDRESSES_KEY][0]
        .as_object()
        .expect("address is an object");
    let address_keys: Vec<&str> = address.keys().map(String::as_str).collect();
    assert_eq!(address_keys, vec!["id", "email_address"]);
}
