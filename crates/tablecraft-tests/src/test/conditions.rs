use super::*;
use crate::db::{GameDatabase, GuildConditions, PlayerConditions};
use tablecraft::core::Conditional;

#[test]
fn empty_in_matches_nothing() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let selector = db.select_from_player().score_in(Vec::new());

    assert!(selector.to_sql().ends_with("WHERE (1 = 0)"));
    assert!(selector.params().is_empty());
}

#[test]
fn empty_not_in_matches_everything() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let deleter = db.delete_from_player().guild_not_in(Vec::new());

    assert_eq!(deleter.to_sql(), "DELETE FROM \"player\" WHERE (1 = 1)");
}

#[test]
fn nullable_numeric_takes_an_optional_parameter() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let selector = db
        .select_from_player()
        .rating_gt(Some(2.5))
        .rating_is_not_null();
    let sql = selector.to_sql();

    assert_eq!(selector.params(), [Value::Real(2.5)]);
    assert!(sql.ends_with("WHERE (\"rating\" > ?) AND (\"rating\" IS NOT NULL)"));
}

#[test]
fn boolean_column_gets_equality_and_membership() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let selector = db
        .select_from_guild()
        .active_eq(true)
        .active_not_in([false]);
    let sql = selector.to_sql();

    assert!(sql.ends_with("WHERE (\"active\" = ?) AND (\"active\" NOT IN (?))"));
    assert_eq!(selector.params(), [Value::Integer(1), Value::Integer(0)]);
}

#[test]
fn guild_find_uses_the_guild_primary_key() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let deleter = db.relation_of_guild().deleter().find(9);

    assert_eq!(deleter.to_sql(), "DELETE FROM \"guild\" WHERE (\"id\" = ?)");
}

#[test]
fn text_conditions_accept_borrowed_and_owned_strings() {
    let conn = connection();
    let db = GameDatabase::new(&conn);
    let owned = String::from("bo");

    let selector = db.select_from_player().name_eq("ada").name_not_eq(owned);

    assert_eq!(
        selector.params(),
        [Value::Text("ada".to_string()), Value::Text("bo".to_string())]
    );
}

#[test]
fn generated_conditions_mix_with_raw_fragments() {
    let conn = connection();
    let db = GameDatabase::new(&conn);

    let selector = db
        .select_from_player()
        .name_eq("ada")
        .where_("\"score\" % 2 = ?", [Value::Integer(0)]);

    assert_eq!(selector.conditions().len(), 2);
    assert_eq!(
        selector.params(),
        [Value::Text("ada".to_string()), Value::Integer(0)]
    );
}
