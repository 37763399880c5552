use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;
use tablecraft_schema::node::TypeNames;

fn methods(ops: &[ConditionOp]) -> BTreeSet<&str> {
    ops.iter().map(|op| op.method.as_str()).collect()
}

fn kinds(ops: &[ConditionOp]) -> Vec<ConditionKind> {
    ops.iter().map(|op| op.kind).collect()
}

const ALL_KINDS: [StorageKind; 9] = [
    StorageKind::Blob,
    StorageKind::Boolean,
    StorageKind::Byte,
    StorageKind::Double,
    StorageKind::Float,
    StorageKind::Int,
    StorageKind::Long,
    StorageKind::Short,
    StorageKind::Text,
];

fn arb_column() -> impl Strategy<Value = Column> {
    (
        prop::sample::select(ALL_KINDS.to_vec()),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "[a-z][a-zA-Z]{0,8}",
    )
        .prop_map(|(kind, nullable, indexed, primary_key, name)| Column {
            nullable,
            indexed,
            primary_key,
            ..Column::new(name, kind)
        })
}

#[test]
fn scenario_primary_key_and_nullable_text() {
    let table = Table::new(
        "user",
        TypeNames::for_model("User"),
        vec![
            Column::new("id", StorageKind::Long).primary_key().auto_id(),
            Column::new("email", StorageKind::Text).indexed().nullable(),
        ],
    );
    let ops = ConditionGen(&table).ops();

    assert_eq!(
        methods(&ops),
        BTreeSet::from([
            "find",
            "email_eq",
            "email_not_eq",
            "email_in",
            "email_not_in",
            "email_is_null",
            "email_is_not_null",
        ])
    );
    assert!(ops.iter().all(|op| !matches!(
        op.kind,
        ConditionKind::Lt | ConditionKind::Le | ConditionKind::Gt | ConditionKind::Ge
    )));
}

#[test]
fn scenario_non_nullable_indexed_int() {
    let score = Column::new("score", StorageKind::Int).indexed();
    let ops = column_ops(&score);

    assert_eq!(
        methods(&ops),
        BTreeSet::from([
            "score_eq",
            "score_not_eq",
            "score_in",
            "score_not_in",
            "score_lt",
            "score_le",
            "score_gt",
            "score_ge",
        ])
    );
}

#[test]
fn ops_follow_rule_priority_order() {
    let column = Column::new("rank", StorageKind::Short).indexed().nullable();

    assert_eq!(
        kinds(&column_ops(&column)),
        vec![
            ConditionKind::IsNull,
            ConditionKind::IsNotNull,
            ConditionKind::Eq,
            ConditionKind::NotEq,
            ConditionKind::In,
            ConditionKind::NotIn,
            ConditionKind::Lt,
            ConditionKind::Le,
            ConditionKind::Gt,
            ConditionKind::Ge,
        ]
    );
}

#[test]
fn sql_fragments_use_quoted_resolved_column_name() {
    let column = Column::new("pageCount", StorageKind::Int)
        .indexed()
        .column_name("page count");
    let ops = column_ops(&column);
    let by_kind = |kind| {
        ops.iter()
            .find(|op| op.kind == kind)
            .map(|op| op.sql.as_str())
    };

    assert_eq!(ops[0].method, "page_count_eq");
    assert_eq!(by_kind(ConditionKind::Eq), Some("\"page count\" = ?"));
    assert_eq!(by_kind(ConditionKind::NotEq), Some("\"page count\" <> ?"));
    assert_eq!(by_kind(ConditionKind::In), Some("\"page count\""));
    assert_eq!(by_kind(ConditionKind::Le), Some("\"page count\" <= ?"));
    assert_eq!(by_kind(ConditionKind::Ge), Some("\"page count\" >= ?"));
}

#[test]
fn find_binds_primary_key_equality() {
    let id = Column::new("id", StorageKind::Long).primary_key();
    let ops = column_ops(&id);

    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].sql, "\"id\" = ?");
    assert_eq!(
        ops[0].param,
        Some(ParamSpec {
            name: "id".to_string(),
            kind: StorageKind::Long,
            nullability: ParamNullability::Unannotated,
            collection: false,
        })
    );
}

#[test]
fn param_nullability_mirrors_column() {
    let primitive = Column::new("age", StorageKind::Int).indexed();
    let boxed = Column::new("age", StorageKind::Int).indexed().nullable();
    let text = Column::new("name", StorageKind::Text).indexed();
    let nullable_text = Column::new("name", StorageKind::Text).indexed().nullable();

    assert_eq!(
        ParamNullability::for_column(&primitive),
        ParamNullability::Unannotated
    );
    assert_eq!(
        ParamNullability::for_column(&boxed),
        ParamNullability::Nullable
    );
    assert_eq!(ParamNullability::for_column(&text), ParamNullability::NonNull);
    assert_eq!(
        ParamNullability::for_column(&nullable_text),
        ParamNullability::Nullable
    );
}

#[test]
fn collection_params_are_non_null() {
    let column = Column::new("tag", StorageKind::Text).indexed().nullable();
    let ops = column_ops(&column);
    let in_op = ops
        .iter()
        .find(|op| op.kind == ConditionKind::In)
        .and_then(|op| op.param.as_ref())
        .expect("in op has a param");

    assert!(in_op.collection);
    assert_eq!(in_op.nullability, ParamNullability::NonNull);
}

#[test]
fn unindexed_columns_yield_nothing() {
    assert!(column_ops(&Column::new("bio", StorageKind::Text).nullable()).is_empty());
}

#[test]
fn rendered_trait_is_stable_across_runs() {
    let table = Table::new(
        "user",
        TypeNames::for_model("User"),
        vec![
            Column::new("id", StorageKind::Long).primary_key(),
            Column::new("score", StorageKind::Int).indexed(),
        ],
    );

    let first = ConditionGen(&table).generate().to_string();
    let second = ConditionGen(&table).generate().to_string();

    assert_eq!(first, second);
    assert!(first.contains("pub trait UserConditions"));
    assert!(first.contains("fn score_ge"));
    assert!(first.contains("fn find"));
}

#[test]
fn nullable_params_render_as_option() {
    let spec = ParamSpec {
        name: "email".to_string(),
        kind: StorageKind::Text,
        nullability: ParamNullability::Nullable,
        collection: false,
    };

    assert_eq!(
        param_type(&spec).to_string(),
        quote!(::std::option::Option<::std::string::String>).to_string()
    );
}

#[test]
fn non_null_text_params_accept_into_string() {
    let spec = ParamSpec {
        name: "email".to_string(),
        kind: StorageKind::Text,
        nullability: ParamNullability::NonNull,
        collection: false,
    };

    assert!(spec.is_into_string());
    assert_eq!(
        param_type(&spec).to_string(),
        quote!(impl ::std::convert::Into<::std::string::String>).to_string()
    );
}

#[test]
fn text_collections_and_other_kinds_keep_their_element_type() {
    let collection = ParamSpec {
        name: "values".to_string(),
        kind: StorageKind::Text,
        nullability: ParamNullability::NonNull,
        collection: true,
    };
    let blob = ParamSpec {
        name: "data".to_string(),
        kind: StorageKind::Blob,
        nullability: ParamNullability::NonNull,
        collection: false,
    };

    assert!(!collection.is_into_string());
    assert_eq!(
        param_type(&collection).to_string(),
        quote!(impl ::std::iter::IntoIterator<Item = ::std::string::String>).to_string()
    );
    assert_eq!(
        param_type(&blob).to_string(),
        quote!(::std::vec::Vec<u8>).to_string()
    );
}

#[test]
fn text_condition_converts_before_binding() {
    let table = Table::new(
        "user",
        TypeNames::for_model("User"),
        vec![Column::new("email", StorageKind::Text).indexed()],
    );

    let source: String = ConditionGen(&table)
        .generate()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    assert!(source.contains(
        "fnemail_eq(self,email:impl::std::convert::Into<::std::string::String>)->Self{letemail:::std::string::String=::std::convert::Into::into(email);"
    ));
}

fn arb_indexed_column() -> impl Strategy<Value = Column> {
    arb_column().prop_map(|column| Column {
        indexed: true,
        primary_key: false,
        ..column
    })
}

proptest! {
    #[test]
    fn primary_key_is_exactly_find(column in arb_column()) {
        let column = Column { primary_key: true, ..column };
        prop_assert_eq!(kinds(&column_ops(&column)), vec![ConditionKind::Find]);
    }

    #[test]
    fn nullable_columns_get_parameterless_null_checks(column in arb_indexed_column()) {
        let column = Column { nullable: true, ..column };
        let ops = column_ops(&column);
        for kind in [ConditionKind::IsNull, ConditionKind::IsNotNull] {
            let op = ops.iter().find(|op| op.kind == kind);
            prop_assert!(op.is_some());
            prop_assert!(op.and_then(|op| op.param.as_ref()).is_none());
        }
    }

    #[test]
    fn non_nullable_columns_get_no_null_checks(column in arb_indexed_column()) {
        let column = Column { nullable: false, ..column };
        let ks = kinds(&column_ops(&column));
        prop_assert!(!ks.contains(&ConditionKind::IsNull));
        prop_assert!(!ks.contains(&ConditionKind::IsNotNull));
    }

    #[test]
    fn equality_ops_exist_for_indexed_columns(column in arb_indexed_column()) {
        let ks = kinds(&column_ops(&column));
        for kind in [
            ConditionKind::Eq,
            ConditionKind::NotEq,
            ConditionKind::In,
            ConditionKind::NotIn,
        ] {
            prop_assert!(ks.contains(&kind));
        }
    }

    #[test]
    fn ordering_ops_only_for_numeric_kinds(column in arb_indexed_column()) {
        let ks = kinds(&column_ops(&column));
        for kind in [ConditionKind::Lt, ConditionKind::Le, ConditionKind::Gt, ConditionKind::Ge] {
            prop_assert_eq!(ks.contains(&kind), column.kind.is_numeric());
        }
    }

    #[test]
    fn derivation_is_deterministic(column in arb_column()) {
        prop_assert_eq!(column_ops(&column), column_ops(&column));
    }
}
