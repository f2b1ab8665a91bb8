use super::*;
use crate::config::BuilderConfig;
use crate::statement::BuiltQuery;

#[test]
fn test_ids_are_sequential() {
    let mut registry = Registry::new();
    let a = registry.allocate("a").unwrap();
    let b = registry.allocate(2).unwrap();
    let c = registry.allocate(true).unwrap();

    assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
    assert_eq!(registry.next_id().unwrap(), 4);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_render_never_contains_the_value() {
    let mut registry = Registry::new();
    let hostile = "x'; DROP TABLE users; --";
    let p = registry.allocate(hostile).unwrap();

    let rendered = registry.render(&p).unwrap();
    assert_eq!(rendered, "$1");
    assert!(!rendered.contains("DROP"));
    assert_eq!(registry.value(&p).unwrap(), Some(&Value::from(hostile)));
}

#[test]
fn test_bound_values_follow_id_order() {
    let mut registry = Registry::new();
    let first = registry.reserve().unwrap();
    let second = registry.allocate("second").unwrap();
    registry.bind(&first, "first").unwrap();

    assert_eq!(
        registry.bound_values().unwrap(),
        vec![Value::from("first"), Value::from("second")]
    );
    assert!(registry.has_value(&second).unwrap());
}

#[test]
fn test_unbound_reservation_blocks_bound_values() {
    let mut registry = Registry::new();
    let p = registry.reserve().unwrap();
    registry.allocate("later").unwrap();

    assert!(!registry.has_value(&p).unwrap());
    assert!(registry.bound_values().unwrap_err().is_allocation_failure());
}

#[test]
fn test_double_bind_is_rejected() {
    let mut registry = Registry::new();
    let p = registry.reserve().unwrap();
    registry.bind(&p, 1).unwrap();

    let err = registry.bind(&p, 2).unwrap_err();
    assert!(err.is_allocation_failure());
    assert_eq!(registry.value(&p).unwrap(), Some(&Value::Int(1)));
}

#[test]
fn test_foreign_placeholder_is_rejected() {
    let mut ours = Registry::new();
    let mut theirs = Registry::new();
    ours.allocate("a").unwrap();
    let foreign = theirs.allocate("b").unwrap();

    // Same id, different registry.
    assert_eq!(foreign.id(), 1);
    assert!(!ours.contains(&foreign));
    assert!(ours.render(&foreign).is_err());
    assert!(ours.bind(&foreign, "c").is_err());
}

#[test]
fn test_reset_invalidates_old_tokens() {
    let mut registry = Registry::new();
    let old = registry.allocate("old").unwrap();
    registry.reset();

    assert!(registry.is_empty());
    let new = registry.allocate("new").unwrap();
    assert_eq!(new.id(), 1);
    assert!(registry.contains(&new));
    assert!(!registry.contains(&old));
    assert_eq!(registry.bound_values().unwrap(), vec![Value::from("new")]);
}

#[test]
fn test_capacity_is_enforced() {
    let config = BuilderConfig::new().with_max_placeholders(2);
    let mut registry = Registry::with_config(&config);
    registry.allocate(1).unwrap();
    registry.reserve().unwrap();

    assert!(registry.allocate(3).unwrap_err().is_allocation_failure());
    assert!(registry.reserve().is_err());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_custom_prefix_and_first_id() {
    let config = BuilderConfig::new().with_prefix(":p").with_first_id(10);
    let mut registry = Registry::with_config(&config);
    let a = registry.allocate("a").unwrap();
    let b = registry.allocate("b").unwrap();

    assert_eq!(a.to_string(), ":p10");
    assert_eq!(b.name(), ":p11");
    assert_eq!(b.prefix(), ":p");
    assert!(registry.contains(&b));
}

#[test]
fn test_sub_query_is_renumbered() {
    let mut registry = Registry::new();
    registry.allocate("documents").unwrap();

    let query = BuiltQuery::raw("tenant_id = $1 AND (level <= $2 OR $1 = 0)")
        .bind(7)
        .bind(3);
    let sub = registry.allocate_query(&query).unwrap();

    assert_eq!(sub.sql(), "tenant_id = $2 AND (level <= $3 OR $2 = 0)");
    assert_eq!(sub.to_string(), "(tenant_id = $2 AND (level <= $3 OR $2 = 0))");
    assert_eq!(sub.placeholders().len(), 2);
    assert_eq!(
        registry.bound_values().unwrap(),
        vec![Value::from("documents"), Value::Int(7), Value::Int(3)]
    );
}

#[test]
fn test_sub_query_crosses_prefixes() {
    let inner_config = BuilderConfig::new().with_prefix(":p").with_first_id(10);
    let mut inner = Registry::with_config(&inner_config);
    inner.allocate("ops").unwrap();
    let query = BuiltQuery::from_registry(
        "team = :p10".to_string(),
        inner.bound_values().unwrap(),
        &inner,
    );

    let mut outer = Registry::new();
    let sub = outer.allocate_query(&query).unwrap();
    assert_eq!(sub.sql(), "team = $1");
}

#[test]
fn test_sub_query_out_of_range_allocates_nothing() {
    let mut registry = Registry::new();
    registry.allocate("kept").unwrap();

    let query = BuiltQuery::raw("a = $1 AND b = $2").bind(1);
    let err = registry.allocate_query(&query).unwrap_err();

    assert!(err.is_allocation_failure());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_sub_query_respects_capacity() {
    let config = BuilderConfig::new().with_max_placeholders(2);
    let mut registry = Registry::with_config(&config);
    registry.allocate("a").unwrap();

    let query = BuiltQuery::raw("x = $1 AND y = $2").bind(1).bind(2);
    assert!(registry.allocate_query(&query).is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_scan_tokens() {
    let sql = "a = $1 AND b = $10 AND my_var$2 = x$3 AND c = $";
    let found: Vec<u32> = scan_tokens(sql, "$").into_iter().map(|(_, id)| id).collect();
    assert_eq!(found, vec![1, 10]);

    let tokens = scan_tokens("($1)", "$");
    assert_eq!(tokens, vec![(1..3, 1)]);
}

#[test]
fn test_clone_is_a_separate_lifetime() {
    let mut original = Registry::new();
    let kept = original.allocate("kept").unwrap();
    let copy = original.clone();

    assert_eq!(copy.bound_values().unwrap(), vec![Value::from("kept")]);
    assert!(original.contains(&kept));
    assert!(!copy.contains(&kept));
    assert!(copy.value(&kept).is_err());
}
