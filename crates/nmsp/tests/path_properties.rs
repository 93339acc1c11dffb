use nmsp::{at_path, at_path_mut, ensure_path, extend, resolve, Node, ResolveMode};
use proptest::prelude::*;
use serde_json::{json, Value};

// A small alphabet so generated paths often run into generated keys.
fn segment() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn dotted_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..6).prop_map(|segments| segments.join("."))
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    let value = leaf().prop_recursive(4, 32, 4, |inner| {
        prop::collection::btree_map(segment(), inner, 0..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect()))
    });
    prop::collection::btree_map(segment(), value, 0..5)
        .prop_map(|entries| entries.into_iter().collect::<Node>())
}

proptest! {
    #[test]
    fn created_path_is_found(path in dotted_path(), mut root in tree()) {
        ensure_path(&path, &mut root).insert("marker".to_string(), json!(true));
        let found = at_path(&path, &root).and_then(Value::as_object);
        prop_assert_eq!(found.and_then(|n| n.get("marker")), Some(&json!(true)));
    }

    #[test]
    fn read_mode_never_mutates(path in dotted_path(), mut root in tree()) {
        let before = root.clone();
        let expected = at_path(&path, &before).cloned();

        let found = resolve(&path, &mut root, ResolveMode::Read).map(|v| v.clone());
        prop_assert_eq!(&found, &expected);
        prop_assert_eq!(&root, &before);

        let found = at_path_mut(&path, &mut root).map(|v| v.clone());
        prop_assert_eq!(&found, &expected);
        prop_assert_eq!(&root, &before);
    }

    #[test]
    fn read_mode_stops_at_missing_or_terminal_prefix(path in dotted_path(), mut root in tree()) {
        let segments: Vec<&str> = path.split('.').collect();
        let blocked = (1..segments.len()).any(|len| {
            let prefix = segments[..len].join(".");
            !matches!(at_path(&prefix, &root), Some(Value::Object(_)))
        });
        if blocked {
            prop_assert!(resolve(&path, &mut root, ResolveMode::Read).is_none());
            prop_assert!(at_path_mut(&path, &mut root).is_none());
        }
    }

    #[test]
    fn merge_keeps_destination_only_keys(mut dest in tree(), src in tree()) {
        let before = dest.clone();
        extend(&mut dest, &src);
        for (key, value) in &before {
            if !src.contains_key(key) {
                prop_assert_eq!(dest.get(key), Some(value));
            }
        }
        for (key, value) in &src {
            if !value.is_object() {
                prop_assert_eq!(dest.get(key), Some(value));
            }
        }
    }

    #[test]
    fn merge_into_empty_copies_source(src in tree()) {
        let mut dest = Node::new();
        extend(&mut dest, &src);
        prop_assert_eq!(dest, src);
    }

    #[test]
    fn merge_is_idempotent(mut dest in tree(), src in tree()) {
        extend(&mut dest, &src);
        let once = dest.clone();
        extend(&mut dest, &src);
        prop_assert_eq!(dest, once);
    }
}
