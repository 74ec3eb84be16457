use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use foscia_shared::constructor::{boxed, default_constructor, Constructor};
use foscia_shared::value::Value;

#[test]
fn plain_values_resolve_to_themselves() {
    let value = Value::plain(5);
    assert!(!value.is_factory());
    assert_eq!(value.resolve(), 5);
    let converted: Value<&str> = "x".into();
    assert_eq!(converted.resolve(), "x");
}

#[test]
fn factories_run_only_on_resolve() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let value = Value::factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        vec![1, 2]
    });
    assert!(value.is_factory());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "factory must be lazy");
    assert_eq!(value.resolve(), vec![1, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn debug_hides_the_factory() {
    assert_eq!(format!("{:?}", Value::plain(1)), "Plain(1)");
    assert_eq!(format!("{:?}", Value::factory(|| 1)), "Factory(..)");
}

#[derive(Debug, Default, PartialEq)]
struct Post {
    title: String,
    draft: bool,
}

#[test]
fn constructors_build_fresh_instances() {
    let new_post = || Post {
        title: "untitled".to_string(),
        draft: true,
    };
    let first = new_post.construct();
    let second = new_post.construct();
    assert_eq!(first, second);
    assert_eq!(default_constructor::<Post>().construct(), Post::default());
    let shared = boxed(|| 3_u8);
    let copy = Arc::clone(&shared);
    assert_eq!(shared() + copy(), 6);
}
