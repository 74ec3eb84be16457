use foscia_shared::optional::Optional;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Patch {
    #[serde(default, skip_serializing_if = "Optional::is_undefined")]
    title: Optional<String>,
    #[serde(default, skip_serializing_if = "Optional::is_undefined")]
    views: Optional<u32>,
}

#[test]
fn accepts_value_and_both_markers() {
    let present: Optional<u32> = 3.into();
    let null: Optional<u32> = None.into();
    let undefined: Optional<u32> = Optional::default();
    assert!(present.is_present());
    assert!(null.is_null() && null.is_absent());
    assert!(undefined.is_undefined() && undefined.is_absent());
    assert_ne!(null, undefined, "the two absence markers stay distinct");
}

#[test]
fn conversions() {
    assert_eq!(Optional::Present(2).into_option(), Some(2));
    assert_eq!(Optional::<u8>::Null.into_option(), None);
    assert_eq!(Option::<u8>::from(Optional::Undefined), None);
    assert_eq!(Optional::Present(2).map(|v| v * 10), Optional::Present(20));
    assert_eq!(Optional::<i32>::Undefined.map(|v| v * 10), Optional::Undefined);
    assert_eq!(Optional::<i32>::Null.unwrap_or(7), 7);
    assert_eq!(Optional::Present("x".to_string()).as_ref(), Optional::Present(&"x".to_string()));
}

#[test]
fn missing_and_null_fields_differ() {
    let missing: Patch = serde_json::from_str(r#"{"views": 4}"#).unwrap();
    assert_eq!(missing.title, Optional::Undefined);
    assert_eq!(missing.views, Optional::Present(4));
    let nulled: Patch = serde_json::from_str(r#"{"title": null}"#).unwrap();
    assert_eq!(nulled.title, Optional::Null);
    assert_eq!(nulled.views, Optional::Undefined);
}

#[test]
fn serializes_markers_as_null_or_nothing() {
    let patch = Patch {
        title: Optional::Null,
        views: Optional::Undefined,
    };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":null}"#);
    let patch = Patch {
        title: Optional::Present("Hi".to_string()),
        views: Optional::Present(1),
    };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":"Hi","views":1}"#);
}
