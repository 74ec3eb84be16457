use foscia_shared::transformer::{boxed, identity, Transformer};

#[test]
fn closures_are_transformers() {
    let trim = |s: &str| s.trim().to_string();
    assert_eq!(trim.transform("  hi "), "hi");
}

#[test]
fn composition_runs_in_order() {
    let parse = |s: String| s.parse::<i64>().unwrap_or(0);
    let double = |n: i64| n * 2;
    let pipeline = parse.then(double).then(|n: i64| format!("#{n}"));
    assert_eq!(pipeline.transform("21".to_string()), "#42");
    assert_eq!(pipeline.transform("nope".to_string()), "#0");
}

#[test]
fn identity_returns_its_input() {
    assert_eq!(identity::<u8>().transform(9), 9);
    let keep = identity::<String>().then(|s: String| s.len());
    assert_eq!(keep.transform("four".to_string()), 4);
}

#[test]
fn boxed_transformers_are_shareable() {
    let upper = boxed(|s: String| s.to_uppercase());
    let handles: Vec<_> = (0..2)
        .map(|i| {
            let upper = upper.clone();
            std::thread::spawn(move || upper(format!("t{i}")))
        })
        .collect();
    let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(out, vec!["T0", "T1"]);
}
