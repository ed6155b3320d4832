//! Session behavior across edits

use std::thread;

use metasyntax::foundation::ErrorKind;
use metasyntax::runtime::{Applied, DEFAULT_DESCRIPTION, Session};

#[test]
fn edits_replace_rules() {
    let mut session = Session::with_description(DEFAULT_DESCRIPTION).unwrap();
    assert!(matches!(
        session.update_description(r#"Number { Normal r"[0-9]+" }"#),
        Applied::Installed
    ));
    assert_eq!(session.tokenize("12 if")[0].label(), "Number");
    assert_eq!(session.tokenize("if").len(), 1);
}

#[test]
fn transient_breakage_keeps_last_good_rules() {
    let mut session = Session::with_description(DEFAULT_DESCRIPTION).unwrap();
    // A user typing `Identifier {` mid-edit
    for partial in ["Identifier {", "Identifier { Spec", "Identifier { Special [ If r\"i"] {
        assert!(matches!(session.update_description(partial), Applied::Rejected(_)));
        assert_eq!(session.tokenize("if")[0].label(), "Identifier[If]");
    }
}

#[test]
fn compiles_off_thread_apply_last_writer_wins() {
    let mut session = Session::new();
    let requests: Vec<_> = (0..4)
        .map(|i| session.begin(format!(r#"Gen{i} {{ Normal r"x" }}"#)))
        .collect();

    let compilations: Vec<_> = requests
        .into_iter()
        .map(|request| thread::spawn(move || request.compile()))
        .map(|handle| handle.join().unwrap())
        .collect();

    // Apply newest first; everything older is superseded
    let mut outcomes = Vec::new();
    for compilation in compilations.into_iter().rev() {
        outcomes.push(session.apply(compilation));
    }
    assert!(matches!(outcomes[0], Applied::Installed));
    assert!(outcomes[1..].iter().all(|o| matches!(o, Applied::Superseded)));
    assert_eq!(session.tokenize("x")[0].label(), "Gen3");
    assert_eq!(session.generation(), Some(4));
}

#[test]
fn rejection_reports_structured_error() {
    let mut session = Session::new();
    let Applied::Rejected(err) = session.update_description(r#"Foo { Weird r"x" }"#) else {
        panic!("expected rejection");
    };
    assert!(matches!(err.kind, ErrorKind::UnsupportedCategory { .. }));
}
