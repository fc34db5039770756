use std::thread;

use restorecheck::checker::Summary;
use restorecheck::{CheckError, RestoreQueryChecker, Verdict, check};

#[test]
fn summary_of_accepted_query() {
    let checker = RestoreQueryChecker::new("SELECT * WHERE (int32 a > 54) AND ((int32 b < 10))");
    let summary = checker.validate().expect("query ok");
    assert_eq!(summary, Summary { restrictions: 2, max_depth: 2 });
    let summary = RestoreQueryChecker::new("SELECT *").validate().expect("query ok");
    assert_eq!(summary, Summary { restrictions: 0, max_depth: 0 });
}

#[test]
fn syntax_errors_carry_a_position() {
    let err = RestoreQueryChecker::new("SELECT *\nWHERE bogus x = 1").validate().unwrap_err();
    match err {
        CheckError::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected a syntax error, got {other:?}"),
    }
    assert!(matches!(
        RestoreQueryChecker::new("").validate(),
        Err(CheckError::Syntax { line: 1, col: 1, .. })
    ));
}

#[test]
fn repeated_checks_agree() {
    for query in [
        "SELECT * WHERE (int32 a > 54) AND ((int32 b < 10))",
        "SELECT * WHERE (int32 a > 54",
        "SELECT * WHERE int32) a > 54",
    ] {
        let checker = RestoreQueryChecker::new(query);
        assert_eq!(checker.check(), checker.check());
        assert_eq!(check(query), check(query));
        assert_eq!(checker.validate(), checker.validate());
    }
}

#[test]
fn concurrent_checks_need_no_coordination() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let query = if i % 2 == 0 {
                    "SELECT * WHERE (int32 a > 54) AND ((int32 b < 10))"
                } else {
                    "SELECT * WHERE (int32 a > 54"
                };
                (i, check(query))
            })
        })
        .collect();
    for handle in handles {
        let (i, verdict) = handle.join().expect("thread");
        let expected = if i % 2 == 0 { Verdict::Success } else { Verdict::BracketsNotValid };
        assert_eq!(verdict, expected);
    }
}

#[test]
fn verdicts_serialize_as_their_text() {
    let json = serde_json::to_string(&[Verdict::Success, Verdict::Error, Verdict::BracketsNotValid]).unwrap();
    assert_eq!(json, r#"["Success","Error","Error: brackets not valid"]"#);
}

#[test]
fn checker_keeps_its_query() {
    let query = "SELECT a WHERE bool b *";
    assert_eq!(RestoreQueryChecker::new(query).query(), query);
}

#[test]
fn read_failures_become_io_errors() {
    let err = CheckError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
    assert_eq!(err, CheckError::Io("stream did not contain valid UTF-8".to_string()));
    assert_eq!(Verdict::from(&err), Verdict::Error);
}
