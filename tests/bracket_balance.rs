use restorecheck::{CheckError, RestoreQueryChecker, Verdict, check};

#[test]
fn pairing_across_restrictions_is_accepted() {
    // the open belongs to `a`, the close to `b`; only the running count matters
    assert_eq!(check("SELECT * WHERE (int32 a ! AND int32 b !)"), Verdict::Success);
    assert_eq!(check("SELECT * WHERE ((int32 a !) AND int32 b !)"), Verdict::Success);
}

#[test]
fn close_before_any_open_is_error_even_when_counts_match() {
    let query = "SELECT * WHERE (int32 a !)) AND (int32 b !";
    assert_eq!(check(query), Verdict::Error);
    let err = RestoreQueryChecker::new(query).validate().unwrap_err();
    assert_eq!(err, CheckError::UnmatchedClose { line: 1, col: 27 });
}

#[test]
fn leftover_opens_are_counted() {
    let err = RestoreQueryChecker::new("SELECT * WHERE (((int32 a !) AND int32 b !")
        .validate()
        .unwrap_err();
    assert_eq!(err, CheckError::UnbalancedOpen { unclosed: 2, line: 1, col: 16 });
    assert_eq!(Verdict::from(&err), Verdict::BracketsNotValid);
}

#[test]
fn deep_nesting_is_checked_in_linear_time() {
    // each bracket's position comes from the line index, not a rescan of the input
    let depth = 50_000;
    let query = format!("SELECT * WHERE {}int32 a !{}", "(".repeat(depth), ")".repeat(depth));
    let summary = RestoreQueryChecker::new(&query).validate().expect("query ok");
    assert_eq!(summary.max_depth, depth);
    let unbalanced = format!("SELECT * WHERE {}int32 a !{}", "(".repeat(depth), ")".repeat(depth - 1));
    assert_eq!(check(&unbalanced), Verdict::BracketsNotValid);
}

// Success iff opens equal closes and the running count never goes negative.
#[test]
fn verdict_follows_running_count() {
    let shapes: [(usize, usize, usize, usize); 10] = [
        (0, 0, 0, 0),
        (1, 1, 0, 0),
        (1, 0, 0, 1),
        (2, 0, 1, 1),
        (0, 1, 1, 0),
        (1, 0, 1, 0),
        (0, 0, 1, 0),
        (3, 1, 0, 2),
        (1, 2, 1, 0),
        (2, 1, 0, 2),
    ];
    for (open_a, close_a, open_b, close_b) in shapes {
        let query = format!(
            "SELECT * WHERE {}int32 a !{} OR {}int32 b !{}",
            "(".repeat(open_a),
            ")".repeat(close_a),
            "(".repeat(open_b),
            ")".repeat(close_b),
        );
        let mut depth: isize = 0;
        let mut went_negative = false;
        for step in [open_a as isize, -(close_a as isize), open_b as isize, -(close_b as isize)] {
            if step < 0 {
                for _ in 0..-step {
                    depth -= 1;
                    went_negative |= depth < 0;
                }
            } else {
                depth += step;
            }
        }
        let expected = if went_negative {
            Verdict::Error
        } else if depth == 0 {
            Verdict::Success
        } else {
            Verdict::BracketsNotValid
        };
        assert_eq!(check(&query), expected, "query {query}");
    }
}
