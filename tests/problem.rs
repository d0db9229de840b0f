use std::path::PathBuf;

use num_bigint::BigInt;
use secret_recovery::error::{DecodeError, LoadError, ReconstructionError, SolveError, Stage};
use secret_recovery::problem::{Import, Problem, ProblemSet, ShareRecord, Solver, SolverConfig};
use secret_recovery::recovery::selection::QuorumPolicy;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn solve_testcase1() {
    let set = ProblemSet::import(data("testcase1.json")).unwrap();
    assert_eq!(set.len(), 1);

    let problem = &set.problems()[0];
    assert_eq!((problem.n, problem.k), (4, 3));
    assert_eq!(problem.shares[1], ShareRecord::new("2", "2", "111"));

    let secret = Solver::default().solve(problem).unwrap();
    assert_eq!(secret, BigInt::from(3));
}

#[test]
fn solve_testcase2_beyond_64_bits() {
    let set = ProblemSet::import(data("testcase2.json")).unwrap();
    let secret = Solver::default().solve(&set.problems()[0]).unwrap();

    let expected: BigInt = "79836264049851000123456789".parse().unwrap();
    assert_eq!(secret, expected);
}

#[test]
fn shares_keep_document_order() {
    let set = ProblemSet::import(data("unordered.json")).unwrap();
    let problem = &set.problems()[0];

    let indices: Vec<_> = problem.shares.iter().map(|s| s.index.as_str()).collect();
    assert_eq!(indices, ["10", "2", "3", "1"]);

    // The last share is inconsistent and lies outside the first three.
    assert_eq!(Solver::default().solve(problem).unwrap(), BigInt::from(3));
}

#[test]
fn batch_failures_are_isolated() {
    let set = ProblemSet::import(data("batch.json")).unwrap();
    assert_eq!(set.len(), 3);

    let results = Solver::default().solve_all(set.problems());
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].as_ref().unwrap(), &BigInt::from(3));

    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.stage(), Stage::Decode);
    assert!(matches!(
        err,
        SolveError::Decode {
            index,
            source: DecodeError::InvalidDigit { digit: '2', .. },
        } if index == "2"
    ));

    let expected: BigInt = "79836264049851000123456789".parse().unwrap();
    assert_eq!(results[2].as_ref().unwrap(), &expected);
}

#[test]
fn import_missing_file() {
    let err = ProblemSet::import(data("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn import_rejects_missing_threshold() {
    let err = ProblemSet::import(data("missing_k.json")).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn import_rejects_structural_errors() {
    let cases: [&[u8]; 4] = [
        b"not json",
        br#"{ "1": { "base": "10", "value": "4" } }"#,
        br#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "10" } }"#,
        br#"{ "test_cases": [ { "keys": { "n": 1, "k": 1 }, "1": 5 } ] }"#,
    ];

    for data in cases {
        assert!(matches!(
            ProblemSet::from_slice(data),
            Err(LoadError::Malformed(_))
        ));
    }
}

#[test]
fn parse_share_record() {
    let share = ShareRecord::new("6", "4", "213").parse().unwrap();
    assert_eq!((share.index, share.base, share.value.as_str()), (6, 4, "213"));

    assert!(matches!(
        ShareRecord::new("0", "10", "1").parse(),
        Err(SolveError::InvalidIndex { .. })
    ));
    assert!(matches!(
        ShareRecord::new("-1", "10", "1").parse(),
        Err(SolveError::InvalidIndex { .. })
    ));
    assert!(matches!(
        ShareRecord::new("1", "ten", "1").parse(),
        Err(SolveError::MalformedBase { .. })
    ));
}

#[test]
fn solve_rejects_n_smaller_than_k() {
    let problem = Problem::new(2, 3, vec![
        ShareRecord::new("1", "10", "4"),
        ShareRecord::new("2", "10", "7"),
        ShareRecord::new("3", "10", "12"),
    ]);

    let err = Solver::default().solve(&problem).unwrap_err();
    assert_eq!(err, SolveError::InconsistentCounts { n: 2, k: 3 });
    assert_eq!(err.stage(), Stage::Interpolation);
}

#[test]
fn solve_reports_interpolation_errors() {
    let problem = Problem::new(4, 4, vec![
        ShareRecord::new("1", "10", "4"),
        ShareRecord::new("2", "10", "7"),
        ShareRecord::new("3", "10", "12"),
    ]);

    let err = Solver::default().solve(&problem).unwrap_err();
    assert_eq!(
        err,
        SolveError::Reconstruction(ReconstructionError::InsufficientPoints {
            required: 4,
            available: 3
        })
    );
    assert_eq!(err.stage(), Stage::Interpolation);
}

#[test]
fn solve_rejects_invalid_base() {
    let problem = Problem::new(1, 1, vec![ShareRecord::new("1", "40", "4")]);

    let err = Solver::default().solve(&problem).unwrap_err();
    assert_eq!(
        err,
        SolveError::Decode {
            index: "1".to_string(),
            source: DecodeError::InvalidBase(40)
        }
    );
}

#[test]
fn solver_config_is_honoured() {
    let problem = Problem::new(4, 3, vec![
        ShareRecord::new("1", "10", "4"),
        ShareRecord::new("1", "10", "4"),
        ShareRecord::new("2", "2", "111"),
        ShareRecord::new("3", "16", "c"),
    ]);

    let strict = Solver::default();
    assert!(matches!(
        strict.solve(&problem),
        Err(SolveError::Reconstruction(
            ReconstructionError::DuplicateXCoordinate(_)
        ))
    ));

    let lenient = Solver::new(SolverConfig {
        quorum: QuorumPolicy::FirstDistinct,
        ..SolverConfig::default()
    });
    assert_eq!(lenient.solve(&problem).unwrap(), BigInt::from(3));

    let narrow = Solver::new(SolverConfig {
        max_bits: 3,
        ..SolverConfig::default()
    });
    assert!(matches!(
        narrow.solve(&problem),
        Err(SolveError::Decode {
            source: DecodeError::Overflow { max_bits: 3 },
            ..
        })
    ));
}

#[test]
fn decode_keeps_every_point() {
    let set = ProblemSet::import(data("testcase1.json")).unwrap();
    let request = Solver::default().decode(&set.problems()[0]).unwrap();

    assert_eq!(request.points.len(), 4);
    assert_eq!(request.points[3].x, BigInt::from(6));
    assert_eq!(request.points[3].y, BigInt::from(39));
}

#[test]
fn repeated_index_keeps_every_share() {
    let doc = br#"{
        "keys": { "n": 3, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "10", "value": "7" },
        "1": { "base": "10", "value": "999" },
        "3": { "base": "10", "value": "12" }
    }"#;

    let set = ProblemSet::from_slice(doc).unwrap();
    let problem = &set.problems()[0];

    let shares: Vec<_> = problem
        .shares
        .iter()
        .map(|s| (s.index.as_str(), s.value.as_str()))
        .collect();
    assert_eq!(shares, [("1", "4"), ("2", "7"), ("1", "999"), ("3", "12")]);

    assert_eq!(
        Solver::default().solve(problem),
        Err(SolveError::Reconstruction(
            ReconstructionError::DuplicateXCoordinate(BigInt::from(1))
        ))
    );

    let lenient = Solver::new(SolverConfig {
        quorum: QuorumPolicy::FirstDistinct,
        ..SolverConfig::default()
    });
    assert_eq!(lenient.solve(problem).unwrap(), BigInt::from(3));
}

#[test]
fn repeated_index_inside_batch_is_kept() {
    let doc = br#"{ "test_cases": [ {
        "keys": { "n": 2, "k": 2 },
        "5": { "base": "10", "value": "1" },
        "5": { "base": "10", "value": "2" }
    } ] }"#;

    let set = ProblemSet::from_slice(doc).unwrap();
    assert_eq!(set.problems()[0].shares.len(), 2);

    let err = Solver::default().solve(&set.problems()[0]).unwrap_err();
    assert_eq!(
        err,
        SolveError::Reconstruction(ReconstructionError::DuplicateXCoordinate(BigInt::from(5)))
    );
}

#[test]
fn repeated_keys_section_is_rejected() {
    let doc = br#"{
        "keys": { "n": 1, "k": 1 },
        "keys": { "n": 2, "k": 1 },
        "1": { "base": "10", "value": "4" }
    }"#;

    assert!(matches!(
        ProblemSet::from_slice(doc),
        Err(LoadError::Malformed(_))
    ));
}
