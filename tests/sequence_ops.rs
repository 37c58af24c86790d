use trackfit::engines::generation::InstructionSequence;
use trackfit::error::TrackfitError;
use trackfit::types::Instruction;

#[test]
fn parse_evaluate_and_expression_agree_end_to_end() {
    let mut seq = InstructionSequence::from_text("y = x, y = y + 5, y = y * 3").unwrap();

    assert_eq!(seq.expression(), "((x + 5) * 3)");

    let predicted = seq.evaluate(&[0.0, 1.0, 2.0]);
    assert_eq!(predicted, vec![15.0, 18.0, 21.0]);

    let score = seq.similarity(&predicted, &[15.0, 18.0, 21.0]).unwrap();
    assert_eq!(score, 1.0);
    assert_eq!(seq.score(), 1.0);

    let report = seq.report().unwrap();
    assert_eq!(report.rmse, 0.0);
    assert_eq!(report.mae, 0.0);
}

#[test]
fn identity_program_reproduces_its_input() {
    let mut seq = InstructionSequence::from_text("y = x").unwrap();
    assert_eq!(seq.expression(), "x");
    assert_eq!(seq.evaluate(&[-3.0, 0.0, 7.5]), vec![-3.0, 0.0, 7.5]);
}

#[test]
fn sloppy_input_serializes_canonically() {
    let seq = InstructionSequence::from_text("y=x,y=y+5,y =ln( y)").unwrap();
    assert_eq!(seq.to_string(), "y = x, y = y + 5, y = ln(y)");
}

#[test]
fn scientific_notation_assignments_parse() {
    let seq = InstructionSequence::from_text("y = x, y = -2.5e1").unwrap();
    assert_eq!(seq.instructions()[1], Instruction::ExplicitAssign(-25.0));
    assert_eq!(seq.expression(), "-25");
}

#[test]
fn out_of_range_edits_report_index_and_length() {
    let mut seq = InstructionSequence::from_text("y = x, y = y + 1, y = y * 2").unwrap();

    match seq.substitute(0, "y = y - 1") {
        Err(TrackfitError::Index { index, len }) => {
            assert_eq!(index, 0);
            assert_eq!(len, 3);
        }
        other => panic!("expected an index error, got {:?}", other),
    }

    match seq.remove(3) {
        Err(TrackfitError::Index { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("expected an index error, got {:?}", other),
    }
}

#[test]
fn malformed_clauses_are_validation_errors() {
    let err = InstructionSequence::from_text("y = x, y = y ? 3").unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));

    let mut seq = InstructionSequence::from_text("y = x, y = y + 1").unwrap();
    let err = seq.substitute(1, "nonsense").unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}

#[test]
fn inserts_and_removals_keep_both_folds_in_step() {
    let mut seq = InstructionSequence::from_text("y = x, y = y * 2").unwrap();

    seq.insert(2, "y = y + 10").unwrap();
    assert_eq!(seq.expression(), "((x * 2) + 10)");
    assert_eq!(seq.evaluate(&[1.0, 2.0]), vec![12.0, 14.0]);

    seq.insert(1, "y = sin(y)").unwrap();
    assert_eq!(seq.expression(), "((sin(x) * 2) + 10)");

    seq.remove(1).unwrap();
    seq.remove(2).unwrap();
    assert_eq!(seq.expression(), "(x * 2)");
    assert_eq!(seq.evaluate(&[3.0]), vec![6.0]);
}

#[test]
fn similarity_rejects_mismatched_series() {
    let mut seq = InstructionSequence::from_text("y = x").unwrap();
    let err = seq.similarity(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));

    let err = seq.similarity(&[], &[]).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}

#[test]
fn nan_poisons_only_the_offending_sample() {
    let mut seq = InstructionSequence::from_text("y = x, y = y - 2, y = ln(y), y = cos(y)").unwrap();
    let out = seq.evaluate(&[1.0, 3.0]);
    // x = 1 hits ln(-1) and stays NaN through the cosine.
    assert!(out[0].is_nan());
    assert_eq!(out[1], 1.0);
}
