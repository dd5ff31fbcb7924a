use kriah_align::{
    expected_sequence, got_sequence, AlignerKind, Candidate, Frame, PhonemeTables,
    ReadingScorerBuilder, ScoringConfig, StepKind, Weighting,
};

// בְּרֵאשִׁית בָּרָא אֱלֹהִים
const BERESHIT: &str = "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05C1}\u{05B4}\u{05D9}\u{05EA}";
const BARA: &str = "\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05D0}";
const ELOHIM: &str = "\u{05D0}\u{05B1}\u{05DC}\u{05B9}\u{05D4}\u{05B4}\u{05D9}\u{05DD}";

fn opening_verse() -> String {
    format!("{BERESHIT} {BARA} {ELOHIM}\u{05C3}")
}

fn frames_for(phonemes: &str, prob: f32) -> Vec<Frame> {
    phonemes
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Frame::new(vec![
                Candidate::new(c.to_string(), prob),
                Candidate::new("<blk>", 1.0 - prob),
            ])
        })
        .collect()
}

fn scorer(algorithm: AlignerKind) -> kriah_align::ReadingScorer {
    ReadingScorerBuilder::new(ScoringConfig::default())
        .with_algorithm(algorithm)
        .build()
        .expect("build scorer")
}

#[test]
fn opening_verse_reference() {
    let scorer = scorer(AlignerKind::Needleman);
    let reference = scorer.transliterate(&opening_verse()).reference();
    assert_eq!(reference.text(), "bʁeʔʃit bʁaʔ ʔelohim");
    assert_eq!(reference.len(), 18);
}

#[test]
fn perfect_reading_scores_full_marks() {
    let scorer = scorer(AlignerKind::Needleman);
    let frames = frames_for("bʁeʔʃit bʁaʔ ʔelohim", 1.0);
    let out = scorer.score(&opening_verse(), &frames).expect("score");
    assert_eq!(out.accuracy, 100.0);
    assert_eq!(out.alignment_score, 54.0);
    assert!(out.omitted_words.is_empty());
    assert!(out.steps.iter().all(|s| s.kind() == StepKind::Match));
}

#[test]
fn skipped_word_is_reported() {
    let scorer = scorer(AlignerKind::Needleman);
    let frames = frames_for("bʁeʔʃit ʔelohim", 0.9);
    let out = scorer.score(&opening_verse(), &frames).expect("score");

    let misses = out.steps.iter().filter(|s| s.kind() == StepKind::Miss).count();
    let matches = out.steps.iter().filter(|s| s.kind() == StepKind::Match).count();
    assert_eq!(misses, 4);
    assert_eq!(matches, 14);
    assert!((out.accuracy - 1400.0 / 18.0).abs() < 1e-9);
    assert_eq!(out.omitted_words, ["bʁaʔ"]);
}

#[test]
fn both_aligners_round_trip() {
    let frames = frames_for("bʁeʃit xbaʁa ʔeloim", 0.8);
    for algorithm in [AlignerKind::Dtw, AlignerKind::Needleman] {
        let scorer = scorer(algorithm);
        let reference = scorer.transliterate(&opening_verse()).reference();
        let out = scorer.score_reference(&reference, &frames).expect("score");
        assert_eq!(expected_sequence(&out.steps), reference.symbols(), "{algorithm:?}");
        assert_eq!(got_sequence(&out.steps), frames, "{algorithm:?}");
    }
}

#[test]
fn scoring_is_deterministic() {
    let frames = frames_for("bʁeʃit bʁaʔ ʔelohi", 0.7);
    for algorithm in [AlignerKind::Dtw, AlignerKind::Needleman] {
        let first = scorer(algorithm).score(&opening_verse(), &frames).expect("score");
        let second = scorer(algorithm).score(&opening_verse(), &frames).expect("score");
        assert_eq!(first, second);
        let a = serde_json::to_string(&first).expect("serialize");
        let b = serde_json::to_string(&second).expect("serialize");
        assert_eq!(a, b);
    }
}

#[test]
fn probability_weighting_lowers_uncertain_matches() {
    let config = ScoringConfig {
        weighting: Weighting::Probability,
        ..ScoringConfig::default()
    };
    let scorer = ReadingScorerBuilder::new(config).build().expect("build scorer");
    let frames = frames_for("bʁeʔʃit bʁaʔ ʔelohim", 0.5);
    let out = scorer.score(&opening_verse(), &frames).expect("score");
    assert!((out.accuracy - 50.0).abs() < 1e-6);
}

#[test]
fn divine_name_reads_as_fixed_pronunciation() {
    let scorer = scorer(AlignerKind::Needleman);
    // יְהוָה
    let text = "\u{05D9}\u{05B0}\u{05D4}\u{05D5}\u{05B8}\u{05D4}";
    let expected: String = PhonemeTables::hebrew().divine_name.concat();
    assert_eq!(scorer.transliterate(text).reference().text(), expected);
    assert_eq!(scorer.transliterate("\u{05D9}\u{05D4}\u{05D5}\u{05D4}").reference().text(), expected);
}

#[test]
fn empty_inputs_produce_empty_steps() {
    let scorer = scorer(AlignerKind::Dtw);
    let out = scorer.score(&opening_verse(), &[]).expect("score");
    assert!(out.steps.is_empty());
    assert_eq!(out.accuracy, 0.0);
    assert_eq!(out.omitted_words.len(), 3);

    let out = scorer.score("", &frames_for("abc", 1.0)).expect("score");
    assert!(out.steps.is_empty());
}

#[test]
fn report_serializes_step_tags() {
    let scorer = scorer(AlignerKind::Needleman);
    let frames = frames_for("bʁeʔʃit", 1.0);
    let out = scorer.score(BERESHIT, &frames).expect("score");
    let json = serde_json::to_value(&out).expect("serialize");
    assert_eq!(json["algorithm"], "needleman");
    assert_eq!(json["steps"][0]["type"], "match");
    assert_eq!(json["steps"][0]["expected"], "b");
    assert_eq!(json["steps"][0]["got"][0]["phone"], "b");
}

#[test]
fn bundled_tables_match_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/hebrew_phonemes.json");
    let tables = PhonemeTables::load(&path).expect("load bundled tables");
    assert_eq!(tables, PhonemeTables::hebrew());
}

#[test]
fn phone_dump_scores_like_json_frames() {
    let dump = "b (0.9) <blk> (0.1) | \u{0281} (0.95) | e (0.7) | \u{0294} (0.6) | \u{0283} (0.915) s (0.069) | i (0.9) | t (0.99)";
    let frames = kriah_align::parse_phone_dump(dump).expect("parse dump");
    assert_eq!(frames.len(), 7);
    let out = scorer(AlignerKind::Dtw).score(BERESHIT, &frames).expect("score");
    assert_eq!(out.accuracy, 100.0);
    assert!(out.omitted_words.is_empty());
}
