use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ScoringError;
use crate::types::{Candidate, Frame};

/// Frames are separated by this in the recogniser's text dump.
const FRAME_SEPARATOR: &str = " | ";
/// `phone (prob)`, where phone is the blank marker or a run of non-space symbols.
const CANDIDATE_PATTERN: &str = r"(<blk>|[^\s()|]+) \(([^)]*)\)";

fn candidate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(CANDIDATE_PATTERN).expect("candidate pattern is valid"))
}

/// Probability the frame assigns to `expected`, or 0 when it is not a candidate.
/// The blank symbol never matches.
pub fn candidate_similarity(expected: char, frame: &Frame, blank: &str) -> f64 {
    let mut buf = [0u8; 4];
    let expected = expected.encode_utf8(&mut buf);
    frame
        .candidates
        .iter()
        .filter(|c| c.phone != blank)
        .find(|c| c.phone == *expected)
        .map(|c| f64::from(c.prob))
        .unwrap_or(0.0)
}

/// DTW distance between a reference phoneme and a frame.
pub fn candidate_distance(expected: char, frame: &Frame, blank: &str) -> f64 {
    1.0 - candidate_similarity(expected, frame, blank)
}

/// Phones of a frame at or above `threshold`, blank excluded.
pub fn heard_phones<'a>(
    frame: &'a Frame,
    threshold: f32,
    blank: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    frame
        .candidates
        .iter()
        .filter(move |c| c.prob >= threshold && c.phone != blank)
        .map(|c| c.phone.as_str())
}

/// Parse a `phone (prob) phone (prob) | ...` dump into frames.
pub fn parse_phone_dump(text: &str) -> Result<Vec<Frame>, ScoringError> {
    let pattern = candidate_pattern();
    let mut frames = Vec::new();
    for (index, part) in text.trim().split(FRAME_SEPARATOR).enumerate() {
        if part.trim().is_empty() {
            continue;
        }
        let mut candidates = Vec::new();
        for caps in pattern.captures_iter(part) {
            let phone = &caps[1];
            let prob: f32 = caps[2].trim().parse().map_err(|e| {
                ScoringError::lattice(index, format!("bad probability '{}': {e}", &caps[2]))
            })?;
            candidates.push(Candidate::new(phone, prob));
        }
        frames.push(Frame::new(candidates));
    }
    validate_frames(&frames)?;
    Ok(frames)
}

/// Read frames from JSON (`[[{"phone", "prob"}]]`) or from a text dump.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>, ScoringError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| ScoringError::io("read lattice", e))?;
    if data.trim_start().starts_with('[') {
        let frames: Vec<Frame> =
            serde_json::from_str(&data).map_err(|e| ScoringError::json("parse lattice", e))?;
        validate_frames(&frames)?;
        return Ok(frames);
    }
    parse_phone_dump(&data)
}

/// Reject probabilities outside [0, 1].
pub fn validate_frames(frames: &[Frame]) -> Result<(), ScoringError> {
    for (index, frame) in frames.iter().enumerate() {
        if let Some(bad) = frame
            .candidates
            .iter()
            .find(|c| !(0.0..=1.0).contains(&c.prob))
        {
            return Err(ScoringError::lattice(
                index,
                format!("probability {} for '{}' is outside [0, 1]", bad.prob, bad.phone),
            ));
        }
    }
    Ok(())
}
