use std::fmt::Write;

use kriah_align::{AlignmentStep, Frame, ScoreOutput};

fn frame_label(frame: &Frame) -> String {
    match frame.best() {
        Some(best) => format!("{} ({:.3})", best.phone, best.prob),
        None => "-".to_string(),
    }
}

pub fn render(output: &ScoreOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "algorithm:      {}", output.algorithm.as_str());
    let _ = writeln!(out, "reference:      {}", output.reference);
    let _ = writeln!(out, "alignment score: {:.3}", output.alignment_score);
    let _ = writeln!(out, "accuracy:       {:.2}%", output.accuracy);
    if output.omitted_words.is_empty() {
        let _ = writeln!(out, "omitted words:  none");
    } else {
        let _ = writeln!(out, "omitted words:  {}", output.omitted_words.join(" "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<6} {:<8} {:<16} {:>9}", "step", "expected", "got", "cost");
    for step in &output.steps {
        let (kind, expected, got) = match step {
            AlignmentStep::Match { expected, got, .. } => {
                ("match", expected.to_string(), frame_label(got))
            }
            AlignmentStep::Miss { expected, .. } => ("miss", expected.to_string(), "-".to_string()),
            AlignmentStep::Extra { got, .. } => ("extra", "-".to_string(), frame_label(got)),
        };
        let _ = writeln!(out, "{kind:<6} {expected:<8} {got:<16} {:>9.3}", step.cost());
    }
    out
}
