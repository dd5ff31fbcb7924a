use super::grapheme::Grapheme;
use super::tables::{Letter, PhonemeTables, Point};

const SIN_CONSONANT: &str = "s";
const DIVINE_NAME: [Letter; 4] = [Letter::Yod, Letter::He, Letter::Vav, Letter::He];
const FULL_VOWELS: [Point; 3] = [Point::Hiriq, Point::Segol, Point::Tsere];

/// Everything a rule may look at for one grapheme.
pub struct RuleContext<'a> {
    pub current: &'a Grapheme,
    /// The previous grapheme as already processed, if it carries a sound.
    pub previous: Option<&'a Grapheme>,
    pub word: &'a [Grapheme],
    pub index: usize,
    pub tables: &'a PhonemeTables,
}

impl RuleContext<'_> {
    fn current_sound(&self) -> &str {
        self.current.sound().unwrap_or_default()
    }
}

/// Replacement sounds produced by a rule; `None` leaves a sound untouched.
#[derive(Debug, Default, PartialEq)]
pub struct Patch {
    pub current: Option<String>,
    pub previous: Option<String>,
}

impl Patch {
    fn current(sound: impl Into<String>) -> Self {
        Self {
            current: Some(sound.into()),
            previous: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.current.is_none() && self.previous.is_none()
    }
}

pub type Rule = fn(&RuleContext<'_>) -> Patch;

/// Applied in this order to every mapped grapheme.
pub const RULES: [(&str, Rule); 5] = [
    ("sin_dot", sin_dot),
    ("dagesh_hardening", dagesh_hardening),
    ("holam_vav_absorption", holam_vav_absorption),
    ("vav_with_holam", vav_with_holam),
    ("yod_after_full_vowel", yod_after_full_vowel),
];

fn sin_dot(ctx: &RuleContext<'_>) -> Patch {
    let g = ctx.current;
    if !(g.is(Letter::Shin) && g.has(Point::SinDot)) {
        return Patch::default();
    }
    let shin = ctx.tables.letter(Letter::Shin).unwrap_or_default();
    Patch::current(replace_consonant(ctx.current_sound(), shin, SIN_CONSONANT))
}

fn dagesh_hardening(ctx: &RuleContext<'_>) -> Patch {
    let g = ctx.current;
    let Some(letter) = g.letter else {
        return Patch::default();
    };
    match ctx.tables.hardened(letter) {
        Some(hard) if g.has(Point::Dagesh) => Patch::current(hard),
        _ => Patch::default(),
    }
}

fn is_holam_vav(g: &Grapheme) -> bool {
    g.is(Letter::Vav) && (g.has(Point::Holam) || g.has(Point::HolamHaserForVav))
}

fn holam_vav_absorption(ctx: &RuleContext<'_>) -> Patch {
    let Some(previous) = ctx.previous else {
        return Patch::default();
    };
    if !is_holam_vav(ctx.current) || ctx.tables.has_vowel(&previous.points) {
        return Patch::default();
    }
    let holam = ctx.tables.vowel(Point::Holam).unwrap_or_default();
    Patch {
        current: Some(String::new()),
        previous: Some(format!("{}{holam}", previous.sound().unwrap_or_default())),
    }
}

fn vav_with_holam(ctx: &RuleContext<'_>) -> Patch {
    match ctx.previous {
        Some(previous)
            if is_holam_vav(ctx.current) && ctx.tables.has_vowel(&previous.points) =>
        {
            Patch::current("")
        }
        _ => Patch::default(),
    }
}

fn yod_after_full_vowel(ctx: &RuleContext<'_>) -> Patch {
    match ctx.previous {
        Some(previous)
            if ctx.current.is(Letter::Yod) && previous.points.contains_any(&FULL_VOWELS) =>
        {
            Patch::current("")
        }
        _ => Patch::default(),
    }
}

fn replace_consonant(sound: &str, from: &str, to: &str) -> String {
    match sound.strip_prefix(from) {
        Some(rest) if !from.is_empty() => format!("{to}{rest}"),
        _ => to.to_string(),
    }
}

/// Run every rule over the mapped word, left to right, visiting each grapheme once.
///
/// Graphemes without a sound are carried through untouched and are never
/// offered to a rule as `previous`.
pub fn apply_rules(mapped: &[Grapheme], tables: &PhonemeTables) -> Vec<Grapheme> {
    let mut out: Vec<Grapheme> = Vec::with_capacity(mapped.len());
    for (index, grapheme) in mapped.iter().enumerate() {
        let mut current = grapheme.clone();
        if current.sound.is_some() {
            for (name, rule) in RULES {
                let patch = {
                    let ctx = RuleContext {
                        current: &current,
                        previous: out.last().filter(|p| p.sound.is_some()),
                        word: mapped,
                        index,
                        tables,
                    };
                    rule(&ctx)
                };
                if patch.is_empty() {
                    continue;
                }
                tracing::debug!(
                    rule = name,
                    index,
                    cluster = current.cluster.as_str(),
                    current = ?patch.current,
                    previous = ?patch.previous,
                    "rules: rule fired"
                );
                if let Some(sound) = patch.current {
                    current.sound = Some(sound);
                }
                if let (Some(sound), Some(previous)) = (patch.previous, out.last_mut()) {
                    previous.sound = Some(sound);
                }
            }
        }
        out.push(current);
    }
    apply_divine_name(&mut out, tables);
    out
}

fn apply_divine_name(graphemes: &mut [Grapheme], tables: &PhonemeTables) {
    let is_name = graphemes.len() == DIVINE_NAME.len()
        && graphemes
            .iter()
            .zip(DIVINE_NAME)
            .all(|(g, letter)| g.is(letter));
    if !is_name {
        return;
    }
    for (g, sound) in graphemes.iter_mut().zip(&tables.divine_name) {
        g.sound = Some(sound.clone());
    }
    tracing::debug!("rules: divine name override");
}
