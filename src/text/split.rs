/// Granularity of staggered text animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Whitespace-separated words.
    Word,
    /// Individual characters (Unicode scalar values).
    Char,
}

/// One piece of split text.
///
/// Whitespace runs are kept as separate spans so the original string can be laid out again;
/// they are never animated and carry no stagger index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSpan {
    /// Text of the span.
    pub text: String,
    /// Position among animated (non-space) spans.
    pub stagger_index: Option<usize>,
}

impl UnitSpan {
    /// Return `true` for whitespace spans.
    pub fn is_space(&self) -> bool {
        self.stagger_index.is_none()
    }
}

/// Split `text` into animated units separated by single-space spans.
///
/// Leading/trailing whitespace is dropped and inner whitespace runs collapse to one space.
pub fn split_units(text: &str, unit: Unit) -> Vec<UnitSpan> {
    let mut out = Vec::new();
    let mut next_index = 0usize;

    for (wi, word) in text.split_whitespace().enumerate() {
        if wi > 0 {
            out.push(UnitSpan {
                text: " ".to_owned(),
                stagger_index: None,
            });
        }
        match unit {
            Unit::Word => {
                out.push(UnitSpan {
                    text: word.to_owned(),
                    stagger_index: Some(next_index),
                });
                next_index += 1;
            }
            Unit::Char => {
                for ch in word.chars() {
                    out.push(UnitSpan {
                        text: ch.to_string(),
                        stagger_index: Some(next_index),
                    });
                    next_index += 1;
                }
            }
        }
    }
    out
}

/// Number of animated units `text` splits into.
pub fn unit_count(text: &str, unit: Unit) -> usize {
    match unit {
        Unit::Word => text.split_whitespace().count(),
        Unit::Char => text.chars().filter(|c| !c.is_whitespace()).count(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/split.rs"]
mod tests;
