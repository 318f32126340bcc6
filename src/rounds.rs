//! Structured representation of the runner's rounds encoding.
//!
//! The benchmark runner reports the refinement loop of each run as a compact
//! string: `+` for a refinement round, `.` for a coarsening round, `^` for a
//! lifting round, followed by a single trailing classification marker. A
//! marker of `∅` means the benchmark was proved unrealizable. Two special
//! forms exist: the literal `"None"` (no rounds recorded) and strings starting
//! with `f` (the run failed before the loop produced anything).
//!
//! The string is parsed once into [`RoundsField`]; table rendering and
//! classification both work from the structured form instead of re-deriving
//! meaning from raw characters.

/// One round of the synthesis refinement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A refinement round (`+`), rendered as `\bullet`.
    Refine,
    /// A coarsening round (`.`), rendered as `\circ`.
    Coarsen,
    /// A lifting round (`^`), rendered as `l`.
    Lift,
}

impl Step {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Step::Refine),
            '.' => Some(Step::Coarsen),
            '^' => Some(Step::Lift),
            _ => None,
        }
    }

    fn latex(self) -> &'static str {
        match self {
            Step::Refine => "\\bullet",
            Step::Coarsen => "\\circ",
            Step::Lift => "l",
        }
    }
}

/// A parsed rounds field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundsField {
    /// The literal `"None"`: the runner recorded no rounds.
    None,
    /// An `f`-prefixed failure string.
    Failure(String),
    /// A recorded round sequence with its classification marker.
    Steps {
        /// Rounds in execution order, marker excluded.
        steps: Vec<Step>,
        /// True iff the trailing marker is `∅`.
        unrealizable: bool,
    },
}

/// Marker character signalling an unrealizable benchmark.
pub const UNREALIZABLE_MARKER: char = '∅';

impl RoundsField {
    /// Parse a raw rounds string.
    ///
    /// The final character of a non-`None`, non-failure string is always a
    /// classification marker and never a step.
    pub fn parse(s: &str) -> Self {
        if s == "None" {
            return RoundsField::None;
        }
        if s.starts_with('f') {
            return RoundsField::Failure(s.to_string());
        }

        let mut chars: Vec<char> = s.chars().collect();
        let marker = chars.pop();
        RoundsField::Steps {
            steps: chars.into_iter().filter_map(Step::from_char).collect(),
            unrealizable: marker == Some(UNREALIZABLE_MARKER),
        }
    }

    /// True iff the benchmark was classified unrealizable.
    pub fn is_unrealizable(&self) -> bool {
        matches!(
            self,
            RoundsField::Steps {
                unrealizable: true,
                ..
            }
        )
    }

    /// Render the round sequence as LaTeX math content.
    ///
    /// `"None"` renders as a dash; a failure string renders as its leading
    /// `f`; otherwise each step maps to its LaTeX form in order.
    pub fn latex(&self) -> String {
        match self {
            RoundsField::None => "-".to_string(),
            RoundsField::Failure(_) => "f".to_string(),
            RoundsField::Steps { steps, .. } => {
                steps.iter().map(|s| s.latex()).collect::<String>()
            }
        }
    }

    /// Render the number of rounds taken.
    ///
    /// A failure string renders as its leading `f`, `"None"` as a dash, and a
    /// step sequence as its length.
    pub fn count(&self) -> String {
        match self {
            RoundsField::None => "-".to_string(),
            RoundsField::Failure(_) => "f".to_string(),
            RoundsField::Steps { steps, .. } => steps.len().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrealizable_marker() {
        assert!(RoundsField::parse("+.+∅").is_unrealizable());
        assert!(!RoundsField::parse("+.+").is_unrealizable());
        assert!(!RoundsField::parse("None").is_unrealizable());
        assert!(!RoundsField::parse("").is_unrealizable());
    }

    #[test]
    fn test_latex_rendering() {
        // Marker dropped, then + -> \bullet and . -> \circ in order.
        assert_eq!(RoundsField::parse("+.+∅").latex(), "\\bullet\\circ\\bullet");
        // Realizable strings also carry a trailing marker that is dropped.
        assert_eq!(RoundsField::parse("^+.!").latex(), "l\\bullet\\circ");
        assert_eq!(RoundsField::parse("None").latex(), "-");
    }

    #[test]
    fn test_count_rendering() {
        // "f3" starts with f: render just the failure marker.
        assert_eq!(RoundsField::parse("f3").count(), "f");
        // "+.+": trailing char is the marker, two steps remain.
        assert_eq!(RoundsField::parse("+.+").count(), "2");
        assert_eq!(RoundsField::parse("None").count(), "-");
    }

    #[test]
    fn test_parsed_steps() {
        let parsed = RoundsField::parse("+.^∅");
        assert_eq!(
            parsed,
            RoundsField::Steps {
                steps: vec![Step::Refine, Step::Coarsen, Step::Lift],
                unrealizable: true,
            }
        );
    }

    #[test]
    fn test_empty_string() {
        let parsed = RoundsField::parse("");
        assert_eq!(
            parsed,
            RoundsField::Steps {
                steps: Vec::new(),
                unrealizable: false,
            }
        );
        assert_eq!(parsed.count(), "0");
    }
}
