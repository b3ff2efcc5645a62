/// Rungs of the education ladder used for "X or above" preferences
///
/// Order runs school < undergraduate < graduate < professional/doctorate.
/// `Undergraduate` is a bachelor's in progress and sits below `Bachelor`,
/// the graduate rung. Professional degrees and doctorates share the top
/// rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    Primary,
    Middle,
    Matric,
    Intermediate,
    Diploma,
    Undergraduate,
    Bachelor,
    Master,
    MPhil,
    Professional,
    Doctorate,
}

impl EducationLevel {
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Primary => 0,
            EducationLevel::Middle => 1,
            EducationLevel::Matric => 2,
            EducationLevel::Intermediate => 3,
            EducationLevel::Diploma => 4,
            EducationLevel::Undergraduate => 5,
            EducationLevel::Bachelor => 6,
            EducationLevel::Master => 7,
            EducationLevel::MPhil => 8,
            EducationLevel::Professional | EducationLevel::Doctorate => 9,
        }
    }

    pub fn is_at_least(self, other: EducationLevel) -> bool {
        self.rank() >= other.rank()
    }

    /// Resolve a free-text education value to a rung
    ///
    /// Tries the whole normalised value first, then its leading word, so
    /// "Bachelor of Science" and "BS Computer Science" both land on
    /// `Bachelor`. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }

        lookup(&normalized).or_else(|| {
            normalized
                .split_whitespace()
                .next()
                .and_then(lookup)
        })
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace("'s", "s")
        .replace(['.', '\'', '(', ')'], "")
        .replace(['-', '/'], " ")
        .split_whitespace()
        .filter(|word| *word != "degree")
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup(term: &str) -> Option<EducationLevel> {
    let level = match term {
        "primary" | "school" | "no education" => EducationLevel::Primary,
        "middle" | "8th" => EducationLevel::Middle,
        "matric" | "matriculation" | "ssc" | "o level" | "o levels" | "olevel" | "10th" | "secondary" => {
            EducationLevel::Matric
        }
        "intermediate" | "inter" | "fsc" | "fa" | "ics" | "icom" | "hssc" | "a level" | "a levels"
        | "alevel" | "12th" | "higher secondary" => EducationLevel::Intermediate,
        "diploma" | "dae" | "associate" => EducationLevel::Diploma,
        "undergraduate" | "under graduate" | "undergrad" => EducationLevel::Undergraduate,
        "bachelor" | "bachelors" | "graduate" | "graduation" | "ba" | "bsc" | "bs" | "bcom" | "bba"
        | "be" | "bcs" | "bed" | "btech" => EducationLevel::Bachelor,
        "master" | "masters" | "postgraduate" | "post graduate" | "ma" | "msc" | "ms" | "mcom"
        | "mba" | "mcs" | "med" | "mtech" => EducationLevel::Master,
        "mphil" | "ms mphil" => EducationLevel::MPhil,
        "professional" | "mbbs" | "bds" | "pharmd" | "dpt" | "llb" | "ca" | "acca" | "fcps" => {
            EducationLevel::Professional
        }
        "phd" | "doctorate" | "dphil" => EducationLevel::Doctorate,
        _ => return None,
    };
    Some(level)
}
