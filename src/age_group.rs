use std::fmt;

/// One of four fixed labels bucketing an integer age.
///
/// Total over all integers: 30 belongs to 18-30, 60 belongs to 60+,
/// and the four ranges partition the integers with no gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Under18,
    Age18To30,
    Age31To59,
    Age60Plus,
}

impl AgeGroup {
    /// All groups in ascending age order, for stable summary output.
    pub const ALL: [Self; 4] = [
        Self::Under18,
        Self::Age18To30,
        Self::Age31To59,
        Self::Age60Plus,
    ];

    #[must_use]
    pub const fn from_age(age: i64) -> Self {
        if age < 18 {
            Self::Under18
        } else if age <= 30 {
            Self::Age18To30
        } else if age < 60 {
            Self::Age31To59
        } else {
            Self::Age60Plus
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under18 => "Under 18",
            Self::Age18To30 => "18-30",
            Self::Age31To59 => "31-59",
            Self::Age60Plus => "60+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
