/// Component weights for the composite match score. Each component is
/// individually bounded to [0, 100], so a weight sum of 1.0 bounds the
/// composite to [0, 100] without a final cap.
pub const MATCH_WEIGHTS: Weights = Weights {
    interest: 0.40,
    skills: 0.35,
    values: 0.25,
};

/// Split of the interest component between the career's primary and
/// secondary RIASEC types.
pub const PRIMARY_TYPE_WEIGHT: f64 = 0.7;
pub const SECONDARY_TYPE_WEIGHT: f64 = 0.3;

/// Points added per selected work value that matches the career text,
/// capped at [`VALUES_CAP`] before weighting.
pub const POINTS_PER_MATCHED_VALUE: f64 = 20.0;
pub const VALUES_CAP: f64 = 100.0;

/// How many careers a ranking returns at most.
pub const TOP_MATCHES: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub interest: f64,
    pub skills: f64,
    pub values: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.interest + self.skills + self.values
    }
}
