/// Fixed weights of the composite score
pub const SCORE_WEIGHTS: Weights = Weights {
    skills: 0.70,
    qualifications: 0.20,
    experience: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub qualifications: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.qualifications + self.experience
    }

    /// Weighted sum of the three sub-scores, truncated toward zero and
    /// clamped to 0..=100
    pub fn combine(&self, skill_score: f64, qual_score: f64, exp_score: f64) -> u8 {
        let composite = skill_score * self.skills
            + qual_score * self.qualifications
            + exp_score * self.experience;
        composite.floor().clamp(0.0, 100.0) as u8
    }
}
