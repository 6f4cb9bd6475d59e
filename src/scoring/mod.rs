//! Rule-based match scoring
//! Skills, qualifications and experience are scored independently and
//! combined by a fixed weighted sum

pub mod clock;
pub mod engine;
pub mod experience;
pub mod qualifications;
pub mod report;
pub mod skills;
pub mod weights;
pub mod years;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::MatchScorer;
pub use experience::{ExperienceEvidence, ExperiencePolicy};
pub use report::{ScoreReport, Verdict};
pub use weights::SCORE_WEIGHTS;
