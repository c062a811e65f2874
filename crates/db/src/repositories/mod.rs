mod challenge_repo;
mod skill_repo;

pub use challenge_repo::ChallengeRepo;
pub use skill_repo::SkillRepo;
