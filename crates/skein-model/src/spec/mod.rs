mod skill;
pub use skill::SkillSpec;
