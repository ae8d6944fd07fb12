pub mod achievements;
pub mod challenges;
pub mod faculty;
pub mod modules;
pub mod profile;
pub mod quiz;
pub mod welcome;
