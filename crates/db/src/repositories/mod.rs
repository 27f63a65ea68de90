pub mod achievement_repo;
pub mod care_log_repo;
pub mod item_repo;
pub mod pet_repo;

pub use achievement_repo::AchievementRepo;
pub use care_log_repo::CareLogRepo;
pub use item_repo::ItemRepo;
pub use pet_repo::PetRepo;
