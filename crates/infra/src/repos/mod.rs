pub mod club_tables;
pub mod clubs;
pub mod players;
pub mod tournament_matches;
pub mod tournament_registrations;
pub mod tournament_rewards;
pub mod tournaments;

pub use club_tables::CreateClubTable;
pub use clubs::CreateClub;
pub use players::{CreatePlayer, PlayerFilter};
pub use tournament_matches::CreateTournamentMatch;
pub use tournament_registrations::CreateTournamentRegistration;
pub use tournament_rewards::CreateTournamentReward;
pub use tournaments::{CreateTournamentData, TournamentFilter, TournamentStatus};
