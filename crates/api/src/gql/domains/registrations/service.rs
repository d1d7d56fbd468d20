use thiserror::Error;

use crate::gql::domains::rewards::service::RankCode;

#[derive(Debug, Error, PartialEq)]
pub enum RankCapError {
    #[error("unrecognized player rank: {0}")]
    InvalidRank(String),
    #[error("tournament is capped at rank {cap}, player is ranked {rank}")]
    OverCap { rank: RankCode, cap: RankCode },
}

/// Enforce a tournament's maximum-rank cap. A cap admits every rank up to
/// and including itself. A stored rank that does not parse is rejected,
/// not coerced to the entry tier; a corrupt row must never slip under the
/// cap.
pub fn ensure_rank_within_cap(
    player_rank: &str,
    cap: Option<RankCode>,
) -> Result<(), RankCapError> {
    let Some(cap) = cap else {
        return Ok(());
    };

    let rank: RankCode = player_rank
        .parse()
        .map_err(|_| RankCapError::InvalidRank(player_rank.to_string()))?;

    if rank > cap {
        return Err(RankCapError::OverCap { rank, cap });
    }
    Ok(())
}
