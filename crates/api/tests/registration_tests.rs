use api::gql::domains::registrations::service::{ensure_rank_within_cap, RankCapError};
use api::gql::domains::rewards::service::RankCode;

#[test]
fn ranks_at_or_below_the_cap_are_admitted() {
    assert_eq!(ensure_rank_within_cap("K", Some(RankCode::H)), Ok(()));
    assert_eq!(ensure_rank_within_cap("H", Some(RankCode::H)), Ok(()));
    assert_eq!(ensure_rank_within_cap("h", Some(RankCode::H)), Ok(()));
}

#[test]
fn ranks_above_the_cap_are_rejected() {
    assert_eq!(
        ensure_rank_within_cap("E", Some(RankCode::H)),
        Err(RankCapError::OverCap {
            rank: RankCode::E,
            cap: RankCode::H,
        })
    );
}

#[test]
fn unparseable_stored_ranks_do_not_slip_under_the_cap() {
    // A corrupt rank column must error out, not be treated as the entry tier
    assert_eq!(
        ensure_rank_within_cap("Z9", Some(RankCode::H)),
        Err(RankCapError::InvalidRank("Z9".to_string()))
    );
}

#[test]
fn uncapped_tournaments_skip_the_rank_check() {
    assert_eq!(ensure_rank_within_cap("E", None), Ok(()));
    assert_eq!(ensure_rank_within_cap("Z9", None), Ok(()));
}
