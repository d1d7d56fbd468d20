use rand::{Rng, RngExt};
use thiserror::Error;
use uuid::Uuid;

/// A bracket cannot be drawn for fewer players than this.
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("a bracket needs at least {MIN_PARTICIPANTS} confirmed participants, got {0}")]
    InsufficientParticipants(usize),
}

/// Immutable player snapshot taken at seeding time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: Uuid,
    pub display_name: String,
    pub rank_code: String,
    pub rating: i32,
}

/// One round-1 pairing. `None` is a bye or a not-yet-determined seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSlot {
    pub round: i32,
    pub match_number: i32,
    pub player_a: Option<Participant>,
    pub player_b: Option<Participant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingMethod {
    Random,
    Seeded,
}

/// Single seeding entry point; dispatches on the chosen method.
pub fn seed_bracket(
    participants: &[Participant],
    method: SeedingMethod,
) -> Result<Vec<BracketSlot>, SeedingError> {
    match method {
        SeedingMethod::Random => generate_random_bracket(participants),
        SeedingMethod::Seeded => generate_seeded_bracket(participants),
    }
}

/// Next power of two >= the participant count; the full round-1 seat count.
pub fn bracket_size(participant_count: usize) -> usize {
    participant_count.next_power_of_two()
}

/// Shuffle participants uniformly, pad with byes up to a power of two, and
/// pair consecutive seats.
pub fn generate_random_bracket(
    participants: &[Participant],
) -> Result<Vec<BracketSlot>, SeedingError> {
    ensure_enough(participants)?;

    let mut shuffled = participants.to_vec();
    shuffle(&mut shuffled, &mut rand::rng());

    let size = bracket_size(shuffled.len());
    let mut seats: Vec<Option<Participant>> = shuffled.into_iter().map(Some).collect();
    seats.resize(size, None);

    Ok(pair_round_one(seats))
}

/// Standard seed-vs-anti-seed draw: sort by rating descending, then pair
/// `seed[i]` against `seed[size - 1 - i]`. Byes fall to the top seeds.
pub fn generate_seeded_bracket(
    participants: &[Participant],
) -> Result<Vec<BracketSlot>, SeedingError> {
    ensure_enough(participants)?;

    let mut sorted = participants.to_vec();
    sorted.sort_by(|a, b| b.rating.cmp(&a.rating));

    let size = bracket_size(sorted.len());
    let mut seeds: Vec<Option<Participant>> = sorted.into_iter().map(Some).collect();
    seeds.resize(size, None);

    let mut slots = Vec::with_capacity(size / 2);
    for i in 0..size / 2 {
        let player_b = seeds[size - 1 - i].take();
        let player_a = seeds[i].take();
        slots.push(BracketSlot {
            round: 1,
            match_number: (i + 1) as i32,
            player_a,
            player_b,
        });
    }

    Ok(slots)
}

fn ensure_enough(participants: &[Participant]) -> Result<(), SeedingError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(SeedingError::InsufficientParticipants(participants.len()));
    }
    Ok(())
}

/// Fisher–Yates: walk from the last index down, swapping with an index drawn
/// uniformly from `[0, i]`.
fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

fn pair_round_one(seats: Vec<Option<Participant>>) -> Vec<BracketSlot> {
    let mut slots = Vec::with_capacity(seats.len() / 2);
    let mut seats = seats.into_iter();
    let mut match_number = 0;

    while let Some(player_a) = seats.next() {
        let player_b = seats.next().unwrap_or(None);
        match_number += 1;
        slots.push(BracketSlot {
            round: 1,
            match_number,
            player_a,
            player_b,
        });
    }

    slots
}
