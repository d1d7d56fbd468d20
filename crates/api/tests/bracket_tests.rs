use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use api::gql::domains::brackets::service::{
    bracket_size, generate_random_bracket, generate_seeded_bracket, seed_bracket, Participant,
    SeedingError, SeedingMethod,
};

fn make_participants(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant {
            id: Uuid::new_v4(),
            display_name: format!("Player {}", i + 1),
            rank_code: "H".to_string(),
            rating: 1200 - (i as i32) * 10,
        })
        .collect()
}

fn seated_ids(slots: &[api::gql::domains::brackets::service::BracketSlot]) -> Vec<Uuid> {
    slots
        .iter()
        .flat_map(|s| [s.player_a.as_ref(), s.player_b.as_ref()])
        .flatten()
        .map(|p| p.id)
        .collect()
}

#[test]
fn bracket_size_rounds_up_to_power_of_two() {
    assert_eq!(bracket_size(2), 2);
    assert_eq!(bracket_size(3), 4);
    assert_eq!(bracket_size(5), 8);
    assert_eq!(bracket_size(8), 8);
    assert_eq!(bracket_size(9), 16);
    assert_eq!(bracket_size(17), 32);
}

#[test]
fn slot_count_is_half_the_padded_size_for_both_methods() {
    for n in 2..=33 {
        let participants = make_participants(n);
        for method in [SeedingMethod::Random, SeedingMethod::Seeded] {
            let slots = seed_bracket(&participants, method).unwrap();
            assert_eq!(slots.len(), bracket_size(n) / 2, "n = {n}");
        }
    }
}

#[test]
fn match_numbers_are_contiguous_from_one() {
    for n in [2, 5, 8, 13, 16] {
        let participants = make_participants(n);
        for method in [SeedingMethod::Random, SeedingMethod::Seeded] {
            let slots = seed_bracket(&participants, method).unwrap();
            for (idx, slot) in slots.iter().enumerate() {
                assert_eq!(slot.round, 1);
                assert_eq!(slot.match_number, (idx + 1) as i32);
            }
        }
    }
}

#[test]
fn every_participant_is_seated_exactly_once() {
    for n in [2, 3, 7, 12, 16, 20] {
        let participants = make_participants(n);
        for method in [SeedingMethod::Random, SeedingMethod::Seeded] {
            let slots = seed_bracket(&participants, method).unwrap();
            let ids = seated_ids(&slots);
            assert_eq!(ids.len(), n, "n = {n}");
            let unique: HashSet<Uuid> = ids.into_iter().collect();
            assert_eq!(unique.len(), n, "n = {n}");
        }
    }
}

#[test]
fn bye_count_matches_the_padding() {
    let participants = make_participants(6);
    let slots = generate_random_bracket(&participants).unwrap();
    let empty_seats = slots
        .iter()
        .flat_map(|s| [&s.player_a, &s.player_b])
        .filter(|seat| seat.is_none())
        .count();
    assert_eq!(empty_seats, 2);
}

#[test]
fn too_few_participants_is_rejected() {
    for n in [0, 1] {
        let participants = make_participants(n);
        for method in [SeedingMethod::Random, SeedingMethod::Seeded] {
            let err = seed_bracket(&participants, method).unwrap_err();
            match err {
                SeedingError::InsufficientParticipants(got) => assert_eq!(got, n),
            }
        }
    }
}

#[test]
fn seeded_draw_pairs_top_seed_with_bottom_seed() {
    let mut participants = make_participants(4);
    participants[0].rating = 1200;
    participants[1].rating = 1100;
    participants[2].rating = 1000;
    participants[3].rating = 900;

    let slots = generate_seeded_bracket(&participants).unwrap();
    assert_eq!(slots.len(), 2);

    assert_eq!(slots[0].player_a.as_ref().unwrap().rating, 1200);
    assert_eq!(slots[0].player_b.as_ref().unwrap().rating, 900);
    assert_eq!(slots[1].player_a.as_ref().unwrap().rating, 1100);
    assert_eq!(slots[1].player_b.as_ref().unwrap().rating, 1000);
}

#[test]
fn seeded_byes_go_to_the_top_seeds() {
    // 6 players pad to 8 seats, so seeds 1 and 2 sit out round 1
    let participants = make_participants(6);
    let slots = generate_seeded_bracket(&participants).unwrap();
    assert_eq!(slots.len(), 4);

    assert_eq!(slots[0].player_a.as_ref().unwrap().rating, 1200);
    assert!(slots[0].player_b.is_none());
    assert_eq!(slots[1].player_a.as_ref().unwrap().rating, 1190);
    assert!(slots[1].player_b.is_none());
    assert!(slots[2].player_a.is_some() && slots[2].player_b.is_some());
    assert!(slots[3].player_a.is_some() && slots[3].player_b.is_some());
}

#[test]
fn random_draw_shows_no_seat_bias() {
    // 8 players, 4000 draws: a uniform shuffle lands each player in the
    // first seat ~500 times (sd ~21). The band is ~7 sigma wide, so a
    // sound shuffle essentially never trips it, while a skewed one (a
    // fixed first seat, or a swap range off by one) lands far outside.
    let participants = make_participants(8);
    let draws = 4000;

    let mut first_seat_counts: HashMap<Uuid, u32> = HashMap::new();
    for _ in 0..draws {
        let slots = generate_random_bracket(&participants).unwrap();
        *first_seat_counts
            .entry(slots[0].player_a.as_ref().unwrap().id)
            .or_default() += 1;
    }

    for p in &participants {
        let count = first_seat_counts.get(&p.id).copied().unwrap_or(0);
        assert!(
            (350..=650).contains(&count),
            "{} took the first seat {count} times in {draws} draws",
            p.display_name
        );
    }
}
