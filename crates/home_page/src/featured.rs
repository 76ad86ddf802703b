//! Featured-room aggregation.

use std::collections::HashSet;

use platform_host::RoomRecord;

/// Merges favorite and public rooms into the featured list.
///
/// Each room id appears once (first occurrence wins, favorites before public). The result is
/// ordered by `member_count` descending; the sort is stable, so rooms with equal counts keep
/// their first-seen order.
pub fn featured_rooms(favorites: &[RoomRecord], public: &[RoomRecord]) -> Vec<RoomRecord> {
    let mut seen = HashSet::new();
    let mut rooms: Vec<RoomRecord> = favorites
        .iter()
        .chain(public)
        .filter(|room| seen.insert(room.id.as_str()))
        .cloned()
        .collect();
    rooms.sort_by(|a, b| b.member_count.cmp(&a.member_count));
    rooms
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn room(id: &str, member_count: u32) -> RoomRecord {
        RoomRecord::new(id, member_count, format!("https://cdn.example/{id}.png"))
    }

    fn ids(rooms: &[RoomRecord]) -> Vec<&str> {
        rooms.iter().map(|room| room.id.as_str()).collect()
    }

    #[test]
    fn empty_sources_produce_empty_list() {
        assert!(featured_rooms(&[], &[]).is_empty());
    }

    #[test]
    fn overlapping_rooms_appear_once() {
        let favorites = vec![room("a", 2), room("b", 5)];
        let public = vec![room("b", 5), room("c", 1), room("a", 2)];

        let featured = featured_rooms(&favorites, &public);
        assert_eq!(ids(&featured), vec!["b", "a", "c"]);
    }

    #[test]
    fn equal_member_counts_keep_first_seen_order() {
        let favorites = vec![room("fav-1", 3), room("fav-2", 3)];
        let public = vec![room("pub-1", 3), room("pub-2", 7), room("fav-1", 3)];

        let featured = featured_rooms(&favorites, &public);
        assert_eq!(ids(&featured), vec!["pub-2", "fav-1", "fav-2", "pub-1"]);
    }

    #[test]
    fn duplicate_ids_within_one_source_collapse_to_first() {
        let mut stale = room("a", 9);
        stale.name = "stale".to_string();
        let mut fresh = room("a", 1);
        fresh.name = "fresh".to_string();

        let featured = featured_rooms(&[fresh.clone(), stale], &[]);
        assert_eq!(featured, vec![fresh]);
    }

    #[test]
    fn output_is_unique_and_sorted_for_generated_inputs() {
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for _ in 0..200 {
            let favorites: Vec<RoomRecord> = (0..next() % 8)
                .map(|_| {
                    let id = next() % 12;
                    room(&format!("r{id}"), id % 5)
                })
                .collect();
            let public: Vec<RoomRecord> = (0..next() % 8)
                .map(|_| {
                    let id = next() % 12;
                    room(&format!("r{id}"), id % 5)
                })
                .collect();

            let featured = featured_rooms(&favorites, &public);

            let unique: HashSet<&str> = featured.iter().map(|room| room.id.as_str()).collect();
            assert_eq!(unique.len(), featured.len());
            assert!(featured
                .windows(2)
                .all(|pair| pair[0].member_count >= pair[1].member_count));

            let expected: HashSet<&str> = favorites
                .iter()
                .chain(&public)
                .map(|room| room.id.as_str())
                .collect();
            assert_eq!(unique, expected);
        }
    }
}
