// tests/proptest.rs

#![cfg(test)]

use dynamic_bits::{BitPos, BitsetError, ByteCell, DynamicBitset};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Basic Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_len_accounting(content in prop::collection::vec(any::<bool>(), 0..300)) {
        let bits: DynamicBitset = content.iter().copied().collect();

        prop_assert_eq!(bits.len(), content.len());
        prop_assert_eq!(bits.full_byte_len(), content.len() / 8);
        prop_assert_eq!(usize::from(bits.tail_len()), content.len() % 8);
        prop_assert_eq!(bits.has_partial_tail(), content.len() % 8 != 0);
        prop_assert_eq!(bits.is_empty(), content.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_get_matches_push_order(content in prop::collection::vec(any::<bool>(), 0..300)) {
        let bits: DynamicBitset = content.iter().copied().collect();

        for (index, &expected) in content.iter().enumerate() {
            let pos = BitPos::from_bit_index(index);
            prop_assert_eq!(bits.get(pos.byte_index(), pos.bit_index()), expected);
            prop_assert_eq!(bits.try_get(pos.byte_index(), pos.bit_index()), Some(expected));
        }

        let end = bits.end_position();
        prop_assert_eq!(bits.try_get(end.byte_index(), end.bit_index()), None);
    }
}

proptest! {
    #[test]
    fn prop_push_pop_matches_vec_model(
        ops in prop::collection::vec((any::<bool>(), 0u8..4), 0..600)
    ) {
        let mut bits = DynamicBitset::new();
        let mut model: Vec<bool> = Vec::new();

        for (bit, op) in ops {
            if op == 3 {
                prop_assert_eq!(bits.pop(), model.pop());
            } else {
                bits.push(bit);
                model.push(bit);
            }
            prop_assert_eq!(bits.len(), model.len());
            prop_assert!(bits.tail_len() < 8);
        }

        let collected: Vec<bool> = bits.cursor().collect();
        prop_assert_eq!(collected, model);
    }
}

//
// -----------------------------------------------------------------------------
// Value Packing
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_value_round_trips_at_any_offset(
        value in any::<u32>(),
        framing in prop::collection::vec(any::<bool>(), 0..16)
    ) {
        let mut bits = DynamicBitset::new();
        for &bit in &framing {
            bits.push(bit);
        }
        bits.push_value(&value);

        let pos = BitPos::from_bit_index(framing.len());
        let mut cursor = bits.cursor_at(pos.byte_index(), pos.bit_index());
        prop_assert_eq!(cursor.extract::<u32>(), value);
        prop_assert!(cursor.is_at_end());

        prop_assert_eq!(
            bits.try_extract::<u32>(pos.byte_index(), pos.bit_index()),
            Ok(value)
        );
    }
}

proptest! {
    #[test]
    fn prop_byte_stream_round_trips(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        offset in 0u8..8
    ) {
        let mut bits = DynamicBitset::new();
        for _ in 0..offset {
            bits.push(true);
        }
        for &byte in &payload {
            bits.push_byte(ByteCell::new(byte));
        }

        let mut buffer = vec![0u8; payload.len()];
        let mut cursor = bits.cursor_at(0, offset);
        cursor.extract_bytes(&mut buffer);

        prop_assert_eq!(buffer, payload);
        prop_assert!(cursor.is_at_end());
    }
}

proptest! {
    #[test]
    fn prop_extract_byte_matches_bitwise_reads(
        raw in prop::collection::vec(any::<u8>(), 1..32),
        start in 0usize..256
    ) {
        let bits = DynamicBitset::from_bytes(&raw);
        let start = start % (raw.len() * 8 - 7);
        let pos = BitPos::from_bit_index(start);

        let mut fast = bits.cursor_at(pos.byte_index(), pos.bit_index());
        let mut slow = bits.cursor_at(pos.byte_index(), pos.bit_index());

        let cell = fast.extract_byte();
        let mut manual = ByteCell::default();
        for index in 0..8u8 {
            manual.set(index, slow.read());
        }

        prop_assert_eq!(cell, manual);
        prop_assert_eq!(fast.position(), slow.position());
    }
}

//
// -----------------------------------------------------------------------------
// Equality and Raw Parts
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_equality_ignores_pop_churn(
        content in prop::collection::vec(any::<bool>(), 0..200),
        junk in prop::collection::vec(any::<bool>(), 1..50)
    ) {
        let direct: DynamicBitset = content.iter().copied().collect();

        let mut churned: DynamicBitset = content.iter().copied().collect();
        for &bit in &junk {
            churned.push(bit);
        }
        for _ in 0..junk.len() {
            churned.pop();
        }

        prop_assert_eq!(churned, direct);
    }
}

proptest! {
    #[test]
    fn prop_raw_parts_round_trip(content in prop::collection::vec(any::<bool>(), 0..200)) {
        let bits: DynamicBitset = content.iter().copied().collect();

        let rebuilt = DynamicBitset::from_raw_parts(
            bits.as_raw_slice().to_vec(),
            bits.tail_cell(),
            bits.tail_len(),
        )
        .unwrap();

        prop_assert_eq!(rebuilt, bits);
    }
}

//
// -----------------------------------------------------------------------------
// Fallible Extraction
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_try_extract_checks_remaining(
        content in prop::collection::vec(any::<bool>(), 0..100)
    ) {
        let bits: DynamicBitset = content.iter().copied().collect();

        match bits.try_extract::<u64>(0, 0) {
            Ok(_) => prop_assert!(content.len() >= 64),
            Err(BitsetError::InsufficientBits { requested, available }) => {
                prop_assert_eq!(requested, 64);
                prop_assert_eq!(available, content.len());
                prop_assert!(content.len() < 64);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

//
// -----------------------------------------------------------------------------
// Mutation
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_cursor_mut_flips_every_bit(content in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut bits: DynamicBitset = content.iter().copied().collect();

        let mut cursor = bits.cursor_mut();
        while let Some(mut bit) = cursor.next_ref() {
            let flipped = !bit.get();
            bit.set(flipped);
        }

        let collected: Vec<bool> = bits.cursor().collect();
        let expected: Vec<bool> = content.iter().map(|&bit| !bit).collect();
        prop_assert_eq!(collected, expected);
    }
}
