#![allow(missing_docs)]

use pairchipper::{
    codec::{RuleCodec, TokenDecoder, TokenEncoder},
    merging::merge_pair,
    rules::io::{rules_from_json_str, rules_to_json_string},
    training::{BatchMode, TrainingOptions},
};
use proptest::prelude::*;

fn batch_mode_strategy() -> impl Strategy<Value = BatchMode> {
    prop_oneof![Just(BatchMode::Snapshot), Just(BatchMode::Recount)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn roundtrip_trained_text(
        text in "[ab c]{0,300}",
        num_rounds in 0usize..40,
        pairs_per_round in 1usize..4,
        batch_mode in batch_mode_strategy(),
    ) {
        let results = TrainingOptions::new(num_rounds)
            .with_pairs_per_round(pairs_per_round)
            .with_batch_mode(batch_mode)
            .init::<u32>()
            .unwrap()
            .train_text(&text);

        let codec = RuleCodec::new(results.rules.clone());
        prop_assert_eq!(&codec.encode(&text), &results.tokens);
        prop_assert_eq!(codec.decode(&results.tokens).unwrap(), text);
    }

    #[test]
    fn roundtrip_unseen_text(
        corpus in "[a-e ]{0,200}",
        text in "\\PC{0,200}",
    ) {
        let results = TrainingOptions::new(30)
            .init::<u16>()
            .unwrap()
            .train_text(&corpus);

        let codec = RuleCodec::new(results.rules);
        let tokens = codec.encode(&text);
        prop_assert!(tokens.len() <= text.len());
        prop_assert_eq!(codec.decode(&tokens).unwrap(), text);
    }

    #[test]
    fn compression_is_monotone(
        text in "[xyz]{0,200}",
        num_rounds in 0usize..30,
    ) {
        let results = TrainingOptions::new(num_rounds)
            .init::<u32>()
            .unwrap()
            .train_text(&text);

        prop_assert_eq!(results.original_len, text.len());
        prop_assert!(results.tokens.len() <= results.original_len);
        prop_assert_eq!(
            results.tokens.len() == results.original_len,
            results.rules.is_empty()
        );
        prop_assert!(results.rounds <= num_rounds);
    }

    #[test]
    fn token_ids_are_sequential(
        text in "[pq ]{0,200}",
        start_token in 256u64..1000,
        pairs_per_round in 1usize..5,
    ) {
        let results = TrainingOptions::new(20)
            .with_start_token(start_token)
            .with_pairs_per_round(pairs_per_round)
            .init::<u32>()
            .unwrap()
            .train_text(&text);

        let mut expected = start_token as u32;
        for rule in results.rules.iter() {
            prop_assert_eq!(rule.new_token, expected);
            prop_assert!(rule.count >= 2);
            expected += 1;
        }
        prop_assert_eq!(results.next_token, expected);
    }

    #[test]
    fn merges_are_idempotent(
        text in "[ab]{0,100}",
    ) {
        let results = TrainingOptions::new(10)
            .init::<u32>()
            .unwrap()
            .train_text(&text);

        let codec = RuleCodec::new(results.rules.clone());
        let tokens = codec.encode(&text);
        for rule in results.rules.iter() {
            let once = merge_pair(&tokens, rule.pair, rule.new_token);
            let twice = merge_pair(&once, rule.pair, rule.new_token);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn json_preserves_rules(
        text in "[a-d]{0,200}",
    ) {
        let results = TrainingOptions::new(25)
            .with_pairs_per_round(2)
            .init::<u32>()
            .unwrap()
            .train_text(&text);

        let json = rules_to_json_string(&results.rules).unwrap();
        let loaded = rules_from_json_str::<u32>(&json).unwrap();
        prop_assert_eq!(loaded, results.rules);
    }
}
