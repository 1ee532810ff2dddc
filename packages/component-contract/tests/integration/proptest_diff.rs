//! Property-based tests for the diff engine
//!
//! - Reflexivity: diff(C, C) is empty
//! - Consistency: the summary total equals the grouped record count
//! - Emptiness: the diff is empty exactly when the JSON trees are equal

#[path = "../common/mod.rs"]
mod common;
use common::*;

use component_contract::features::contract_diff::domain::grouped_len;
use component_contract::features::contract_diff::ContractDiffer;
use component_contract::shared::models::Contract;
use proptest::prelude::*;

fn arb_contract() -> impl Strategy<Value = Contract> {
    (
        "[a-z]{1,8}",
        prop::collection::btree_set("[a-z]{1,6}", 0..6),
        prop::collection::btree_map("[a-z]{1,6}", "(string|number|boolean)", 0..5),
        prop::collection::btree_map("\\.[a-z]{1,6}", "[0-9]{1,3}px", 0..5),
    )
        .prop_map(|(name, children, inputs, rules)| {
            let mut builder = ContractBuilder::new(&name).element("div", "div", None);
            for child in &children {
                builder = builder.element(&format!("div > {}", child), child, Some("div"));
            }
            for (input, ty) in &inputs {
                builder = builder.input(input, ty);
            }
            for (selector, size) in &rules {
                builder = builder.rule(selector, &[("margin", size.as_str())], &[]);
            }
            builder.build()
        })
}

proptest! {
    #[test]
    fn prop_diff_is_reflexive(contract in arb_contract()) {
        let result = ContractDiffer::new().diff(&contract, &contract).unwrap();
        prop_assert_eq!(result.summary.total, 0);
        prop_assert!(result.changes.is_empty());
    }

    #[test]
    fn prop_summary_matches_grouped_changes(a in arb_contract(), b in arb_contract()) {
        let result = ContractDiffer::new().diff(&a, &b).unwrap();
        prop_assert_eq!(result.summary.total, grouped_len(&result.changes));
        let by_type: usize = result.summary.by_type.values().sum();
        prop_assert_eq!(by_type, result.summary.total);
    }

    #[test]
    fn prop_empty_diff_iff_equal_trees(a in arb_contract(), b in arb_contract()) {
        let result = ContractDiffer::new().diff(&a, &b).unwrap();
        let equal = a.to_value().unwrap() == b.to_value().unwrap();
        prop_assert_eq!(result.is_empty(), equal);
    }
}
