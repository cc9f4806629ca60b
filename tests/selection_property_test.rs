// ==========================================
// 产品料号配置器 - 选择修复与拼接属性测试
// ==========================================
// 性质:
// - 修复幂等
// - 修复后每个属性的代码均有效
// - 拼接确定性
// - Model 首属性时不前置基础代码
// - 无数据属性不出现在有效顺序中
// ==========================================


use part_code_builder::domain::{AttributeDefinition, AttributeOption, Choices, Schema};
use part_code_builder::engine::{compose_part_code, initialize_or_repair};
use proptest::collection::{btree_set, hash_map, vec};
use proptest::prelude::*;
use test_helpers::schema_from;

fn code_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,3}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,6}".prop_filter("Model 为保留属性名", |n| n != "Model")
}

/// 随机 Schema：每个属性 1..5 个唯一代码
fn schema_strategy() -> impl Strategy<Value = Schema> {
    vec((name_strategy(), btree_set(code_strategy(), 1..5)), 0..6).prop_map(|attrs| {
        let mut schema = Schema::empty();
        for (name, codes) in attrs {
            if schema.definitions.contains_key(&name) {
                continue;
            }
            let options = codes
                .into_iter()
                .map(|c| AttributeOption::new(c.clone(), c))
                .collect();
            schema.order.push(name.clone());
            schema.declared_order.push(name.clone());
            schema
                .definitions
                .insert(name.clone(), AttributeDefinition::new(name, options));
        }
        schema
    })
}

fn choices_strategy() -> impl Strategy<Value = Choices> {
    hash_map(name_strategy(), code_strategy(), 0..6)
}

proptest! {
    #[test]
    fn repair_is_idempotent(schema in schema_strategy(), previous in choices_strategy()) {
        let once = initialize_or_repair(&schema, &previous);
        let twice = initialize_or_repair(&schema, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn repair_yields_valid_codes(schema in schema_strategy(), previous in choices_strategy()) {
        let choices = initialize_or_repair(&schema, &previous);
        for (name, definition) in &schema.definitions {
            let code = choices.get(name);
            prop_assert!(code.is_some());
            prop_assert!(definition.contains_code(code.unwrap()));
        }
    }

    #[test]
    fn repair_keeps_valid_previous_choices(schema in schema_strategy(), previous in choices_strategy()) {
        let choices = initialize_or_repair(&schema, &previous);
        for (name, code) in &previous {
            let still_valid = schema
                .definition(name)
                .map(|d| d.contains_code(code))
                .unwrap_or(true);
            if still_valid {
                prop_assert_eq!(choices.get(name), Some(code));
            }
        }
    }

    #[test]
    fn composition_is_deterministic(
        schema in schema_strategy(),
        previous in choices_strategy(),
        base in "[A-Z0-9]{0,4}",
    ) {
        let choices = initialize_or_repair(&schema, &previous);
        let first = compose_part_code(&schema.order, &choices, &base);
        let second = compose_part_code(&schema.order, &choices, &base);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn base_code_prefix_follows_first_attribute(
        schema in schema_strategy(),
        base in "[A-Z]{2}[0-9]",
    ) {
        let choices = initialize_or_repair(&schema, &Choices::new());
        let code = compose_part_code(&schema.order, &choices, &base);
        prop_assert!(code.starts_with(base.as_str()));

        let mut with_model = schema.order.clone();
        with_model.insert(0, "Model".to_string());
        let mut model_choices = choices.clone();
        model_choices.insert("Model".to_string(), "MDL".to_string());
        let code = compose_part_code(&with_model, &model_choices, &base);
        prop_assert!(code.starts_with("MDL"));
    }
}

#[test]
fn empty_options_cell_never_contributes() {
    let schema = schema_from(&[
        ("SKU_Order", "Color|Finish|Size"),
        ("Color", "R|G"),
        ("Finish", ""),
        ("Size", "S"),
    ]);
    let choices = initialize_or_repair(&schema, &Choices::new());

    assert!(!schema.order.iter().any(|n| n == "Finish"));
    assert!(!choices.contains_key("Finish"));
    assert_eq!(compose_part_code(&schema.order, &choices, "X1"), "X1-R-S");
}
