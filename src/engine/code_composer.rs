// ==========================================
// 产品料号配置器 - 料号拼接器
// ==========================================
// 职责: 有效顺序 + 当前选择 + 基础代码 → 料号字符串
// 规则:
// - 每个属性取已选代码，缺失时为 "--"
// - 有效顺序首项为 "Model" 时不前置基础代码（避免重复）
// - 以 "-" 连接，去除首尾 "-"
// 红线: 纯函数，无副作用，每次状态变化重新计算
// ==========================================

use crate::config::CompositionRules;
use crate::domain::Choices;

/// 按默认规则拼接料号
pub fn compose_part_code(effective_order: &[String], choices: &Choices, base_code: &str) -> String {
    compose_part_code_with(effective_order, choices, base_code, &CompositionRules::default())
}

/// 按指定规则拼接料号
pub fn compose_part_code_with(
    effective_order: &[String],
    choices: &Choices,
    base_code: &str,
    rules: &CompositionRules,
) -> String {
    let fragments = compose_fragments(effective_order, choices, base_code, rules);
    let separator = rules.separator.to_string();

    fragments
        .join(separator.as_str())
        .trim_matches(rules.separator)
        .to_string()
}

/// 料号片段（含可能前置的基础代码）
pub fn compose_fragments<'a>(
    effective_order: &'a [String],
    choices: &'a Choices,
    base_code: &'a str,
    rules: &'a CompositionRules,
) -> Vec<&'a str> {
    let mut fragments = Vec::with_capacity(effective_order.len() + 1);

    let base_in_order = effective_order
        .first()
        .map(|first| *first == rules.base_attribute)
        .unwrap_or(false);
    if !base_in_order {
        fragments.push(base_code);
    }

    fragments.extend(effective_order.iter().map(|name| {
        choices
            .get(name)
            .map(String::as_str)
            .unwrap_or(rules.missing_placeholder.as_str())
    }));

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn choices(pairs: &[(&str, &str)]) -> Choices {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_base_code_prefix() {
        let code = compose_part_code(
            &order(&["Color", "Size"]),
            &choices(&[("Color", "R"), ("Size", "S")]),
            "X1",
        );
        assert_eq!(code, "X1-R-S");
    }

    #[test]
    fn test_model_first_omits_base_code() {
        let code = compose_part_code(
            &order(&["Model", "Color"]),
            &choices(&[("Model", "B"), ("Color", "R")]),
            "A",
        );
        assert_eq!(code, "B-R");
    }

    #[test]
    fn test_model_not_first_keeps_base_code() {
        let code = compose_part_code(
            &order(&["Color", "Model"]),
            &choices(&[("Model", "B"), ("Color", "R")]),
            "A",
        );
        assert_eq!(code, "A-R-B");
    }

    #[test]
    fn test_missing_choice_uses_placeholder() {
        let code = compose_part_code(
            &order(&["Color", "Size"]),
            &choices(&[("Size", "S")]),
            "X1",
        );
        assert_eq!(code, "X1----S");

        // 末尾占位符与首尾 "-" 一同被去除
        let code = compose_part_code(
            &order(&["Color", "Size"]),
            &choices(&[("Color", "R")]),
            "X1",
        );
        assert_eq!(code, "X1-R");
    }

    #[test]
    fn test_empty_base_code_is_trimmed() {
        let code = compose_part_code(&order(&["Color"]), &choices(&[("Color", "R")]), "");
        assert_eq!(code, "R");
        assert_eq!(compose_part_code(&[], &Choices::new(), ""), "");
        assert_eq!(compose_part_code(&[], &Choices::new(), "X1"), "X1");
    }

    #[test]
    fn test_fragments_and_custom_separator() {
        let rules = CompositionRules {
            separator: '.',
            ..CompositionRules::default()
        };
        let names = order(&["Color"]);
        let picks = choices(&[("Color", "R")]);
        assert_eq!(compose_fragments(&names, &picks, "X1", &rules), vec!["X1", "R"]);
        assert_eq!(compose_part_code_with(&names, &picks, "X1", &rules), "X1.R");
    }
}
