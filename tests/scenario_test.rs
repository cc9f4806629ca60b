// ==========================================
// 产品料号配置器 - 端到端场景测试
// ==========================================
// 覆盖: 默认选择 / 改选 / Model 首属性 / 标签截断 / 切换产品
// ==========================================


use part_code_builder::app::{AppState, SelectionSession};
use part_code_builder::config::BuilderConfig;
use part_code_builder::engine::SelectionError;
use test_helpers::{create_csv_catalog, SAMPLE_CATALOG};

fn setup_session() -> (tempfile::NamedTempFile, SelectionSession) {
    let temp_file = create_csv_catalog(SAMPLE_CATALOG).expect("创建测试目录失败");
    let config = BuilderConfig {
        catalog_path: temp_file.path().to_path_buf(),
        ..BuilderConfig::default()
    };
    let state = AppState::new(config);
    let session = state.new_session().expect("创建会话失败");
    (temp_file, session)
}

#[test]
fn test_default_selection_and_relabel() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Widget").unwrap();

    let view = session.render().unwrap();
    assert_eq!(view.part_code, "X1-R-S");
    assert_eq!(view.model_label, "Widget One");

    session.choose_label("Color", "Green").unwrap();
    let view = session.render().unwrap();
    assert_eq!(view.part_code, "X1-G-S");
    assert_eq!(session.choice("Color"), Ok("G"));
}

#[test]
fn test_empty_attribute_is_not_rendered() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Widget").unwrap();

    let view = session.render().unwrap();
    let names: Vec<&str> = view.controls.iter().map(|c| c.attribute.as_str()).collect();
    assert_eq!(names, vec!["Color", "Size"]);
    assert_eq!(view.controls[0].labels, vec!["Red", "Green"]);
    assert_eq!(view.controls[0].selected_label(), Some("Red"));
    assert_eq!(view.controls[1].labels, vec!["S", "L"]);
}

#[test]
fn test_model_first_attribute_omits_base_code() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Gadget").unwrap();

    assert_eq!(session.part_code().unwrap(), "A-R");

    session.choose_code("Model", "B").unwrap();
    assert_eq!(session.part_code().unwrap(), "B-R");
    assert!(!session.part_code().unwrap().starts_with("A|B"));
}

#[test]
fn test_short_label_list_drops_extra_codes() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Gadget").unwrap();

    let view = session.render().unwrap();
    let color = view.controls.iter().find(|c| c.attribute == "Color").unwrap();
    assert_eq!(color.labels, vec!["Red", "Green"]);

    // B 被截断，不可选
    assert!(matches!(
        session.choose_code("Color", "B"),
        Err(SelectionError::InvalidCode { .. })
    ));
}

#[test]
fn test_product_switch_repairs_in_place() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Widget").unwrap();
    session.choose_label("Color", "Green").unwrap();
    session.choose_label("Size", "L").unwrap();
    assert_eq!(session.part_code().unwrap(), "X1-G-L");

    // Gizmo 没有 Color；Size 的 L 仍有效
    session.select_product("Gizmo").unwrap();
    assert_eq!(session.render().unwrap().part_code, "Z9-110-L");
    assert_eq!(
        session.choice("Color"),
        Err(SelectionError::UnknownAttribute("Color".to_string()))
    );

    // 在 Gizmo 中选 M，切回 Widget 后 M 无效 → 修复为 S
    session.choose_label("Size", "M").unwrap();
    session.select_product("Widget").unwrap();
    assert_eq!(session.render().unwrap().part_code, "X1-G-S");
}

#[test]
fn test_unknown_product_and_uninitialized_session() {
    let (_temp_file, mut session) = setup_session();

    assert_eq!(session.part_code(), Err(SelectionError::NotInitialized));
    assert_eq!(
        session.select_product("Doohickey"),
        Err(SelectionError::UnknownProduct("Doohickey".to_string()))
    );
    assert_eq!(session.products(), vec!["Widget", "Gadget", "Gizmo"]);
}

#[test]
fn test_render_is_repeatable() {
    let (_temp_file, mut session) = setup_session();
    session.select_product("Gizmo").unwrap();

    let first = session.render().unwrap();
    let second = session.render().unwrap();
    assert_eq!(first, second);
}
