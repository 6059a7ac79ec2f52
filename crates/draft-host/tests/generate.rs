//! End-to-end generation from host JSON exports.

use draft_codegen::StylesheetDialect;
use draft_core::UnitType;
use draft_host::{
    ConfigOverrides, HostAction, HostError, JsonFileStore, MemoryStore, Session, UiEvent,
};

const PROFILE_CARD: &str = include_str!("fixtures/profile_card.json");
const HIDDEN_ROOT: &str = include_str!("fixtures/hidden_root.json");
const TWO_NODES: &str = include_str!("fixtures/two_nodes.json");
const LOGO: &str = include_str!("fixtures/logo.json");

fn session(fixture: &str) -> Session<MemoryStore> {
    Session::from_selection_json(MemoryStore::new(), fixture).unwrap()
}

#[test]
fn test_profile_card_css_module() {
    let output = session(PROFILE_CARD).generate(&ConfigOverrides::new()).unwrap();

    insta::assert_snapshot!(output.generated_code_str, @r#"
    import styles from './index.css'
    import Follow from '@/components/Follow'

    const ProfileCard: React.FC = () => {
      return (
        <div className={styles.ProfileCard00}>
          <img className={styles.ProfileCardimg1} src="" />
          <p className={styles.text2}>Jane Doe</p>
          <Follow />
        </div>
      )
    }
    export default ProfileCard
    "#);

    insta::assert_snapshot!(output.css_string, @r"
    .ProfileCard00 {
      border-radius: 8px;
      display: flex;
      flex-direction: row;
      justify-content: flex-start;
      align-items: center;
      width: 320px;
      padding: 16px;
      gap: 12px;
      background-color: #ffffff;
      border: 1px solid #e5e5e5;
    }
    .ProfileCardimg1 {
      background-image: url(https://via.placeholder.com/48x48);
      background-size: cover;
    }
    .text2 {
      text-align: left;
      vertical-align: top;
      font-size: 16px;
      font-family: Inter;
      line-height: auto;
      color: #333333;
    }
    ");

    assert_eq!(output.css_style, StylesheetDialect::Css);
    assert_eq!(output.unit_type, UnitType::Px);
    assert!(!output.generated_code_str.contains("Debug"));
}

#[test]
fn test_profile_card_styled_components() {
    let output = session(PROFILE_CARD)
        .generate(&ConfigOverrides::new().with_stylesheet(StylesheetDialect::StyledComponents))
        .unwrap();

    insta::assert_snapshot!(output.generated_code_str, @r#"
    import Follow from '@/components/Follow'

    const ProfileCard: React.FC = () => {
      return (
        <ProfileCard>
          <Img src="" />
          <Text>Jane Doe</Text>
          <Follow />
        </ProfileCard>
      )
    }
    export default ProfileCard
    "#);
    assert!(output.css_string.starts_with("const ProfileCard00 = styled.div`\n  border-radius: 8px;\n"));
    assert!(output.css_string.contains("const text2 = styled.div`\n"));
    assert!(output.css_string.contains("const ProfileCardimg1 = styled.div`\n"));
}

#[test]
fn test_profile_card_tailwind() {
    let output = session(PROFILE_CARD)
        .generate(&ConfigOverrides::new().with_stylesheet(StylesheetDialect::Tailwind))
        .unwrap();

    assert_eq!(
        output.css_string,
        "rounded-[8px] flex flex-row justify-start items-center w-80 p-4 gap-3 bg-[#ffffff] border-[1px_solid_#e5e5e5] \
         bg-[url(https://via.placeholder.com/48x48)] bg-cover \
         text-left align-top text-[16px] font-['Inter'] leading-normal text-[#333333]"
    );
    assert!(output.generated_code_str.starts_with("import styles from './index.css'\n"));
}

#[test]
fn test_profile_card_rem_units() {
    let output = session(PROFILE_CARD)
        .generate(&ConfigOverrides::new().with_unit(UnitType::Rem))
        .unwrap();
    assert!(output.css_string.contains("  border-radius: 0.5rem;\n"));
    assert!(output.css_string.contains("  padding: 1rem;\n"));
    assert!(output.css_string.contains("  gap: 0.75rem;\n"));
    assert!(output.css_string.contains("  border: 0.0625rem solid #e5e5e5;\n"));
    // Fixed axis sizes and font sizes stay in pixels.
    assert!(output.css_string.contains("  width: 320px;\n"));
    assert!(output.css_string.contains("  font-size: 16px;\n"));
}

#[test]
fn test_vector_group_is_one_image() {
    let output = session(LOGO).generate(&ConfigOverrides::new()).unwrap();
    assert_eq!(
        output.css_string,
        ".img1 {\n  background-image: url(https://via.placeholder.com/120x32);\n  background-size: cover;\n}\n"
    );
    assert!(output.generated_code_str.contains("const Img: React.FC"));
    assert!(output.generated_code_str.contains("    <img className={styles.img1} src=\"\" />\n"));
    assert!(!output.generated_code_str.contains("Mark"));
}

#[test]
fn test_selection_errors() {
    let mut hidden = session(HIDDEN_ROOT);
    let err = hidden.generate(&ConfigOverrides::new()).unwrap_err();
    assert!(matches!(&err, HostError::InvisibleRoot { name } if name == "Draft Banner"));
    assert_eq!(hidden.open(), HostAction::Notify("Please select a visible node".to_string()));

    let mut two = session(TWO_NODES);
    assert!(matches!(
        two.generate(&ConfigOverrides::new()),
        Err(HostError::InvalidSelection { count: 2 })
    ));
}

#[test]
fn test_user_components_from_panel() {
    let mut session = session(PROFILE_CARD);
    let event = UiEvent::from_json(
        r#"{
            "type": "update-user-component-settings",
            "userComponentSettings": [
                { "name": "Avatar", "props": [{ "name": "size", "value": "48", "isRawExpression": true }] }
            ]
        }"#,
    )
    .unwrap();

    let HostAction::Render(output) = session.handle(event).unwrap() else {
        panic!("expected a render");
    };
    assert!(output.generated_code_str.starts_with(
        "import styles from './index.css'\nimport Avatar from '@/components/Avatar'\nimport Follow from '@/components/Follow'\n\n"
    ));
    assert!(output.generated_code_str.contains("      <Avatar size={48} />\n"));
    assert!(!output.css_string.contains("img"));
    assert_eq!(output.user_component_settings.len(), 1);
}

#[test]
fn test_preferences_survive_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft-settings.json");

    let store = JsonFileStore::open(&path).unwrap();
    let mut first = Session::from_selection_json(store, PROFILE_CARD).unwrap();
    first.respond(UiEvent::NewUnitTypeSet {
        unit_type: UnitType::RemAs10px,
    });
    first.respond(UiEvent::NewCssStyleSet {
        css_style: StylesheetDialect::Tailwind,
    });

    let store = JsonFileStore::open(&path).unwrap();
    let mut second = Session::from_selection_json(store, PROFILE_CARD).unwrap();
    let HostAction::Render(output) = second.open() else {
        panic!("expected a render");
    };
    assert_eq!(output.unit_type, UnitType::RemAs10px);
    assert_eq!(output.css_style, StylesheetDialect::Tailwind);
    assert!(output.css_string.contains("rounded-[0.8rem]"));
}

#[test]
fn test_unmodelled_kinds_still_generate() {
    let mut session = session(
        r#"[{ "name": "Toolbar", "type": "FRAME", "width": 200, "height": 40,
              "children": [
                  { "name": "Frame Slice", "type": "SLICE", "width": 200, "height": 40 },
                  { "name": "Merged", "type": "BOOLEAN_OPERATION", "width": 16, "height": 16,
                    "children": [{ "name": "A", "type": "VECTOR" }, { "name": "B", "type": "VECTOR" }] }
              ] }]"#,
    );

    let HostAction::Render(output) = session.open() else {
        panic!("expected a render");
    };
    assert!(output.generated_code_str.contains("<div className={styles.FrameSlice10} />"));
    assert!(output.generated_code_str.contains("<img className={styles.Toolbarimg1} src=\"\" />"));
    assert!(output.css_string.contains(".Toolbarimg1 {\n  position: absolute;\n"));
}
