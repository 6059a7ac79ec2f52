//! React component markup emitter.

use draft_core::{naming, Tag, TagAttribute};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::templates::TemplateEngine;

const COMPONENT_TEMPLATE: &str = "component";

const COMPONENT_SOURCE: &str = "{{preamble}}const {{capitalize (sanitize component)}}: React.FC = () => {
  return (
{{body}}
  )
}
export default {{capitalize (sanitize component)}}
";

/// Base indentation of the root expression inside `return (...)`.
const BASE_INDENT: usize = 4;

/// Markup grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkupDialect {
    /// Plain elements with a CSS-module class lookup.
    #[default]
    ElementBased,
    /// One named component per tag, styles colocated by name.
    ComponentBased,
}

/// React function component generator.
pub struct MarkupGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> MarkupGenerator<'a> {
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(COMPONENT_TEMPLATE, COMPONENT_SOURCE)?;
        Ok(Self { engine })
    }

    /// Render the full component source for a tag tree.
    pub fn generate(&self, tag: &Tag<'_>, dialect: MarkupDialect) -> Result<String> {
        let mut preamble = String::new();
        if dialect == MarkupDialect::ElementBased {
            preamble.push_str("import styles from './index.css'\n");
        }
        for name in instance_imports(tag) {
            preamble.push_str(&format!(
                "import {} from '@/components/{}'\n",
                naming::capitalize_first(&name),
                name
            ));
        }
        if !preamble.is_empty() {
            preamble.push('\n');
        }

        self.engine.render(
            COMPONENT_TEMPLATE,
            &serde_json::json!({
                "preamble": preamble,
                "component": tag.name,
                "body": render_jsx(tag, dialect),
            }),
        )
    }
}

/// Names of every instance reachable without crossing another instance, in
/// first-seen order.
fn instance_imports(tag: &Tag<'_>) -> IndexSet<String> {
    fn visit(tag: &Tag<'_>, names: &mut IndexSet<String>) {
        if tag.is_component_instance {
            names.insert(tag.name.clone());
            return;
        }
        for child in &tag.children {
            visit(child, names);
        }
    }

    let mut names = IndexSet::new();
    visit(tag, &mut names);
    names
}

fn guess_element(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.contains("section") {
        "section"
    } else if lower.contains("article") {
        "article"
    } else {
        "div"
    }
}

fn element_name(tag: &Tag<'_>, dialect: MarkupDialect) -> String {
    let name = match dialect {
        MarkupDialect::ElementBased if !tag.is_component_definition => {
            if tag.is_text {
                "p".to_string()
            } else if tag.is_image {
                "img".to_string()
            } else {
                guess_element(&tag.name).to_string()
            }
        }
        _ if tag.is_text => "Text".to_string(),
        _ => naming::capitalize_first(&naming::strip_whitespace(&tag.name)),
    };
    naming::sanitize(&name)
}

fn class_attribute(tag: &Tag<'_>, dialect: MarkupDialect) -> String {
    if dialect != MarkupDialect::ElementBased || tag.is_component_definition || tag.style.is_empty() {
        return String::new();
    }
    let class = naming::sanitize(&tag.style.class_name);
    if naming::needs_bracket_access(&class) {
        format!(" className={{styles[\"{}\"]}}", class)
    } else {
        format!(" className={{styles.{}}}", class)
    }
}

fn attribute(attr: &TagAttribute) -> String {
    match &attr.value {
        None => format!(" {}", attr.name),
        Some(value) if attr.is_raw_expression => format!(" {}={{{}}}", attr.name, value),
        Some(value) => format!(" {}=\"{}\"", attr.name, value),
    }
}

/// Render the root expression, four base spaces plus two per level.
pub fn render_jsx(tag: &Tag<'_>, dialect: MarkupDialect) -> String {
    let mut lines = Vec::new();
    render_tag(tag, dialect, 0, &mut lines);
    lines.join("\n")
}

fn render_tag(tag: &Tag<'_>, dialect: MarkupDialect, level: usize, lines: &mut Vec<String>) {
    let spaces = " ".repeat(BASE_INDENT + level * 2);
    let attributes: String = tag.properties.iter().map(attribute).collect();

    if tag.is_component_instance {
        lines.push(format!(
            "{}<{}{} />",
            spaces,
            naming::capitalize_first(&naming::sanitize(&tag.name)),
            attributes
        ));
        return;
    }

    let name = element_name(tag, dialect);
    let class = class_attribute(tag, dialect);

    if !tag.children.is_empty() {
        lines.push(format!("{}<{}{}{}>", spaces, name, class, attributes));
        for child in &tag.children {
            render_tag(child, dialect, level + 1, lines);
        }
        lines.push(format!("{}</{}>", spaces, name));
    } else if tag.is_text {
        lines.push(format!(
            "{}<{}{}{}>{}</{}>",
            spaces,
            name,
            class,
            attributes,
            tag.text_characters.as_deref().unwrap_or_default(),
            name
        ));
    } else {
        lines.push(format!("{}<{}{}{} />", spaces, name, class, attributes));
    }
}
