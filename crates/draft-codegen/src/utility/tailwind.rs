//! Built-in Tailwind translator.

use super::parser::{parse_rules, Declaration};
use super::{TranslatedRule, TranslationOutcome, TranslationStatus, UtilityTranslator};

/// Maps flat declarations onto Tailwind utilities.
///
/// Pixel spacing that lands on a default spacing step uses the step's token;
/// every other value falls back to an arbitrary-value utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindTranslator;

impl TailwindTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl UtilityTranslator for TailwindTranslator {
    fn translate(&self, css: &str) -> TranslationOutcome {
        let rules = match parse_rules(css) {
            Ok(rules) => rules,
            Err(err) => {
                tracing::warn!(
                    near = %err.input.chars().take(32).collect::<String>(),
                    "could not parse stylesheet for utility translation"
                );
                return TranslationOutcome::failed();
            }
        };

        let results = rules
            .into_iter()
            .filter(|rule| !rule.declarations.is_empty())
            .map(|rule| TranslatedRule {
                selector: rule.selector.to_string(),
                result_val: rule
                    .declarations
                    .iter()
                    .map(utility_classes)
                    .collect::<Vec<_>>()
                    .join(" "),
            })
            .collect();

        TranslationOutcome {
            status: TranslationStatus::Ok,
            results,
        }
    }
}

/// `[` `]` payloads cannot contain whitespace.
fn arbitrary(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Default spacing scale as (pixels, token).
const SPACING_SCALE: &[(f64, &str)] = &[
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (112.0, "28"),
    (128.0, "32"),
    (144.0, "36"),
    (160.0, "40"),
    (176.0, "44"),
    (192.0, "48"),
    (208.0, "52"),
    (224.0, "56"),
    (240.0, "60"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
];

/// `p-4` for `16px`, `p-[13px]` for anything off the scale.
fn spacing(prefix: &str, value: &str) -> String {
    let token = value
        .strip_suffix("px")
        .and_then(|n| n.parse::<f64>().ok())
        .and_then(|px| SPACING_SCALE.iter().find(|(step, _)| *step == px))
        .map(|(_, token)| *token);
    match token {
        Some(token) => format!("{}-{}", prefix, token),
        None => format!("{}-[{}]", prefix, arbitrary(value)),
    }
}

fn padding(value: &str) -> String {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [all] => spacing("p", all),
        [y, x] => format!("{} {}", spacing("py", y), spacing("px", x)),
        [t, r, b, l] => [("pt", t), ("pr", r), ("pb", b), ("pl", l)]
            .iter()
            .map(|(prefix, v)| spacing(prefix, v))
            .collect::<Vec<_>>()
            .join(" "),
        _ => fallback("padding", value),
    }
}

fn fallback(property: &str, value: &str) -> String {
    format!("[{}:{}]", property, arbitrary(value))
}

fn utility_classes(decl: &Declaration<'_>) -> String {
    let Declaration { property, value } = *decl;
    let keyword = match (property, value) {
        ("position", "absolute" | "relative" | "fixed" | "sticky" | "static") => Some(value),
        ("display", "flex") => Some("flex"),
        ("display", "block") => Some("block"),
        ("display", "none") => Some("hidden"),
        ("flex-direction", "row") => Some("flex-row"),
        ("flex-direction", "column") => Some("flex-col"),
        ("justify-content", "flex-start") => Some("justify-start"),
        ("justify-content", "flex-end") => Some("justify-end"),
        ("justify-content", "center") => Some("justify-center"),
        ("justify-content", "space-between") => Some("justify-between"),
        ("align-items", "flex-start") => Some("items-start"),
        ("align-items", "flex-end") => Some("items-end"),
        ("align-items", "center") => Some("items-center"),
        ("align-items", "baseline") => Some("items-baseline"),
        ("flex-grow", "1") => Some("grow"),
        ("flex-grow", "0") => Some("grow-0"),
        ("text-align", "left") => Some("text-left"),
        ("text-align", "right") => Some("text-right"),
        ("text-align", "center") => Some("text-center"),
        ("text-align", "justify") => Some("text-justify"),
        ("vertical-align", "top") => Some("align-top"),
        ("vertical-align", "middle") => Some("align-middle"),
        ("vertical-align", "bottom") => Some("align-bottom"),
        ("text-decoration", "underline") => Some("underline"),
        ("text-decoration", "line-through") => Some("line-through"),
        ("line-height", "auto") => Some("leading-normal"),
        ("background-size", "cover") => Some("bg-cover"),
        _ => None,
    };
    if let Some(keyword) = keyword {
        return keyword.to_string();
    }

    match property {
        "padding" => padding(value),
        "gap" => spacing("gap", value),
        "left" => spacing("left", value),
        "top" => spacing("top", value),
        "width" => spacing("w", value),
        "height" => spacing("h", value),
        "border-radius" if !value.contains(' ') => format!("rounded-[{}]", value),
        "font-size" => format!("text-[{}]", value),
        "font-family" => format!("font-['{}']", arbitrary(value)),
        "letter-spacing" => format!("tracking-[{}]", value),
        "line-height" => format!("leading-[{}]", value),
        "color" => format!("text-[{}]", arbitrary(value)),
        "background-color" | "background" | "background-image" => {
            format!("bg-[{}]", arbitrary(value))
        }
        "border" => format!("border-[{}]", arbitrary(value)),
        "opacity" => format!("opacity-[{}]", value),
        "flex-grow" => format!("grow-[{}]", value),
        _ => fallback(property, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(property: &str, value: &str) -> String {
        utility_classes(&Declaration { property, value })
    }

    #[test]
    fn test_spacing_scale() {
        assert_eq!(classes("gap", "12px"), "gap-3");
        assert_eq!(classes("gap", "0px"), "gap-0");
        assert_eq!(classes("gap", "10px"), "gap-2.5");
        assert_eq!(classes("gap", "1px"), "gap-px");
        assert_eq!(classes("gap", "0.75rem"), "gap-[0.75rem]");
        assert_eq!(classes("width", "384px"), "w-96");
        assert_eq!(classes("top", "13px"), "top-[13px]");
        // Off the default scale even though they sit on the 4px grid.
        assert_eq!(classes("width", "200px"), "w-[200px]");
        assert_eq!(classes("padding", "52px"), "p-[52px]");
        assert_eq!(classes("height", "400px"), "h-[400px]");
        assert_eq!(classes("left", "-8px"), "left-[-8px]");
    }

    #[test]
    fn test_padding_shorthand() {
        assert_eq!(classes("padding", "16px"), "p-4");
        assert_eq!(classes("padding", "8px 16px"), "py-2 px-4");
        assert_eq!(classes("padding", "3px 4px 8px 12px"), "pt-[3px] pr-1 pb-2 pl-3");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(classes("display", "flex"), "flex");
        assert_eq!(classes("flex-direction", "column"), "flex-col");
        assert_eq!(classes("justify-content", "space-between"), "justify-between");
        assert_eq!(classes("align-items", "baseline"), "items-baseline");
        assert_eq!(classes("position", "absolute"), "absolute");
        assert_eq!(classes("vertical-align", "middle"), "align-middle");
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(classes("color", "#ff0000"), "text-[#ff0000]");
        assert_eq!(classes("border", "1px solid #000000"), "border-[1px_solid_#000000]");
        assert_eq!(classes("font-family", "Noto Sans"), "font-['Noto_Sans']");
        assert_eq!(
            classes("background", "linear-gradient(-90deg, rgba(0, 0, 0, 1) 0%)"),
            "bg-[linear-gradient(-90deg,_rgba(0,_0,_0,_1)_0%)]"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classes("transform", "rotate(-46deg)"), "[transform:rotate(-46deg)]");
        assert_eq!(classes("border-radius", "4px 0px 4px 0px"), "[border-radius:4px_0px_4px_0px]");
    }

    #[test]
    fn test_translate_one_result_per_rule() {
        let css = ".Row00 {\n  display: flex;\n  gap: 8px;\n}\n.text1 {\n  font-size: 14px;\n}\n";
        let outcome = TailwindTranslator::new().translate(css);
        assert_eq!(outcome.status, TranslationStatus::Ok);
        assert_eq!(
            outcome.results,
            vec![
                TranslatedRule {
                    selector: ".Row00".to_string(),
                    result_val: "flex gap-2".to_string(),
                },
                TranslatedRule {
                    selector: ".text1".to_string(),
                    result_val: "text-[14px]".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_translate_parse_failure() {
        let outcome = TailwindTranslator::new().translate(".broken { color: red;");
        assert_eq!(outcome, TranslationOutcome::failed());
    }
}
