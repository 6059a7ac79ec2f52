//! Generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draft_codegen::{MarkupDialect, MarkupGenerator, StylesheetDialect, StylesheetGenerator};
use draft_core::{LayoutMode, Paint, SceneNode, TextCounter, UnitType};
use draft_infer::{build_tag_tree, BuildOptions};

fn card(index: usize) -> SceneNode {
    SceneNode::frame(format!("Card {}", index))
        .with_size(320.0, 120.0)
        .with_fill(Paint::solid(1.0, 1.0, 1.0))
        .with_layout(|l| {
            l.layout_mode = LayoutMode::Horizontal;
            l.padding_top = 16.0;
            l.padding_bottom = 16.0;
            l.padding_left = 16.0;
            l.padding_right = 16.0;
            l.item_spacing = 8.0;
        })
        .with_child(SceneNode::frame("Avatar").with_size(48.0, 48.0).with_fill(Paint::image()))
        .with_child(SceneNode::text("Title", "Lorem ipsum").with_text(|t| t.font_size = 16.0))
}

fn page(cards: usize) -> SceneNode {
    (0..cards).fold(
        SceneNode::frame("Page").with_layout(|l| l.layout_mode = LayoutMode::Vertical),
        |page, i| page.with_child(card(i)),
    )
}

fn generate_markup(c: &mut Criterion) {
    let scene = page(50);
    let generator = MarkupGenerator::new().unwrap();
    c.bench_function("generate_markup", |b| {
        b.iter(|| {
            let tag = build_tag_tree(black_box(&scene), &BuildOptions::new(UnitType::Px), &mut TextCounter::new()).unwrap();
            generator.generate(&tag, MarkupDialect::ElementBased)
        })
    });
}

fn generate_stylesheets(c: &mut Criterion) {
    let scene = page(50);
    let tag = build_tag_tree(&scene, &BuildOptions::new(UnitType::Rem), &mut TextCounter::new()).unwrap();
    let generator = StylesheetGenerator::new();
    c.bench_function("generate_css", |b| {
        b.iter(|| generator.generate(black_box(&tag), StylesheetDialect::Css))
    });
    c.bench_function("generate_tailwind", |b| {
        b.iter(|| generator.generate(black_box(&tag), StylesheetDialect::Tailwind))
    });
}

criterion_group!(benches, generate_markup, generate_stylesheets);
criterion_main!(benches);
