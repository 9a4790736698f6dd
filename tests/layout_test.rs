//! Pagination tests through the public API.

use slidec::{build_deck, Block, CompileOptions, SlideKind};

fn paragraphs(n: usize) -> String {
    let mut html = String::from("<section>");
    for i in 0..n {
        html.push_str(&format!("<p>paragraph {i}</p>"));
    }
    html.push_str("</section>");
    html
}

#[test]
fn test_ten_paragraphs_fill_three_pages() {
    let deck = build_deck(&paragraphs(10), &CompileOptions::default()).unwrap();

    assert_eq!(deck.slide_count(), 3);
    let counts: Vec<usize> = deck.slides.iter().map(|s| s.blocks.len()).collect();
    assert_eq!(counts, vec![4, 4, 2]);

    // Document order survives the page breaks.
    let texts: Vec<String> = deck
        .slides
        .iter()
        .flat_map(|s| s.blocks.iter())
        .map(|p| p.block.plain_text())
        .collect();
    let expected: Vec<String> = (0..10).map(|i| format!("paragraph {i}")).collect();
    assert_eq!(texts, expected);
}

#[test]
fn test_single_page_when_content_fits() {
    let deck = build_deck(&paragraphs(3), &CompileOptions::default()).unwrap();
    assert_eq!(deck.slide_count(), 1);
}

#[test]
fn test_large_table_gets_its_own_page() {
    let mut html = String::from("<section><p>before</p><table>");
    for i in 0..30 {
        html.push_str(&format!("<tr><td>row {i}</td></tr>"));
    }
    html.push_str("</table><p>after</p></section>");

    let deck = build_deck(&html, &CompileOptions::default()).unwrap();
    assert_eq!(deck.slide_count(), 3);
    assert_eq!(deck.slides[1].blocks.len(), 1);
    assert!(matches!(deck.slides[1].blocks[0].block, Block::Table { .. }));
}

#[test]
fn test_backgrounds_follow_slide_kind() {
    let html = r#"<div class="slide title-slide"><h1>T</h1></div>
                  <div class="slide"><p>c</p></div>"#;

    let deck = build_deck(html, &CompileOptions::default()).unwrap();
    assert_eq!(deck.slides[0].kind, SlideKind::Title);
    assert_eq!(deck.slides[0].background_color, "#1f4e79");
    assert_eq!(deck.slides[1].background_color, "#ffffff");
}

#[test]
fn test_theme_color_flows_to_structural_pages() {
    let html = r#"<div class="slide section-break"><h2>S</h2></div>"#;
    let options = CompileOptions::new().with_theme_color("teal");

    let deck = build_deck(html, &options).unwrap();
    assert_eq!(deck.slides[0].background_color, "#008080");
    assert_eq!(deck.theme_color, "teal");
}

#[test]
fn test_placements_start_below_top_margin() {
    let deck = build_deck(&paragraphs(2), &CompileOptions::default()).unwrap();
    let page = &deck.slides[0];
    assert_eq!(page.blocks[0].y_in, 0.7);
    assert!(page.blocks[1].y_in > page.blocks[0].y_in + page.blocks[0].height_in);
}

#[test]
fn test_explicit_slides_never_merge_onto_one_page() {
    let html = r#"<div class="slide"><p>a</p></div>
                  <div class="slide"><p>b</p></div>"#;

    let deck = build_deck(html, &CompileOptions::default()).unwrap();
    assert_eq!(deck.slide_count(), 2);
}
