//! End-to-end style resolution tests through the public API.

use slidec::{compile, Block};

fn first_block(html: &str) -> Block {
    let slides = compile(html).unwrap();
    slides[0].blocks[0].clone()
}

fn style_of(block: &Block) -> &slidec::ResolvedStyle {
    block.style()
}

#[test]
fn test_embedded_sheet_applies() {
    let block = first_block(
        "<style>p { color: #ff0000 }</style><section><p>red</p></section>",
    );
    assert_eq!(style_of(&block).color, "#ff0000");
}

#[test]
fn test_id_beats_class() {
    let block = first_block(
        r##"<style>
              #lead { color: #0000ff }
              .note { color: #ff0000 }
            </style>
            <section><p id="lead" class="note">x</p></section>"##,
    );
    assert_eq!(style_of(&block).color, "#0000ff");
}

#[test]
fn test_inline_style_wins() {
    let block = first_block(
        r##"<style>#lead { color: #ff0000 }</style>
            <section><p id="lead" style="color: #00aa00">x</p></section>"##,
    );
    assert_eq!(style_of(&block).color, "#00aa00");
}

#[test]
fn test_named_color_green() {
    let block = first_block(
        "<style>p { color: green }</style><section><p>x</p></section>",
    );
    assert_eq!(style_of(&block).color, "#008000");
}

#[test]
fn test_descendant_combinator() {
    let slides = compile(
        r#"<style>.card p { color: #ff0000 }</style>
           <section>
             <div class="card"><p>inside</p></div>
             <p>outside</p>
           </section>"#,
    )
    .unwrap();
    let blocks = &slides[0].blocks;
    assert_eq!(blocks[0].style().color, "#ff0000");
    assert_eq!(blocks[1].style().color, "#111111");
}

#[test]
fn test_first_child_pseudo_class() {
    let slides = compile(
        "<style>li:first-child { color: #ff0000 }</style>
         <section><ul><li>a</li><li>b</li></ul></section>",
    )
    .unwrap();
    let blocks = &slides[0].blocks;
    assert_eq!(blocks[0].style().color, "#ff0000");
    assert_eq!(blocks[1].style().color, "#111111");
}

#[test]
fn test_child_combinator_requires_direct_parent() {
    let slides = compile(
        r#"<style>section > p { color: #ff0000 }</style>
           <section>
             <p>direct</p>
             <div><p>nested</p></div>
           </section>"#,
    )
    .unwrap();
    let blocks = &slides[0].blocks;
    assert_eq!(blocks[0].style().color, "#ff0000");
    assert_eq!(blocks[1].style().color, "#111111");
}

#[test]
fn test_font_size_rounds_to_points() {
    let block = first_block(
        "<style>p { font-size: 20px }</style><section><p>x</p></section>",
    );
    // 20px * 0.75 = 15pt
    assert_eq!(style_of(&block).font_size_pt(), 15);
    assert_eq!(style_of(&block).font_size_px, 20.0);
}

#[test]
fn test_multiple_sheets_accumulate_in_order() {
    let block = first_block(
        "<style>p { color: #ff0000 }</style>
         <style>p { color: #0000ff }</style>
         <section><p>x</p></section>",
    );
    assert_eq!(style_of(&block).color, "#0000ff");
}
