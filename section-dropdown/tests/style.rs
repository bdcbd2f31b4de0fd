use section_dropdown::{
    Border, Color, DropdownError, DropdownStyles, Rgb, Style, StyleOverrides,
};

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_hex_parses_with_and_without_hash() {
    assert_eq!(Color::hex("#CCCCCC").unwrap().to_rgb(), Rgb::new(204, 204, 204));
    assert_eq!(Color::hex("ff8000").unwrap().to_rgb(), Rgb::new(255, 128, 0));
    assert_eq!("#fff".parse::<Color>().unwrap().to_rgb(), Rgb::new(255, 255, 255));
}

#[test]
fn test_hex_rejects_garbage() {
    assert_eq!(
        Color::hex("#zzzzzz"),
        Err(DropdownError::InvalidColor("#zzzzzz".into()))
    );
}

#[test]
fn test_oklch_white_and_black() {
    assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
    assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_merge_prefers_override_fields() {
    let base = Style::new()
        .background(Color::WHITE)
        .foreground(Color::BLACK)
        .border(Border::Rounded)
        .padding(1);
    let over = Style::new().background(Color::rgb(1, 2, 3)).padding(0);

    let merged = base.merge(&over);
    assert_eq!(merged.background, Some(Color::rgb(1, 2, 3)));
    assert_eq!(merged.foreground, Some(Color::BLACK));
    assert_eq!(merged.border, Some(Border::Rounded));
    assert_eq!(merged.padding, Some(0));
}

#[test]
fn test_merge_accumulates_text_attributes() {
    let merged = Style::new().underline().merge(&Style::new().bold());
    assert!(merged.text_style.bold);
    assert!(merged.text_style.underline);
    assert!(!merged.text_style.italic);
}

#[test]
fn test_styles_merge_per_part() {
    let defaults = DropdownStyles::default();
    let overrides = StyleOverrides {
        section_header_text: Some(Style::new().bold()),
        ..Default::default()
    };

    let merged = defaults.merged(&overrides);
    assert!(merged.section_header_text.text_style.bold);
    assert!(merged.section_header_text.text_style.underline);
    assert_eq!(merged.trigger, defaults.trigger);
    assert_eq!(merged.item, defaults.item);
}
