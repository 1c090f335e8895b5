use pixelart::{Color, PixelEdit, Raster, RasterError};

const PAPER: Color = Color::rgb(0xf0, 0xf0, 0xf0);
const RED: Color = Color::rgb(0xff, 0x00, 0x00);
const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

#[test]
fn empty_fills_uniformly() {
    let raster = Raster::empty(4, 3, PAPER).unwrap();
    assert_eq!(raster.width(), 4);
    assert_eq!(raster.height(), 3);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(raster.pixel(x, y).unwrap(), PAPER);
        }
    }
}

#[test]
fn empty_rejects_non_positive_dimensions() {
    assert_eq!(
        Raster::empty(0, 5, PAPER),
        Err(RasterError::InvalidDimension { width: 0, height: 5 })
    );
    assert_eq!(
        Raster::empty(5, -1, PAPER),
        Err(RasterError::InvalidDimension { width: 5, height: -1 })
    );
}

#[test]
fn pixel_out_of_bounds_errors() {
    let raster = Raster::empty(4, 3, PAPER).unwrap();
    assert!(matches!(
        raster.pixel(4, 0),
        Err(RasterError::OutOfBounds { .. })
    ));
    assert!(matches!(
        raster.pixel(0, -1),
        Err(RasterError::OutOfBounds { .. })
    ));
}

#[test]
fn draw_returns_new_raster_and_leaves_original_untouched() {
    let base = Raster::empty(4, 3, PAPER).unwrap();
    let drawn = base.draw(&[PixelEdit::new(1, 1, RED)]);

    assert_eq!(drawn.pixel(1, 1).unwrap(), RED);
    assert_eq!(base.pixel(1, 1).unwrap(), PAPER);
}

#[test]
fn draw_last_write_wins_within_a_batch() {
    let base = Raster::empty(4, 3, PAPER).unwrap();
    let drawn = base.draw(&[PixelEdit::new(2, 2, RED), PixelEdit::new(2, 2, BLUE)]);
    assert_eq!(drawn.pixel(2, 2).unwrap(), BLUE);
}

#[test]
fn sequential_batches_equal_their_concatenation() {
    let base = Raster::empty(5, 5, PAPER).unwrap();
    let first = vec![PixelEdit::new(0, 0, RED), PixelEdit::new(1, 1, RED)];
    let second = vec![PixelEdit::new(3, 3, BLUE), PixelEdit::new(4, 4, BLUE)];

    let sequential = base.draw(&first).draw(&second);
    let concatenated: Vec<_> = first.iter().chain(&second).copied().collect();
    assert_eq!(sequential, base.draw(&concatenated));
}

#[test]
fn overlapping_batches_last_write_wins_by_order() {
    let base = Raster::empty(3, 3, PAPER).unwrap();
    let result = base
        .draw(&[PixelEdit::new(1, 1, RED)])
        .draw(&[PixelEdit::new(1, 1, BLUE)]);
    assert_eq!(result.pixel(1, 1).unwrap(), BLUE);
}

#[test]
fn draw_skips_out_of_bounds_edits() {
    let base = Raster::empty(2, 2, PAPER).unwrap();
    let drawn = base.draw(&[PixelEdit::new(-1, 0, RED), PixelEdit::new(5, 5, RED)]);
    assert_eq!(drawn, base);
}

#[test]
fn color_parses_hex_literals() {
    assert_eq!("#a1b2c3".parse::<Color>().unwrap(), Color::rgb(0xa1, 0xb2, 0xc3));
    assert_eq!("A1B2C3".parse::<Color>().unwrap(), Color::rgb(0xa1, 0xb2, 0xc3));
    assert_eq!(Color::rgb(0xa1, 0xb2, 0xc3).to_string(), "#a1b2c3");
}

#[test]
fn color_rejects_bad_literals() {
    for bad in ["", "#fff", "#gggggg", "#f0f0f0f0", "f0f0f"] {
        assert!(matches!(
            bad.parse::<Color>(),
            Err(RasterError::InvalidColor(_))
        ));
    }
}
