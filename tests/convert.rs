use pixrect::{Canvas, PixelBuffer, convert};

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&rgba);
    }
    PixelBuffer::new(width, height, data).unwrap()
}

fn set_pixel(buffer: &mut PixelBuffer, x: u32, y: u32, rgba: [u8; 4]) {
    let i = ((y * buffer.width + x) * 4) as usize;
    buffer.data[i..i + 4].copy_from_slice(&rgba);
}

#[test]
fn end_to_end_two_red_pixels() {
    let buffer = solid(2, 1, [255, 0, 0, 255]);
    let document = convert(&buffer).unwrap();

    assert_eq!(
        document.canvas,
        Canvas {
            width: 2,
            height: 1
        }
    );
    assert_eq!(document.rects.len(), 1);
    let rect = document.rects[0].rect;
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0, 0, 2, 1));

    let svg = document.to_svg();
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="1" viewBox="0 0 2 1">"#));
    assert!(svg.contains(r#"<rect x="0" y="0" width="2" height="1" fill="rgba(254,0,0,1)"/>"#));
}

#[test]
fn convert_is_deterministic() {
    let mut buffer = solid(10, 10, [30, 60, 90, 255]);
    set_pixel(&mut buffer, 3, 3, [200, 10, 10, 255]);
    set_pixel(&mut buffer, 7, 2, [10, 200, 10, 128]);
    set_pixel(&mut buffer, 5, 9, [0, 0, 0, 0]);

    let first = convert(&buffer).unwrap().to_svg();
    let second = convert(&buffer).unwrap().to_svg();
    assert_eq!(first, second);
}

#[test]
fn fully_transparent_buffer_emits_no_rects() {
    let buffer = solid(8, 8, [120, 130, 140, 0]);
    let document = convert(&buffer).unwrap();

    assert!(document.rects.is_empty());
    let svg = document.to_svg();
    assert!(!svg.contains("<rect"));
    assert!(svg.contains(r#"viewBox="0 0 8 8""#));
}

#[test]
fn document_shape_matches_canvas_not_rect_count() {
    // Checkerboard: many rectangles, canvas stays 10x10.
    let mut buffer = solid(10, 10, [20, 20, 20, 255]);
    for y in 0..10 {
        for x in 0..10 {
            if (x + y) % 2 == 1 {
                set_pixel(&mut buffer, x, y, [240, 240, 240, 255]);
            }
        }
    }

    let document = convert(&buffer).unwrap();
    assert_eq!(
        document.canvas,
        Canvas {
            width: 10,
            height: 10
        }
    );
    assert!(document.rects.len() > 1);
    assert!(document.to_svg().contains(r#"width="10" height="10""#));
}

#[test]
fn every_opaque_sample_lands_in_exactly_one_rect() {
    // Checkerboard of two colors at stride 1: no run ever extends, so the
    // merged area must equal the opaque sample count exactly, split evenly
    // between the two color passes.
    let mut buffer = solid(10, 10, [20, 20, 20, 255]);
    for y in 0..10 {
        for x in 0..10 {
            if (x + y) % 2 == 1 {
                set_pixel(&mut buffer, x, y, [240, 240, 240, 255]);
            }
        }
    }

    let document = convert(&buffer).unwrap();
    let total_area: u64 = document
        .rects
        .iter()
        .map(|i| u64::from(i.rect.width) * u64::from(i.rect.height))
        .sum();
    assert_eq!(total_area, 100);

    let dark_area: u64 = document
        .rects
        .iter()
        .filter(|i| i.fill.r == 20)
        .map(|i| u64::from(i.rect.width) * u64::from(i.rect.height))
        .sum();
    assert_eq!(dark_area, 50);
}

#[test]
fn transparent_pixels_are_excluded_from_coverage() {
    let mut buffer = solid(4, 1, [90, 90, 90, 255]);
    set_pixel(&mut buffer, 1, 0, [90, 90, 90, 0]);

    let document = convert(&buffer).unwrap();
    let total_area: u64 = document
        .rects
        .iter()
        .map(|i| u64::from(i.rect.width) * u64::from(i.rect.height))
        .sum();
    assert_eq!(total_area, 3);
    // The gap at x == 1 splits the row into two rects.
    assert_eq!(document.rects.len(), 2);
}

#[test]
fn large_canvas_samples_on_a_wider_stride() {
    // 800x800 selects stride 2: rows merge into one 800-wide rect each, one
    // rect per sampled row.
    let buffer = solid(800, 800, [100, 100, 100, 255]);
    let document = convert(&buffer).unwrap();

    assert_eq!(document.rects.len(), 400);
    assert!(
        document
            .rects
            .iter()
            .all(|i| i.rect.width == 800 && i.rect.height == 2)
    );

    let total_area: u64 = document
        .rects
        .iter()
        .map(|i| u64::from(i.rect.width) * u64::from(i.rect.height))
        .sum();
    assert_eq!(total_area, 800 * 800);
}

#[test]
fn edge_cells_keep_declared_stride_size() {
    // 801 wide at stride 2: the last column anchors at x == 800 and its cell
    // overhangs the buffer, so each row's merged width is 802.
    let buffer = solid(801, 800, [100, 100, 100, 255]);
    let document = convert(&buffer).unwrap();

    assert!(document.rects.iter().all(|i| i.rect.width == 802));
    assert_eq!(document.canvas.width, 801);
}

#[test]
fn zero_sized_buffer_is_rejected_outright() {
    let buffer = PixelBuffer {
        width: 0,
        height: 4,
        data: vec![],
    };
    assert!(convert(&buffer).is_err());

    let buffer = PixelBuffer {
        width: 4,
        height: 4,
        data: vec![0; 7], // truncated channels
    };
    assert!(convert(&buffer).is_err());
}
