//! Tests for decoding the globe textures.

use blue_marble::{
    error::RenderError,
    texture::{decode, mip_chain},
};
use image::{Rgb, RgbImage, RgbaImage};

#[test]
fn decode_flips_rows_and_adds_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stripes.png");

    let mut source = RgbImage::new(2, 2);
    for x in 0..2 {
        source.put_pixel(x, 0, Rgb([255, 0, 0]));
        source.put_pixel(x, 1, Rgb([0, 0, 255]));
    }
    source.save(&path).unwrap();

    let decoded = decode(&path).unwrap();
    assert_eq!(decoded.dimensions(), (2, 2));
    // the bottom row of the picture comes first
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
}

#[test]
fn missing_texture_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("earth_2k.jpg");

    let err = decode(&path).unwrap_err();
    assert!(matches!(err, RenderError::LoadTexture { .. }));
    assert!(err.to_string().contains("earth_2k.jpg"));
}

#[test]
fn mip_chain_halves_down_to_one_texel() {
    let levels = mip_chain(RgbaImage::new(16, 4));
    let sizes = levels.iter().map(|level| level.dimensions()).collect::<Vec<_>>();
    assert_eq!(sizes, [(16, 4), (8, 2), (4, 1), (2, 1), (1, 1)]);
}

#[test]
fn mip_chain_of_single_texel_is_just_the_base() {
    assert_eq!(mip_chain(RgbaImage::new(1, 1)).len(), 1);
}
