//! 5x5 dot matrix font for printable ASCII.
//!
//! Each glyph is 25 bits of a `u32`, stored column by column: bit `row + col * 5` is the dot in
//! `row` (0 at the top) and `col` (0 at the left). Most glyphs leave column 4 empty, which gives
//! the spacing between characters.

/// Width and height of a glyph in dots.
pub const GLYPH_SIZE: usize = 5;

/// First code point in [`GLYPHS`].
pub const FIRST_CHAR: u8 = 32;

/// Glyph used for characters the font does not cover, same as `?`.
pub const UNKNOWN_GLYPH: u32 = 0x0022_d422;

/// Glyphs for the code points 32 (space) to 127 (DEL).
#[rustfmt::skip]
pub const GLYPHS: [u32; 96] = [
    0x0000_0000, 0x0000_02e0, 0x0001_8060, 0x00af_abea, // space ! " #
    0x00ae_d6ea, 0x0199_1133, 0x0105_56aa, 0x0000_0060, // $ % & '
    0x0000_45c0, 0x0000_3a20, 0x0005_1140, 0x0002_3880, // ( ) * +
    0x0000_2200, 0x0002_1080, 0x0000_0100, 0x0011_1110, // , - . /
    0x0007_462e, 0x0008_7e40, 0x0009_56b9, 0x0005_d629, // 0 1 2 3
    0x008f_a54c, 0x009a_d6b7, 0x008a_da88, 0x0011_9531, // 4 5 6 7
    0x00aa_d6aa, 0x0022_b6a2, 0x0000_0140, 0x0000_2a00, // 8 9 : ;
    0x0008_a880, 0x0005_2940, 0x0002_2a20, 0x0022_d422, // < = > ?
    0x00e4_d62e, 0x000f_14be, 0x0005_56bf, 0x0008_c62e, // @ A B C
    0x0007_463f, 0x0008_d6bf, 0x0000_94bf, 0x00ca_c62e, // D E F G
    0x000f_909f, 0x0000_47f1, 0x0017_c629, 0x0008_a89f, // H I J K
    0x0008_421f, 0x01f1_105f, 0x01f4_105f, 0x0007_462e, // L M N O
    0x0001_14bf, 0x000b_6526, 0x0105_14bf, 0x0004_d6b2, // P Q R S
    0x0010_fc21, 0x0007_c20f, 0x0074_4107, 0x01f4_111f, // T U V W
    0x000d_909b, 0x0011_7041, 0x0008_ceb9, 0x0008_c7e0, // X Y Z [
    0x0104_1041, 0x000f_c620, 0x0001_0440, 0x0108_4210, // \ ] ^ _
    0x0000_0820, 0x010f_4a4c, 0x0004_529f, 0x0009_4a4c, // ` a b c
    0x000f_d288, 0x0009_56ae, 0x0000_97c4, 0x0007_d6a2, // d e f g
    0x000c_109f, 0x0000_03a0, 0x0006_c200, 0x0008_289f, // h i j k
    0x0008_41e0, 0x01e1_105e, 0x000e_085e, 0x0006_4a4c, // l m n o
    0x0002_295e, 0x000f_2944, 0x0001_085c, 0x0001_2a90, // p q r s
    0x010a_51e0, 0x010f_420e, 0x0064_4106, 0x01e8_221e, // t u v w
    0x0009_3192, 0x0022_2292, 0x0009_5b52, 0x0008_fc80, // x y z {
    0x0000_03e0, 0x0000_13f1, 0x0084_1080, 0x0022_d422, // | } ~ DEL
];

/// Bitmap of `c`, or [`UNKNOWN_GLYPH`] outside 32..=127.
pub fn glyph(c: char) -> u32 {
    match u8::try_from(c) {
        Ok(code @ FIRST_CHAR..=127) => GLYPHS[usize::from(code - FIRST_CHAR)],
        _ => UNKNOWN_GLYPH,
    }
}

/// Whether the dot at `row`, `col` of `glyph` is set.
#[inline]
pub fn dot(glyph: u32, row: usize, col: usize) -> bool {
    glyph & (1 << (row + col * GLYPH_SIZE)) != 0
}
