//! Pack/unpack behavior of [`FaceIndex`] and [`VertexIndex`] from the
//! outside: field round-trips, range rejection, and path formatting.

use d20::{build_path, format_path, get_pos, FaceIndex, VertexIndex};

#[test]
fn face_round_trips_all_fields() {
    let digits = [2, 0, 1, 3, 2];
    let path = build_path(&digits).unwrap();
    let f = FaceIndex::with_polarity(5, 11, path, true).unwrap();

    assert_eq!(f.lod(), 5);
    assert_eq!(f.d20(), 11);
    assert_eq!(f.path(), path);
    assert!(f.is_south());
    for (i, &digit) in digits.iter().enumerate() {
        assert_eq!(f.digit(i as u8 + 1), digit);
    }
}

#[test]
fn face_survives_bits_round_trip() {
    let f = FaceIndex::with_polarity(9, 4, 0x1234, false).unwrap();
    let back = FaceIndex::from_bits(f.bits());
    assert_eq!(back, f);
}

#[test]
fn face_new_rejects_lod_above_22() {
    assert!(FaceIndex::new(23, 0, 0).is_err());
    assert!(FaceIndex::new(22, 0, 0).is_ok());
}

#[test]
fn face_new_rejects_d20_above_19() {
    assert!(FaceIndex::new(0, 20, 0).is_err());
    assert!(FaceIndex::new(0, 19, 0).is_ok());
}

#[test]
fn face_base_has_zero_path_and_lod() {
    let f = FaceIndex::base(13).unwrap();
    assert_eq!(f.lod(), 0);
    assert_eq!(f.path(), 0);
}

#[test]
fn path_codec_round_trips_and_zero_pads() {
    let digits = [3, 1, 0];
    let path = build_path(&digits).unwrap();

    assert_eq!(get_pos(path, 1), 3);
    assert_eq!(get_pos(path, 2), 1);
    assert_eq!(get_pos(path, 3), 0);
    // Untouched levels beyond the digits supplied read as zero.
    assert_eq!(get_pos(path, 23), 0);

    assert_eq!(format_path(path, 3), "310");
}

#[test]
fn path_codec_rejects_bad_digits_and_overflow() {
    assert!(build_path(&[0, 1, 4]).is_err());
    assert!(build_path(&vec![0_u8; 24]).is_err());
    assert!(build_path(&vec![0_u8; 23]).is_ok());
}

#[test]
fn vertex_round_trips_all_fields() {
    let v = VertexIndex::new(8, 6, 987_654).unwrap();
    assert_eq!(v.lod(), 8);
    assert_eq!(v.d20(), 6);
    assert_eq!(v.index(), 987_654);
    assert!(!v.is_base_vertex());
}

#[test]
fn vertex_base_carries_no_face() {
    let v = VertexIndex::base(4).unwrap();
    assert!(v.is_base_vertex());
    assert_eq!(v.index(), 4);
}

#[test]
fn vertex_rejects_out_of_range_fields() {
    assert!(VertexIndex::new(23, 0, 0).is_err());
    assert!(VertexIndex::new(0, 20, 0).is_err());
    assert!(VertexIndex::new(0, 0, 1 << 51).is_err());
    assert!(VertexIndex::new(0, 0, (1 << 51) - 1).is_ok());
}
