//! Writer/Reader roundtrip matrix for the buffers crate.

use dynpack_buffers::{Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0x00);
    assert_eq!(r.u8(), 0x7F);
    assert_eq!(r.u8(), 0xFF);
}

#[test]
fn roundtrip_i8() {
    let mut w = Writer::new();
    w.i8(i8::MIN);
    w.i8(-1);
    w.i8(0);
    w.i8(i8::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i8(), i8::MIN);
    assert_eq!(r.i8(), -1);
    assert_eq!(r.i8(), 0);
    assert_eq!(r.i8(), i8::MAX);
}

#[test]
fn roundtrip_u16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(0x0102);
    w.u16(u16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u16(), 0);
    assert_eq!(r.u16(), 0x0102);
    assert_eq!(r.u16(), u16::MAX);
}

#[test]
fn roundtrip_i16() {
    let mut w = Writer::new();
    w.i16(i16::MIN);
    w.i16(-1000);
    w.i16(i16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i16(), i16::MIN);
    assert_eq!(r.i16(), -1000);
    assert_eq!(r.i16(), i16::MAX);
}

#[test]
fn roundtrip_u32() {
    let mut w = Writer::new();
    w.u32(0);
    w.u32(0x01020304);
    w.u32(u32::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u32(), 0);
    assert_eq!(r.u32(), 0x01020304);
    assert_eq!(r.u32(), u32::MAX);
}

#[test]
fn roundtrip_i32() {
    let mut w = Writer::new();
    w.i32(i32::MIN);
    w.i32(-123456);
    w.i32(123456);
    w.i32(i32::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i32(), i32::MIN);
    assert_eq!(r.i32(), -123456);
    assert_eq!(r.i32(), 123456);
    assert_eq!(r.i32(), i32::MAX);
}

#[test]
fn roundtrip_u64() {
    let mut w = Writer::new();
    w.u64(0);
    w.u64(0x0102030405060708);
    w.u64(u64::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u64(), 0);
    assert_eq!(r.u64(), 0x0102030405060708);
    assert_eq!(r.u64(), u64::MAX);
}

#[test]
fn roundtrip_i64() {
    let mut w = Writer::new();
    w.i64(i64::MIN);
    w.i64(-9_999_999_999);
    w.i64(9_999_999_999);
    w.i64(i64::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i64(), i64::MIN);
    assert_eq!(r.i64(), -9_999_999_999);
    assert_eq!(r.i64(), 9_999_999_999);
    assert_eq!(r.i64(), i64::MAX);
}

#[test]
fn roundtrip_f32() {
    let mut w = Writer::new();
    w.f32(1.5f32);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f32(), 1.5f32);
}

#[test]
fn roundtrip_f64() {
    let mut w = Writer::new();
    w.f64(std::f64::consts::PI);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f64(), std::f64::consts::PI);
}

#[test]
fn roundtrip_u8u8() {
    let mut w = Writer::new();
    w.u8u8(0xAB, 0x12);
    let data = w.flush();
    assert_eq!(data, [0xAB, 0x12]);
}

#[test]
fn roundtrip_u8u16() {
    let mut w = Writer::new();
    w.u8u16(0xAB, 0x1234);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0xAB);
    assert_eq!(r.u16(), 0x1234);
}

#[test]
fn roundtrip_u8u32() {
    let mut w = Writer::new();
    w.u8u32(0xCD, 0xDEADBEEF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0xCD);
    assert_eq!(r.u32(), 0xDEADBEEF);
}

#[test]
fn roundtrip_u8u64() {
    let mut w = Writer::new();
    w.u8u64(0xEF, 0x0102030405060708);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0xEF);
    assert_eq!(r.u64(), 0x0102030405060708);
}

#[test]
fn roundtrip_u8f32() {
    let mut w = Writer::new();
    w.u8f32(0x01, 1.5f32);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0x01);
    assert_eq!(r.f32(), 1.5f32);
}

#[test]
fn roundtrip_u8f64() {
    let mut w = Writer::new();
    w.u8f64(0x02, std::f64::consts::PI);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), 0x02);
    assert_eq!(r.f64(), std::f64::consts::PI);
}

#[test]
fn roundtrip_buf_and_strings() {
    let mut w = Writer::new();
    w.buf(&[0xde, 0xad]);
    w.utf8("héllo");
    w.ascii("ok");
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.buf(2), &[0xde, 0xad]);
    assert_eq!(r.utf8("héllo".len()), "héllo");
    assert_eq!(r.utf8(2), "ok");
}

// ---------------------------------------------------------------------------
// Checked reads
// ---------------------------------------------------------------------------

#[test]
fn try_reads_do_not_cross_end() {
    let data = [0x01, 0x02, 0x03];
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u64(), None);
    assert_eq!(r.try_u32(), None);
    assert_eq!(r.try_u16(), Some(0x0102));
    assert_eq!(r.try_buf(2), None);
    assert_eq!(r.try_u8(), Some(0x03));
    assert_eq!(r.try_u8(), None);
}

#[test]
fn try_reads_leave_cursor_on_failure() {
    let data = [0x01];
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u16(), None);
    assert_eq!(r.x, 0);
    assert_eq!(r.try_u8(), Some(0x01));
    assert_eq!(r.x, 1);
}
