use strong_typedef::strong_typedef;

strong_typedef! {
    struct I8(i8);
    struct I16(i16);
    struct I32(i32);
    struct I64(i64);
    struct I128(i128);
    struct Isize(isize);
    struct U8(u8);
    struct U16(u16);
    struct U32(u32);
    struct U64(u64);
    struct U128(u128);
    struct Usize(usize);
    struct F32(f32);
    struct F64(f64);
}

fn main() {
    assert_eq!((I8::new(2) * I8::new(3)).get(), 6);
    assert_eq!((I16::new(2) * I16::new(3)).get(), 6);
    assert_eq!((I32::new(2) * I32::new(3)).get(), 6);
    assert_eq!((I64::new(2) * I64::new(3)).get(), 6);
    assert_eq!((I128::new(2) * I128::new(3)).get(), 6);
    assert_eq!((Isize::new(2) * Isize::new(3)).get(), 6);
    assert_eq!((U8::new(2) * U8::new(3)).get(), 6);
    assert_eq!((U16::new(2) * U16::new(3)).get(), 6);
    assert_eq!((U32::new(2) * U32::new(3)).get(), 6);
    assert_eq!((U64::new(2) * U64::new(3)).get(), 6);
    assert_eq!((U128::new(2) * U128::new(3)).get(), 6);
    assert_eq!((Usize::new(2) * Usize::new(3)).get(), 6);
    assert_eq!((F32::new(2.0) * F32::new(3.0)).get(), 6.0);
    assert_eq!((F64::new(2.0) * F64::new(3.0)).get(), 6.0);
}
