use numconv::{
    checked_cast, wrapping_cast, BinaryOp, ConversionError, IntType, IntValue, Operation,
    OverflowMode,
};

#[test]
fn test_widening_product_fits_wide_accumulator() {
    let (first, second) = (20_i16, 21_i16);
    let first = IntValue::from(first).widen(IntType::I32).unwrap();
    let second = IntValue::from(second).widen(IntType::I32).unwrap();

    for mode in [OverflowMode::Checked, OverflowMode::Unchecked] {
        let product = IntValue::binary_op(&first, &second, BinaryOp::Mul, mode).unwrap();
        assert_eq!(product.as_i128(), 420);
        assert_eq!(product.ty(), IntType::I32);
    }
}

#[test]
fn test_implicit_narrowing_is_rejected() {
    let product = IntValue::from(2020_i32 * 2021);
    assert_eq!(
        product.widen(IntType::I16),
        Err(ConversionError::ImplicitNarrowing {
            from: IntType::I32,
            to: IntType::I16,
        })
    );
    // Even a value that would fit is rejected; only the types matter.
    assert!(IntValue::from(200_i32).widen(IntType::U8).is_err());
}

#[test]
fn test_lossy_narrowing_wraps() {
    assert_eq!(2020_i32 * 2021, 4_082_420);
    assert_eq!(wrapping_cast::<i16>(4_082_420_i32), 19188);
    assert_eq!(wrapping_cast::<i16>(4_084_420_i32), 21188);
    assert_eq!(
        IntValue::from(4_082_420_i32)
            .wrapping_cast(IntType::I16)
            .as_i128(),
        19188
    );
    assert!(checked_cast::<i16>(4_082_420_i32).is_err());
}

#[test]
fn test_lossless_narrowing_keeps_value() {
    assert_eq!(wrapping_cast::<u8>(200_i32), 200);
    assert_eq!(checked_cast::<u8>(200_i32), Ok(200));
}

#[test]
fn test_wrapped_sum_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(wrapping_cast::<u8>(100_i32 + 250), 94);
    }
}

#[test]
fn test_checked_cast_reports_operation() {
    let err = checked_cast::<u8>(350_i32).unwrap_err();
    assert_eq!(
        err.operation,
        Operation::Cast {
            value: 350,
            to: IntType::U8,
        }
    );
    assert_eq!(
        err.to_string(),
        "Arithmetic operation resulted in an overflow."
    );
    assert_eq!(err.operation.to_string(), "350 as u8");
}

#[test]
fn test_checked_binary_op_on_values() {
    let first = IntValue::from(100_u8);
    let second = IntValue::from(250_u8);

    let err = IntValue::checked_op(&first, &second, BinaryOp::Add).unwrap_err();
    match err {
        ConversionError::Overflow(err) => assert_eq!(
            err.operation,
            Operation::Binary {
                op: BinaryOp::Add,
                first: 100,
                second: 250,
                ty: IntType::U8,
            }
        ),
        _ => panic!("Expected an overflow, got {err:?}"),
    }

    let wrapped = IntValue::wrapping_op(&first, &second, BinaryOp::Add).unwrap();
    assert_eq!(wrapped.as_i128(), 94);
}

#[test]
fn test_mode_selects_behavior_of_casts() {
    let value = IntValue::from(350_i32);
    assert!(value.cast(IntType::U8, OverflowMode::Checked).is_err());
    assert_eq!(
        value
            .cast(IntType::U8, OverflowMode::Unchecked)
            .unwrap()
            .as_i128(),
        94
    );
}

#[test]
fn test_negative_values_narrow_to_unsigned_like_as() {
    assert_eq!(wrapping_cast::<u8>(-1_i32), u8::MAX);
    assert_eq!(wrapping_cast::<u16>(-2_i64), (-2_i64) as u16);
    assert!(checked_cast::<u32>(-1_i8).is_err());
    assert_eq!(checked_cast::<i64>(u32::MAX), Ok(u32::MAX as i64));
}
