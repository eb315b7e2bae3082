#![cfg(feature = "dev")]

use polyfit_rs::internals::primitives::errors::PolyError;

#[test]
fn test_poly_error_display() {
    // EmptyInput
    let err = PolyError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = PolyError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // MismatchedShapes
    let err = PolyError::MismatchedShapes {
        name: "z",
        expected: (3, 4),
        got: (3, 3),
    };
    assert_eq!(
        format!("{}", err),
        "Shape mismatch: z grid is 3x3, expected 3x4"
    );

    // CountExceedsInput
    let err = PolyError::CountExceedsInput {
        count: 8,
        available: 6,
    };
    assert_eq!(
        format!("{}", err),
        "Observation count 8 exceeds available samples 6"
    );

    // Underdetermined
    let err = PolyError::Underdetermined {
        observations: 3,
        coefficients: 4,
    };
    assert_eq!(
        format!("{}", err),
        "Underdetermined system: 3 observations for 4 coefficients"
    );

    // SingularSystem
    let err = PolyError::SingularSystem {
        coefficients: 4,
        pivot_ratio: 1.5e-17,
    };
    assert_eq!(
        format!("{}", err),
        "Singular system: 4 coefficients, smallest/largest pivot ratio 1.5e-17"
    );

    // FixedOrderMismatch
    let err = PolyError::FixedOrderMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Fixed-order mismatch: expected 3 coefficients, got 2"
    );

    // CoefficientCount
    let err = PolyError::CoefficientCount {
        expected: 6,
        got: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Coefficient count mismatch: expected 6, got 5"
    );

    // GridLength
    let err = PolyError::GridLength {
        rows: 3,
        cols: 2,
        expected: 6,
        got: 7,
    };
    assert_eq!(
        format!("{}", err),
        "Grid buffer length mismatch: 3x2 grid needs 6 values, got 7"
    );

    // InvalidNumericValue
    let err = PolyError::InvalidNumericValue("y[1]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: y[1]=NaN");

    // InvalidTolerance
    let err = PolyError::InvalidTolerance(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: 1.5 (must be > 0, < 1 and finite)"
    );

    // DuplicateParameter
    let err = PolyError::DuplicateParameter {
        parameter: "solve_method",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'solve_method' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_singular_display_zero_pivot() {
    let err = PolyError::SingularSystem {
        coefficients: 2,
        pivot_ratio: 0.0,
    };
    assert_eq!(
        format!("{}", err),
        "Singular system: 2 coefficients, smallest/largest pivot ratio 0e0"
    );
}

#[test]
fn test_is_algebraic() {
    assert!(
        PolyError::Underdetermined {
            observations: 1,
            coefficients: 2
        }
        .is_algebraic()
    );
    assert!(
        PolyError::SingularSystem {
            coefficients: 2,
            pivot_ratio: 0.0
        }
        .is_algebraic()
    );
    assert!(!PolyError::EmptyInput.is_algebraic());
    assert!(!PolyError::MismatchedInputs { x_len: 1, y_len: 2 }.is_algebraic());
    assert!(!PolyError::InvalidTolerance(0.0).is_algebraic());
}

#[test]
fn test_poly_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(PolyError::EmptyInput);
    assert_eq!(err.to_string(), "Input arrays are empty");
}

#[test]
fn test_poly_error_clone_eq() {
    let err = PolyError::InvalidNumericValue("x[0]=inf".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, PolyError::EmptyInput);
}
