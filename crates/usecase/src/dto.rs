// crates/usecase/src/dto.rs

/// Output of a successful draw, in acceptance order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutput {
    pub values: Vec<i64>,
}
