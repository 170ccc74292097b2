//! Common test utilities
#![allow(dead_code)]

use tensorcast::dtype::DType;
use tensorcast::runtime::SupportedFeatures;
use tensorcast::runtime::cpu::CpuClient;
use tensorcast::tensor::Tensor;

/// Create a CPU client with default features for testing
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Create a CPU client that cannot resize unbound outputs
pub fn create_cpu_client_without_resize() -> CpuClient {
    CpuClient::with_features(SupportedFeatures::default().with_output_resize(false))
}

/// Build a contiguous tensor of `dtype` from f64 values
///
/// Values are converted with `as`; Bool maps nonzero to true.
pub fn tensor_from_f64(values: &[f64], shape: &[usize], dtype: DType) -> Tensor {
    match dtype {
        DType::F64 => Tensor::from_slice(values, shape),
        DType::F32 => Tensor::from_slice(&convert(values, |v| v as f32), shape),
        #[cfg(feature = "f16")]
        DType::F16 => Tensor::from_slice(&convert(values, half::f16::from_f64), shape),
        #[cfg(feature = "f16")]
        DType::BF16 => Tensor::from_slice(&convert(values, half::bf16::from_f64), shape),
        DType::I64 => Tensor::from_slice(&convert(values, |v| v as i64), shape),
        DType::I32 => Tensor::from_slice(&convert(values, |v| v as i32), shape),
        DType::I16 => Tensor::from_slice(&convert(values, |v| v as i16), shape),
        DType::I8 => Tensor::from_slice(&convert(values, |v| v as i8), shape),
        DType::U8 => Tensor::from_slice(&convert(values, |v| v as u8), shape),
        DType::Bool => Tensor::from_bools(&convert(values, |v| v != 0.0), shape),
        other => panic!("no test constructor for {}", other),
    }
}

/// Read a tensor of any dtype back as f64 values
pub fn to_f64_vec(tensor: &Tensor) -> Vec<f64> {
    match tensor.dtype() {
        DType::F64 => tensor.to_vec::<f64>(),
        DType::F32 => convert(&tensor.to_vec::<f32>(), f64::from),
        #[cfg(feature = "f16")]
        DType::F16 => convert(&tensor.to_vec::<half::f16>(), half::f16::to_f64),
        #[cfg(feature = "f16")]
        DType::BF16 => convert(&tensor.to_vec::<half::bf16>(), half::bf16::to_f64),
        DType::I64 => convert(&tensor.to_vec::<i64>(), |v| v as f64),
        DType::I32 => convert(&tensor.to_vec::<i32>(), f64::from),
        DType::I16 => convert(&tensor.to_vec::<i16>(), f64::from),
        DType::I8 => convert(&tensor.to_vec::<i8>(), f64::from),
        DType::U8 => convert(&tensor.to_vec::<u8>(), f64::from),
        DType::Bool => convert(&tensor.to_bool_vec(), |b| if b { 1.0 } else { 0.0 }),
        other => panic!("no test reader for {}", other),
    }
}

fn convert<S: Copy, D>(values: &[S], f: impl Fn(S) -> D) -> Vec<D> {
    values.iter().map(|&v| f(v)).collect()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
