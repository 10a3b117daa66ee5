//! Integration tests for tnsio-core
//!
//! These tests exercise the value types the way the codec and its callers
//! use them together.

use scirs2_core::ndarray_ext::array;
use tnsio_core::{
    CoreError, DenseTensor, KruskalTensor, Matrix, SparseTensor, TensorData, TensorRef, VariantTag,
};

fn sample_subs() -> Vec<Vec<usize>> {
    vec![
        vec![0, 0, 0],
        vec![0, 2, 2],
        vec![1, 1, 1],
        vec![1, 2, 0],
        vec![1, 2, 1],
        vec![1, 2, 2],
        vec![1, 3, 1],
        vec![2, 0, 0],
        vec![2, 0, 1],
        vec![2, 2, 0],
        vec![2, 2, 1],
        vec![2, 3, 0],
        vec![2, 3, 2],
        vec![3, 0, 0],
        vec![3, 0, 1],
        vec![3, 2, 0],
        vec![4, 0, 2],
        vec![4, 3, 2],
    ]
}

#[test]
fn test_sparse_reads_zero_at_unlisted_coordinates() {
    let subs = sample_subs();
    let vals: Vec<f64> = (1..=18).map(f64::from).collect();
    let sparse = SparseTensor::new(subs.clone(), vals, vec![5, 4, 3]).unwrap();

    let mut listed = 0;
    for i in 0..5 {
        for j in 0..4 {
            for k in 0..3 {
                let value = sparse.get(&[i, j, k]).unwrap();
                match subs.iter().position(|s| s == &vec![i, j, k]) {
                    Some(pos) => {
                        assert_eq!(value, (pos + 1) as f64);
                        listed += 1;
                    }
                    None => assert_eq!(value, 0.0),
                }
            }
        }
    }
    assert_eq!(listed, 18);
}

#[test]
fn test_dense_sparse_agree() {
    let data: Vec<f64> = (1..=27).map(f64::from).collect();
    let dense = DenseTensor::from_vec(data, &[3, 3, 3]).unwrap();
    let sparse = SparseTensor::from_dense(&dense);

    assert_eq!(sparse.nnz(), 27);
    assert!(sparse.to_dense().unwrap().is_equal(&dense));
}

#[test]
fn test_tensor_data_kinds() {
    let matrix: Matrix = array![[1.0, 5.0], [2.0, 6.0], [3.0, 7.0], [4.0, 8.0]];
    let kruskal = KruskalTensor::new(array![3.0, 2.0], vec![matrix.clone()]).unwrap();

    let values = [
        TensorData::from(DenseTensor::zeros(&[4, 2]).unwrap()),
        TensorData::from(SparseTensor::zeros(vec![4, 2]).unwrap()),
        TensorData::from(kruskal),
        TensorData::from(matrix),
    ];

    let tags: Vec<VariantTag> = values.iter().map(TensorData::tag).collect();
    assert_eq!(tags, VariantTag::ALL.to_vec());

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.is_equal(b), i == j);
        }
    }

    let borrowed = TensorRef::from(&values[3]);
    assert_eq!(borrowed.tag(), VariantTag::Matrix);
    assert_eq!(borrowed.shape().as_slice(), &[4, 2]);
}

#[test]
fn test_construction_errors_are_descriptive() {
    let err = SparseTensor::new(vec![vec![5, 0, 0]], vec![1.0], vec![5, 4, 3]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index out of bounds: index [5, 0, 0] exceeds shape [5, 4, 3]"
    );

    let err = DenseTensor::from_vec(vec![0.0; 26], &[3, 3, 3]).unwrap_err();
    assert!(matches!(err, CoreError::ElementCount { expected: 27, .. }));
}
