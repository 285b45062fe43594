//! Exponentiated cosine similarity

use thiserror::Error;

/// Dense embedding vector
pub type Vector = Vec<f32>;

/// Score assigned to a category whose vector cannot be scored
pub const SENTINEL_SCORE: f32 = 0.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
	#[error("cannot score vectors of different dimensionality ({left} vs {right})")]
	DimensionMismatch { left: usize, right: usize },

	#[error("cannot score a zero-magnitude vector")]
	DegenerateVector,
}

pub fn zero_vector(dim: usize) -> Vector {
	vec![0.0; dim]
}

/// Euclidean norm
pub fn magnitude(v: &[f32]) -> f32 {
	norm64(v) as f32
}

// Accumulated in f64 so squares of tiny or huge components stay finite and non-zero.
fn norm64(v: &[f32]) -> f64 {
	v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

fn dot64(u: &[f32], v: &[f32]) -> f64 {
	u.iter().zip(v.iter()).map(|(&a, &b)| f64::from(a) * f64::from(b)).sum()
}

/// `exp(cos(u, v))`, in (0, e].
///
/// Both vectors must share dimensionality and have non-zero magnitude.
/// Exponentiation is strictly increasing, so ordering by this score is the
/// same as ordering by plain cosine similarity.
pub fn score(u: &[f32], v: &[f32]) -> Result<f32, ScoreError> {
	if u.len() != v.len() {
		return Err(ScoreError::DimensionMismatch {
			left: u.len(),
			right: v.len(),
		});
	}

	let norms = norm64(u) * norm64(v);
	if norms == 0.0 || !norms.is_finite() {
		return Err(ScoreError::DegenerateVector);
	}

	let cosine = (dot64(u, v) / norms).clamp(-1.0, 1.0);

	Ok(cosine.exp() as f32)
}

#[cfg(test)]
mod tests {
	use super::*;

	const E: f32 = std::f32::consts::E;

	fn approx(a: f32, b: f32) -> bool {
		(a - b).abs() < 1e-5
	}

	#[test]
	fn self_similarity_is_e() {
		for v in [vec![1.0, 0.0], vec![0.3, -2.0, 7.5], vec![1e-3; 50]] {
			assert!(approx(score(&v, &v).unwrap(), E), "{:?}", v);
		}
	}

	#[test]
	fn symmetric() {
		let u = vec![0.2, 0.9, -0.4];
		let v = vec![-1.0, 0.5, 0.25];
		assert_eq!(score(&u, &v).unwrap(), score(&v, &u).unwrap());
	}

	#[test]
	fn orthogonal_and_opposite() {
		assert!(approx(score(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 1.0));
		assert!(approx(score(&[1.0, 0.0], &[-3.0, 0.0]).unwrap(), (-1.0f32).exp()));
	}

	#[test]
	fn ordering_matches_cosine() {
		let q = vec![1.0, 0.0];
		let near = score(&q, &[0.9, 0.1]).unwrap();
		let far = score(&q, &[0.1, 0.9]).unwrap();
		assert!(near > far);
	}

	#[test]
	fn zero_vector_is_degenerate() {
		assert_eq!(score(&[0.0, 0.0], &[1.0, 0.0]), Err(ScoreError::DegenerateVector));
		assert_eq!(score(&[1.0, 0.0], &zero_vector(2)), Err(ScoreError::DegenerateVector));
		assert_eq!(score(&[], &[]), Err(ScoreError::DegenerateVector));
	}

	#[test]
	fn tiny_components_are_not_degenerate() {
		let v = vec![1e-25, 0.0];
		assert!(magnitude(&v) > 0.0);
		assert!(approx(score(&v, &v).unwrap(), E));
		assert!(approx(score(&v, &[0.0, 1e-25]).unwrap(), 1.0));
	}

	#[test]
	fn huge_components_do_not_overflow() {
		let v = vec![1e20, 1.0];
		assert!(magnitude(&v).is_finite());
		assert!(approx(score(&v, &v).unwrap(), E));
		assert!(approx(score(&[1e20, 0.0], &[0.0, 3e19]).unwrap(), 1.0));
		assert!(approx(score(&[1e20, 0.0], &[-1e20, 0.0]).unwrap(), (-1.0f32).exp()));
	}

	#[test]
	fn dimension_mismatch() {
		assert_eq!(
			score(&[1.0, 0.0], &[1.0, 0.0, 0.0]),
			Err(ScoreError::DimensionMismatch { left: 2, right: 3 })
		);
	}
}
