//! Pie chart model of a ranking

use crate::config::{EXPLODE_SECOND_OF_THREE, EXPLODE_THIRD, EXPLODE_TOP};
use crate::core::Ranking;

/// Radial offset per slice: the top slice always, plus the second slice
/// for exactly three categories or the third slice for more than three.
pub fn explode_offsets(n: usize) -> Vec<f32> {
	let mut offsets = vec![0.0; n];
	if n == 0 {
		return offsets;
	}

	offsets[0] = EXPLODE_TOP;
	if n == 3 {
		offsets[1] = EXPLODE_SECOND_OF_THREE;
	} else if n > 3 {
		offsets[2] = EXPLODE_THIRD;
	}
	offsets
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
	pub label: String,
	pub score: f32,
	/// Fraction of the whole pie, 0 when every score is 0
	pub share: f32,
	pub explode: f32,
}

impl Slice {
	/// Percentage text as drawn on the slice
	pub fn percent_label(&self) -> String {
		format!("{:.1}%", self.share * 100.0)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieChart {
	pub slices: Vec<Slice>,
}

impl PieChart {
	pub fn from_ranking(ranking: &Ranking) -> Self {
		let total: f32 = ranking.iter().map(|c| c.score).sum();
		let offsets = explode_offsets(ranking.len());

		let slices = ranking
			.iter()
			.zip(offsets)
			.map(|(c, explode)| Slice {
				label: c.label.clone(),
				score: c.score,
				share: if total > 0.0 { c.score / total } else { 0.0 },
				explode,
			})
			.collect();

		Self { slices }
	}

	pub fn is_empty(&self) -> bool {
		self.slices.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::RankedCategory;

	#[test]
	fn explode_rule() {
		assert!(explode_offsets(0).is_empty());
		assert_eq!(explode_offsets(1), vec![0.2]);
		assert_eq!(explode_offsets(2), vec![0.2, 0.0]);
		assert_eq!(explode_offsets(3), vec![0.2, 0.1, 0.0]);
		assert_eq!(explode_offsets(5), vec![0.2, 0.0, 0.05, 0.0, 0.0]);
	}

	#[test]
	fn shares_are_proportional() {
		let ranking = Ranking::from_unsorted(vec![
			RankedCategory { label: "a".into(), score: 3.0, degenerate: false },
			RankedCategory { label: "b".into(), score: 1.0, degenerate: false },
		]);
		let chart = PieChart::from_ranking(&ranking);

		assert_eq!(chart.slices[0].share, 0.75);
		assert_eq!(chart.slices[0].percent_label(), "75.0%");
		assert_eq!(chart.slices[1].percent_label(), "25.0%");
		assert_eq!(chart.slices[0].explode, 0.2);
	}

	#[test]
	fn all_zero_scores_have_zero_share() {
		let ranking = Ranking::from_unsorted(vec![RankedCategory { label: "a".into(), score: 0.0, degenerate: true }]);
		assert_eq!(PieChart::from_ranking(&ranking).slices[0].share, 0.0);
	}
}
