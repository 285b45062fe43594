//! Ranked category scores

/// One scored category label
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
	pub label: String,
	pub score: f32,
	/// Scoring failed and `score` holds the sentinel value
	pub degenerate: bool,
}

/// Categories ordered by descending score, ties in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking(Vec<RankedCategory>);

impl Ranking {
	/// Sorts the entries by descending score. The sort is stable.
	pub fn from_unsorted(mut entries: Vec<RankedCategory>) -> Self {
		entries.sort_by(|a, b| b.score.total_cmp(&a.score));
		Self(entries)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn top(&self) -> Option<&RankedCategory> {
		self.0.first()
	}

	pub fn labels(&self) -> Vec<&str> {
		self.0.iter().map(|c| c.label.as_str()).collect()
	}

	pub fn scores(&self) -> Vec<f32> {
		self.0.iter().map(|c| c.score).collect()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RankedCategory> {
		self.0.iter()
	}
}

impl<'a> IntoIterator for &'a Ranking {
	type Item = &'a RankedCategory;
	type IntoIter = std::slice::Iter<'a, RankedCategory>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
