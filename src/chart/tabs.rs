//! Tabbed terminal rendering, one tab per embedding source

use colored::*;

use super::PieChart;
use crate::config::CHART_WIDTH;
use crate::core::Ranking;

#[derive(Debug, Default)]
pub struct ChartTabs {
	tabs: Vec<(String, PieChart)>,
	selected: Option<usize>,
}

impl ChartTabs {
	pub fn from_rankings(rankings: &[(String, Ranking)]) -> Self {
		let tabs = rankings
			.iter()
			.map(|(name, ranking)| (name.clone(), PieChart::from_ranking(ranking)))
			.collect();
		Self { tabs, selected: None }
	}

	pub fn names(&self) -> Vec<&str> {
		self.tabs.iter().map(|(n, _)| n.as_str()).collect()
	}

	/// Selects a tab by source name; `false` if there is no such tab
	pub fn select(&mut self, name: &str) -> bool {
		match self.tabs.iter().position(|(n, _)| n == name) {
			Some(idx) => {
				self.selected = Some(idx);
				true
			}
			None => false,
		}
	}

	pub fn selected(&self) -> Option<(&str, &PieChart)> {
		self.selected
			.and_then(|idx| self.tabs.get(idx))
			.map(|(n, c)| (n.as_str(), c))
	}

	pub fn chart(&self, name: &str) -> Option<&PieChart> {
		self.tabs.iter().find(|(n, _)| n == name).map(|(_, c)| c)
	}

	/// Draws the selected tab, or every tab when none is selected
	pub fn render(&self) -> String {
		let mut out = String::new();
		out.push_str(&self.tab_bar());
		out.push('\n');

		match self.selected() {
			Some((name, chart)) => out.push_str(&render_chart(name, chart)),
			None => {
				for (name, chart) in &self.tabs {
					out.push_str(&render_chart(name, chart));
				}
			}
		}
		out
	}

	fn tab_bar(&self) -> String {
		self.tabs
			.iter()
			.enumerate()
			.map(|(i, (name, _))| {
				if self.selected == Some(i) {
					format!("[{}]", name).bright_blue().bold().to_string()
				} else {
					format!(" {} ", name).dimmed().to_string()
				}
			})
			.collect::<Vec<_>>()
			.join(" ")
	}
}

fn render_chart(name: &str, chart: &PieChart) -> String {
	let mut out = format!("\n{}\n", format!("─── {} ───", name).bright_blue().bold());

	if chart.is_empty() {
		out.push_str(&format!("  {}\n", "(no categories)".dimmed()));
		return out;
	}

	let label_width = chart.slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);

	for (i, slice) in chart.slices.iter().enumerate() {
		// exploded slices are pushed out from the pie
		let indent = " ".repeat(2 + (slice.explode * 10.0).round() as usize);
		let filled = (slice.share * CHART_WIDTH as f32).round() as usize;
		let bar = "█".repeat(filled);

		let bar = match i {
			0 => bar.bright_green(),
			1 => bar.bright_blue(),
			2 => bar.yellow(),
			_ => bar.white(),
		};

		out.push_str(&format!(
			"{}{:<width$} {} {} {}\n",
			indent,
			slice.label,
			bar,
			slice.percent_label().bright_white(),
			format!("({:.3})", slice.score).dimmed(),
			width = label_width,
		));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::RankedCategory;

	fn rankings() -> Vec<(String, Ranking)> {
		let ranking = Ranking::from_unsorted(vec![
			RankedCategory { label: "red".into(), score: 2.0, degenerate: false },
			RankedCategory { label: "blue".into(), score: 1.0, degenerate: false },
		]);
		vec![("glove_50d".into(), ranking.clone()), ("sentence_transformer_384".into(), ranking)]
	}

	#[test]
	fn one_tab_per_source() {
		let tabs = ChartTabs::from_rankings(&rankings());
		assert_eq!(tabs.names(), vec!["glove_50d", "sentence_transformer_384"]);
		assert!(tabs.selected().is_none());
		assert_eq!(tabs.chart("glove_50d").map(|c| c.slices.len()), Some(2));
	}

	#[test]
	fn select_by_name() {
		let mut tabs = ChartTabs::from_rankings(&rankings());
		assert!(tabs.select("sentence_transformer_384"));
		assert_eq!(tabs.selected().map(|(n, _)| n), Some("sentence_transformer_384"));
		assert!(!tabs.select("distilbert_512"));
		assert_eq!(tabs.selected().map(|(n, _)| n), Some("sentence_transformer_384"));
	}

	#[test]
	fn render_shows_selected_only() {
		colored::control::set_override(false);
		let mut tabs = ChartTabs::from_rankings(&rankings());

		let all = tabs.render();
		assert_eq!(all.matches("───").count(), 4);

		tabs.select("glove_50d");
		let one = tabs.render();
		assert!(one.contains("─── glove_50d ───"));
		assert!(!one.contains("─── sentence_transformer_384 ───"));
		assert!(one.contains("66.7%"));
	}

	#[test]
	fn empty_chart_renders_placeholder() {
		colored::control::set_override(false);
		let rankings = vec![("glove_50d".to_string(), Ranking::default())];
		let tabs = ChartTabs::from_rankings(&rankings);
		assert!(tabs.render().contains("(no categories)"));
	}
}
