//! Category label parsing

/// Splits a whitespace-separated category string into labels.
///
/// Order and duplicates are preserved; empty input gives no labels.
pub fn parse_categories(input: &str) -> Vec<String> {
	input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_any_whitespace() {
		assert_eq!(
			parse_categories("Flowers  Colors\tCars\nWeather Food"),
			vec!["Flowers", "Colors", "Cars", "Weather", "Food"]
		);
	}

	#[test]
	fn keeps_duplicates() {
		assert_eq!(parse_categories("red red"), vec!["red", "red"]);
	}

	#[test]
	fn empty_input() {
		assert!(parse_categories("").is_empty());
		assert!(parse_categories("   ").is_empty());
	}
}
