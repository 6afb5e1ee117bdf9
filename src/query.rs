/// Split raw user input on commas into trimmed ingredient tokens.
/// Blank entries are dropped, so ", ,egg," gives ["egg"].
pub fn parse_ingredient_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_ingredient_input(" chicken, rice ,bell pepper"),
            vec!["chicken", "rice", "bell pepper"]
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_ingredient_input("").is_empty());
        assert!(parse_ingredient_input(" , ,").is_empty());
    }
}
