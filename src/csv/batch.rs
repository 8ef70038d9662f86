//! Tokenizing many independent lines at once

use super::tokenizer::LineTokenizer;

/// Tokenize every line, preserving order
///
/// # Examples
///
/// ```
/// use csvline::csv::tokenize_lines;
///
/// let rows = tokenize_lines(["a;b", "", r#""x;y""#]);
/// assert_eq!(rows, vec![vec!["a", "b"], vec![""], vec!["x;y"]]);
/// ```
pub fn tokenize_lines<I, S>(lines: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokenizer = LineTokenizer::new();
    lines
        .into_iter()
        .map(|line| tokenizer.tokenize(line.as_ref()))
        .collect()
}

/// Tokenize every line on the rayon thread pool, preserving order
///
/// Lines are independent and the tokenizer holds no state, so no
/// coordination is needed between workers.
#[cfg(feature = "parallel")]
pub fn par_tokenize_lines<S>(lines: &[S]) -> Vec<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let tokenizer = LineTokenizer::new();
    lines
        .par_iter()
        .map(|line| tokenizer.tokenize(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let rows = tokenize_lines(Vec::<String>::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_each_line_independent() {
        // An unterminated quote must not leak into the next line
        let rows = tokenize_lines([r#""open;still"#, "a;b"]);
        assert_eq!(rows, vec![vec!["open;still"], vec!["a", "b"]]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<String> = (0..1000)
            .map(|i| format!(r#"{};"name {}";"x""y";{}"#, i, i, i % 7))
            .collect();
        assert_eq!(par_tokenize_lines(&lines), tokenize_lines(&lines));
    }
}
