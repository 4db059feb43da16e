//! `Case #n: c0 c1 ...` lines, `-1` for an unreachable galaxy.

use crate::dijkstra::Distance;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    #[error("expected `Case #<n>:` at the start of `{0}`")]
    MissingHeader(String),
    #[error("invalid cost `{token}` in case {case}")]
    InvalidCost { case: usize, token: String },
}

pub fn format_case(case_number: usize, answers: &[Option<Distance>]) -> String {
    let costs = answers
        .iter()
        .map(|a| a.map_or("-1".to_string(), |cost| cost.to_string()))
        .join(" ");
    if costs.is_empty() {
        format!("Case #{}:", case_number)
    } else {
        format!("Case #{}: {}", case_number, costs)
    }
}

/// Inverse of [`format_case`].
pub fn parse_case_line(line: &str) -> Result<(usize, Vec<Option<Distance>>), OutputError> {
    let missing = || OutputError::MissingHeader(line.to_string());
    let rest = line.trim().strip_prefix("Case #").ok_or_else(missing)?;
    let (num, costs) = rest.split_once(':').ok_or_else(missing)?;
    let case = num.trim().parse::<usize>().map_err(|_| missing())?;
    let answers = costs
        .split_whitespace()
        .map(|token| match token {
            "-1" => Ok(None),
            _ => token.parse::<Distance>().map(Some).map_err(|_| OutputError::InvalidCost {
                case,
                token: token.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((case, answers))
}
