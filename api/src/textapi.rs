use std::num::ParseIntError;

pub fn split<const N: usize>(s: &str) -> [&str; N] {
    let mut res = [""; N];
    for (i, piece) in s.splitn(N, ' ').enumerate() {
        res[i] = piece
    }
    res
}

// Parses "3,7,11" into [3, 7, 11]. An empty string is an empty list.
pub fn parse_int_list(s: &str) -> Result<Vec<i64>, ParseIntError> {
    if s.is_empty() {
        return Ok(vec![]);
    }
    s.split(',').map(|x| x.parse::<i64>()).collect()
}
