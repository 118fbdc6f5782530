/// Search state inside a single gap
#[derive(Debug, Clone, PartialEq)]
pub struct ChoreographyState {
    /// Moves chosen so far in this gap (waypoints excluded)
    pub sequence: Vec<String>,

    pub standing: bool,

    /// Seconds left in the gap; never negative
    pub remaining_time: f64,
}

impl ChoreographyState {
    pub fn new(standing: bool, remaining_time: f64) -> Self {
        Self {
            sequence: Vec::new(),
            standing,
            remaining_time,
        }
    }

    pub fn last_move(&self) -> Option<&str> {
        self.sequence.last().map(String::as_str)
    }

    /// Occurrences of `name` in this gap's sequence
    pub fn occurrences(&self, name: &str) -> usize {
        self.sequence.iter().filter(|m| m.as_str() == name).count()
    }
}
