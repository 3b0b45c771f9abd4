/// Horizontal rule: three or more of the same `*`, `-` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['*', '-', '_'];
    pub const MIN_MARKERS: usize = 3;

    /// Spaces between markers are allowed (`* * *`); mixing markers is not.
    pub fn matches(line: &str) -> bool {
        let mut marker = None;
        let mut count = 0;
        for c in line.trim().chars() {
            if c == ' ' || c == '\t' {
                continue;
            }
            if !Self::MARKERS.contains(&c) || marker.is_some_and(|m| m != c) {
                return false;
            }
            marker = Some(c);
            count += 1;
        }
        count >= Self::MIN_MARKERS
    }
}
