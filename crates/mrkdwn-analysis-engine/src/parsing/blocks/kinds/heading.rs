/// `# Title` style header.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and trimmed text of an ATX header line.
    ///
    /// The marker run must be followed by whitespace: `#tag` is not a header.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let line = line.trim_start();
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((hashes as u8, rest.trim()))
    }
}

/// Header written as a text line over a `===` or `---` underline.
pub struct SetextHeading;

impl SetextHeading {
    /// Level for an underline line: 1 for `=`, 2 for `-`.
    pub fn underline_level(line: &str) -> Option<u8> {
        let t = line.trim();
        if t.is_empty() {
            None
        } else if t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }
}
