use std::io::Write;

/// An implementation of `std::io::Write` based on a `String`.
#[derive(Default)]
pub(crate) struct WritableString(String);

impl Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Display for WritableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut s = WritableString::default();
        write!(s, "abc").unwrap();
        write!(s, "def").unwrap();
        s.flush().unwrap();
        assert_eq!("abcdef", s.to_string())
    }
}
