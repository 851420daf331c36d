/// An enum acting like a `Result`, but producing warnings instead of errors.
///
/// There is always an "ok" value; it may come with warnings describing suspicious
/// (but valid) input.
pub enum WarningResult<T, W> {
    Ok(T),
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    /// Consumes this result, returning its value.
    ///
    /// The warnings, if any, are passed to the provided callback.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        let (t, warnings) = self.into_parts();
        if !warnings.is_empty() {
            f(warnings);
        }
        t
    }

    /// Zips two `WarningResult`, pairing their values and concatenating their warnings.
    pub fn zip<U>(self, other: WarningResult<U, W>) -> WarningResult<(T, U), W> {
        let (t, mut warnings) = self.into_parts();
        let (u, mut other_warnings) = other.into_parts();
        warnings.append(&mut other_warnings);
        if warnings.is_empty() {
            WarningResult::Ok((t, u))
        } else {
            WarningResult::Warned((t, u), warnings)
        }
    }

    fn into_parts(self) -> (T, Vec<W>) {
        match self {
            WarningResult::Ok(t) => (t, vec![]),
            WarningResult::Warned(t, w) => (t, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_warnings_ok() {
        let mut consumed = false;
        assert_eq!(
            1,
            WarningResult::Ok(1).consume_warnings(|_v: Vec<String>| consumed = true)
        );
        assert!(!consumed);
    }

    #[test]
    fn test_consume_warnings_warned() {
        let mut consumed = false;
        assert_eq!(
            1,
            WarningResult::Warned(1, vec!["".to_string()]).consume_warnings(|_| consumed = true)
        );
        assert!(consumed);
    }

    #[test]
    fn test_zip_without_warnings() {
        let r1: WarningResult<i32, String> = WarningResult::Ok(1);
        let z = r1.zip(WarningResult::Ok(2));
        let mut consumed = vec![];
        assert_eq!((1, 2), z.consume_warnings(|w| consumed = w));
        assert!(consumed.is_empty());
    }

    #[test]
    fn test_zip_concatenates_warnings() {
        let r1 = WarningResult::Warned(1, vec!["w1".to_string()]);
        let r2 = WarningResult::Warned(2, vec!["w2".to_string()]);
        let z = r1.zip(r2);
        let mut consumed = vec![];
        assert_eq!((1, 2), z.consume_warnings(|w| consumed = w));
        assert_eq!(vec!["w1".to_string(), "w2".to_string()], consumed);
    }
}
