/// Byte counters for one running download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Bytes received so far.
    pub bytes_downloaded: u64,

    /// Total expected bytes, from the Content-Length header.
    pub total_bytes: u64,
}

impl Progress {
    pub fn new(total_bytes: u64) -> Self {
        Self {
            bytes_downloaded: 0,
            total_bytes,
        }
    }

    /// Add a received chunk to the cumulative counter.
    pub fn record(&mut self, len: u64) {
        self.bytes_downloaded = self.bytes_downloaded.saturating_add(len);
    }

    /// Completion in percent, rounded to two decimals and capped at 100.
    ///
    /// An empty body reports 100.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 100.0;
        }
        let percent = self.bytes_downloaded as f64 / self.total_bytes as f64 * 100.0;
        let rounded = (percent * 100.0).round() / 100.0;
        rounded.min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_halfway() {
        let mut p = Progress::new(1000);
        p.record(500);
        assert_eq!(p.percentage(), 50.0);
    }

    #[test]
    fn test_percentage_complete_and_overshoot() {
        let mut p = Progress::new(1000);
        p.record(1000);
        assert_eq!(p.percentage(), 100.0);

        p.record(24);
        assert_eq!(p.bytes_downloaded, 1024);
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let mut p = Progress::new(3);
        p.record(1);
        assert_eq!(p.percentage(), 33.33);
    }

    #[test]
    fn test_percentage_empty_body() {
        assert_eq!(Progress::new(0).percentage(), 100.0);
    }
}
